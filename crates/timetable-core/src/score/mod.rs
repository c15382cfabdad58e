//! Score types for representing solution quality
//!
//! Scores compare solutions and guide the search. They are immutable
//! values; arithmetic returns new instances.

mod hard_soft;
mod traits;

#[cfg(test)]
mod tests;

pub use hard_soft::HardSoftScore;
pub use traits::{ParseableScore, Score, ScoreParseError};

/// Score level representing different constraint priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLevel {
    /// Hard constraints - must be satisfied for feasibility
    Hard,
    /// Soft constraints - optimization objectives
    Soft,
}
