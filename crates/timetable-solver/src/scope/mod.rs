//! Scope hierarchy for solver execution.
//!
//! - [`SolverScope`]: top level, owns the working solution and the best snapshot
//! - [`PhaseScope`]: per-phase state
//! - [`StepScope`]: per-step state within a phase

mod phase;
mod solver;
mod step;

pub use phase::PhaseScope;
pub use solver::{SolverRng, SolverScope};
pub use step::StepScope;

#[cfg(test)]
mod tests;
