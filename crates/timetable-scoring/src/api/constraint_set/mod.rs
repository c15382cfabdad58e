// Typed constraint set for incremental scoring.

mod incremental;

#[cfg(test)]
mod tests;

pub use incremental::{ConstraintResult, ConstraintSet, IncrementalConstraint};
