//! Constraint API.
//!
//! - `ConstraintSet` trait for tuple-based constraint evaluation
//! - `IncrementalConstraint` trait for incremental scoring
//! - Analysis types for score explanation

pub mod analysis;
pub mod constraint_set;

pub use analysis::{ConstraintAnalysis, ConstraintMatch, ScoreExplanation};
pub use constraint_set::{ConstraintResult, ConstraintSet, IncrementalConstraint};
