//! Incremental constraint scoring for school timetabling.
//!
//! This crate provides:
//! - The `IncrementalConstraint` protocol and tuple-based `ConstraintSet`
//! - A keyed pair-join constraint (`IncrementalBiConstraint`) that only
//!   re-evaluates pairs sharing a join key with a changed entity
//! - The six timetable constraints and `full_score`
//! - Score directors: incremental (`TypedScoreDirector`) and full
//!   recalculation (`SimpleScoreDirector`)
//! - Score explanation
//!
//! # Architecture
//!
//! Constraint sets are tuples of concrete constraint types, so scoring is
//! fully monomorphized with no `Box<dyn Trait>` on the hot path.

#![allow(clippy::type_complexity)]

pub mod api;
pub mod constraint;
pub mod director;
pub mod timetable;

pub use api::analysis::{ConstraintAnalysis, ConstraintMatch, ScoreExplanation};
pub use api::constraint_set::{ConstraintResult, ConstraintSet, IncrementalConstraint};
pub use constraint::IncrementalBiConstraint;
pub use director::{ScoreDirector, SimpleScoreDirector, TypedScoreDirector};
pub use timetable::{
    explain_score, full_score, incremental_score, timetable_constraints, within_30_minutes,
    LessonPairConstraint, TimetableConstraints, TimetableScoreDirector,
};
