//! Timetable Core - score types and the school timetable domain model
//!
//! This crate provides the fundamental building blocks shared by the
//! scoring and solver crates:
//! - Score types for representing solution quality
//! - Planning traits the solver is generic over
//! - The timetable domain: rooms, timeslots, lessons and the aggregate
//!   [`Timetable`](domain::Timetable)
//! - Constraint identification types

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::{ConstraintRef, ImpactType};
pub use domain::{
    BasicVariable, BasicVariableSolution, Lesson, LessonId, PlanningId, PlanningSolution, Room,
    RoomId, StudentGroupId, SubjectId, TeacherId, Timeslot, TimeslotId, Timetable,
};
pub use error::{Result, TimetableError};
pub use score::{HardSoftScore, ParseableScore, Score, ScoreParseError};
