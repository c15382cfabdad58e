//! Error types for timetable construction

use chrono::NaiveTime;
use thiserror::Error;

/// Errors raised while building a problem instance.
///
/// Solving itself never fails: an infeasible timetable is reported through
/// its hard score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// A timeslot whose start is not strictly before its end.
    #[error("Timeslot {id} must start before it ends (start {start}, end {end})")]
    InvalidTimeslot {
        id: u32,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Two facts or entities of the same kind share an identifier.
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    /// A lesson was pre-seeded with a timeslot outside the timetable's pool.
    #[error("Lesson {lesson} references timeslot index {index}, but only {pool_size} timeslots exist")]
    UnknownTimeslot {
        lesson: u32,
        index: usize,
        pool_size: usize,
    },

    /// A lesson was pre-seeded with a room outside the timetable's pool.
    #[error("Lesson {lesson} references room index {index}, but only {pool_size} rooms exist")]
    UnknownRoom {
        lesson: u32,
        index: usize,
        pool_size: usize,
    },
}

/// Result type alias for timetable construction.
pub type Result<T> = std::result::Result<T, TimetableError>;
