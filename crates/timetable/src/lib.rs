//! School timetabling with an incremental constraint solver.
//!
//! Lessons are assigned a timeslot and a room so that no teacher, student
//! group or room is double-booked, while teachers keep their room and get
//! back-to-back lessons and student groups avoid the same subject twice
//! in a row.
//!
//! # Example
//!
//! ```
//! use timetable::prelude::*;
//!
//! let problem = timetable::data::generate_problem().unwrap();
//! let config = SolverConfig::new().with_termination(TerminationConfig {
//!     step_count_limit: Some(50),
//!     ..TerminationConfig::default()
//! });
//!
//! let handle = timetable::solve_async(problem, config, |best: Timetable| {
//!     println!("new best: {}", best.score().unwrap());
//! })
//! .unwrap();
//! let result = handle.await_termination().unwrap();
//! assert_eq!(result.solution.assigned_count(), 20);
//! ```

pub mod data;
pub mod views;

#[cfg(feature = "console")]
pub mod console;

mod solver;

pub use solver::{
    load_config, score_director, solve, solve_async, solver_manager, TimetableSolverManager,
};

pub use timetable_config::{
    AcceptorConfig, ConfigError, EnvironmentMode, PhaseConfig, SolverConfig, TerminationConfig,
};
pub use timetable_core::{
    HardSoftScore, Lesson, PlanningSolution, Room, Score, Timeslot, Timetable, TimetableError,
};
pub use timetable_scoring::{explain_score, full_score, ScoreExplanation, TimetableScoreDirector};
pub use timetable_solver::{
    SolveHandle, SolveResult, SolverError, SolverEventListener, SolverManager, SolverStats,
};

pub mod prelude {
    pub use super::views::{TimetableView, ViewKind};
    pub use super::{
        HardSoftScore, Lesson, PlanningSolution, Room, Score, SolveHandle, SolverConfig,
        TerminationConfig, Timeslot, Timetable,
    };
}
