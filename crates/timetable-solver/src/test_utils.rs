//! Shared helpers for the unit tests of this crate.

use timetable_core::Timetable;
use timetable_scoring::{timetable_constraints, TimetableScoreDirector};

use crate::scope::SolverScope;

pub fn director(timetable: Timetable) -> TimetableScoreDirector {
    TimetableScoreDirector::new(timetable, timetable_constraints())
}

pub fn scope(timetable: Timetable) -> SolverScope<Timetable, TimetableScoreDirector> {
    let mut scope = SolverScope::with_seed(director(timetable), 42);
    scope.start_solving();
    scope
}
