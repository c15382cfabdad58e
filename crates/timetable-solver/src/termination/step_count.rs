//! Step count termination.

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a total number of steps across all phases.
#[derive(Debug, Clone, Copy)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.total_step_count() >= self.limit
    }
}
