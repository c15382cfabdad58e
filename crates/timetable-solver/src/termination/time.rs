//! Wall-clock termination.

use std::time::Duration;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the solve has run for `limit`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use timetable_solver::termination::TimeTermination;
///
/// let term = TimeTermination::seconds(30);
/// assert_eq!(term.limit(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
