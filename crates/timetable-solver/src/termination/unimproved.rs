//! Terminations that fire when the best score stops improving.

use std::time::Duration;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after `limit` steps without a new best score.
///
/// # Example
///
/// ```
/// use timetable_solver::termination::UnimprovedStepCountTermination;
///
/// let term = UnimprovedStepCountTermination::new(1_000);
/// assert_eq!(term.limit(), 1_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D>
    for UnimprovedStepCountTermination
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.steps_since_last_improvement() >= self.limit
    }
}

/// Terminates after `limit` of wall-clock time without a new best score.
#[derive(Debug, Clone, Copy)]
pub struct UnimprovedTimeTermination {
    limit: Duration,
}

impl UnimprovedTimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for UnimprovedTimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.time_since_last_improvement() >= self.limit
    }
}
