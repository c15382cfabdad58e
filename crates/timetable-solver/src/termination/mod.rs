//! Termination conditions.
//!
//! Terminations are stateless: everything they decide on (elapsed time,
//! step counts, the last improvement) is tracked by the [`SolverScope`].
//! `Option<T>` is a termination that never fires when `None`, which lets
//! configured and unconfigured limits share one composite type.

mod best_score;
mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use best_score::{BestScoreFeasibleTermination, BestScoreTermination};
pub use composite::{AndTermination, OrTermination};
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::{UnimprovedStepCountTermination, UnimprovedTimeTermination};

/// Decides when solving stops. Checked between steps.
pub trait Termination<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool;
}

impl<S, D, T> Termination<S, D> for Option<T>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    T: Termination<S, D>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        self.as_ref()
            .is_some_and(|termination| termination.is_terminated(solver_scope))
    }
}

/// Never terminates on its own; only an early-termination request stops
/// the solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<S, D>) -> bool {
        false
    }
}

#[cfg(test)]
mod tests;
