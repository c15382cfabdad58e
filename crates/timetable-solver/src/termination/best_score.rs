//! Best score based terminations.

use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;
use timetable_core::score::Score;
use timetable_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the best score reaches `target` or better.
#[derive(Debug, Clone, Copy)]
pub struct BestScoreTermination<Sc: Score> {
    target: Sc,
}

impl<Sc: Score> BestScoreTermination<Sc> {
    pub fn new(target: Sc) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Sc {
        &self.target
    }
}

impl<S, D> Termination<S, D> for BestScoreTermination<S::Score>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope
            .best_score()
            .is_some_and(|best| *best >= self.target)
    }
}

/// Terminates once the best solution is feasible.
pub struct BestScoreFeasibleTermination<S> {
    _phantom: PhantomData<fn() -> S>,
}

impl<S> BestScoreFeasibleTermination<S> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S> std::fmt::Debug for BestScoreFeasibleTermination<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestScoreFeasibleTermination").finish()
    }
}

impl<S> Default for BestScoreFeasibleTermination<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D> Termination<S, D> for BestScoreFeasibleTermination<S>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.best_score().is_some_and(Score::is_feasible)
    }
}
