//! Simple score director with full recalculation.

use timetable_core::domain::PlanningSolution;

use super::traits::ScoreDirector;

/// Recalculates the whole score whenever the solution has changed.
///
/// Slow but obviously correct; used as the reference the incremental
/// director is checked against.
pub struct SimpleScoreDirector<S: PlanningSolution, C> {
    working_solution: S,
    score_calculator: C,
    score_dirty: bool,
    cached_score: Option<S::Score>,
}

impl<S, C> SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    pub fn new(solution: S, score_calculator: C) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            score_calculator,
            score_dirty: true,
            cached_score: None,
        }
    }

    pub fn into_solution(self) -> S {
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl<S, C> ScoreDirector<S> for SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.mark_dirty();
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = (self.score_calculator)(&self.working_solution);
        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn full_score(&self) -> S::Score {
        (self.score_calculator)(&self.working_solution)
    }

    fn before_variable_changed(&mut self, _entity_index: usize, _variable_name: &str) {
        self.mark_dirty();
    }

    fn after_variable_changed(&mut self, _entity_index: usize, _variable_name: &str) {
        // Already marked dirty in before_variable_changed
    }

    fn reset(&mut self) {
        self.mark_dirty();
        self.cached_score = None;
    }
}
