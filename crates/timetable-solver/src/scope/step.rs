//! Step-level scope.

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::{PhaseScope, SolverRng};

/// A single step: pick a move, apply it, record the resulting score.
pub struct StepScope<'a, 'b, S: PlanningSolution, D: ScoreDirector<S>> {
    phase_scope: &'a mut PhaseScope<'b, S, D>,
    step_index: u64,
    step_score: Option<S::Score>,
}

impl<'a, 'b, S: PlanningSolution, D: ScoreDirector<S>> StepScope<'a, 'b, S, D> {
    pub fn new(phase_scope: &'a mut PhaseScope<'b, S, D>) -> Self {
        let step_index = phase_scope.step_count();
        Self {
            phase_scope,
            step_index,
            step_score: None,
        }
    }

    /// Index of this step within its phase.
    pub fn step_index(&self) -> u64 {
        self.step_index
    }

    pub fn step_score(&self) -> Option<&S::Score> {
        self.step_score.as_ref()
    }

    pub fn set_step_score(&mut self, score: S::Score) {
        self.step_score = Some(score);
    }

    /// Counts the step, then runs the score assertion if enabled.
    pub fn complete(&mut self) {
        self.phase_scope.increment_step_count();
        self.phase_scope.solver_scope_mut().assert_score("step");
    }

    pub fn phase_scope(&self) -> &PhaseScope<'b, S, D> {
        self.phase_scope
    }

    pub fn phase_scope_mut(&mut self) -> &mut PhaseScope<'b, S, D> {
        self.phase_scope
    }

    pub fn score_director(&self) -> &D {
        self.phase_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        self.phase_scope.score_director_mut()
    }

    pub fn director_and_rng(&mut self) -> (&mut D, &mut SolverRng) {
        self.phase_scope.solver_scope_mut().director_and_rng()
    }

    pub fn calculate_score(&mut self) -> S::Score {
        self.phase_scope.calculate_score()
    }
}
