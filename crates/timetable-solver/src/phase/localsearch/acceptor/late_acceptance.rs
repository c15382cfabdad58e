//! Late acceptance acceptor.

use std::fmt::Debug;

use timetable_core::domain::PlanningSolution;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts a move that is not worse than the last step, or not worse than
/// the step score from `late_acceptance_size` steps ago.
///
/// # Example
///
/// ```
/// use timetable_core::Timetable;
/// use timetable_solver::phase::localsearch::LateAcceptanceAcceptor;
///
/// let acceptor = LateAcceptanceAcceptor::<Timetable>::new(400);
/// assert_eq!(acceptor.late_acceptance_size(), 400);
/// ```
pub struct LateAcceptanceAcceptor<S: PlanningSolution> {
    late_acceptance_size: usize,
    score_history: Vec<Option<S::Score>>,
    current_index: usize,
}

impl<S: PlanningSolution> LateAcceptanceAcceptor<S> {
    /// # Panics
    /// Panics if `late_acceptance_size` is zero.
    pub fn new(late_acceptance_size: usize) -> Self {
        assert!(late_acceptance_size > 0, "late_acceptance_size must be > 0");
        Self {
            late_acceptance_size,
            score_history: vec![None; late_acceptance_size],
            current_index: 0,
        }
    }

    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
    }
}

impl<S: PlanningSolution> Debug for LateAcceptanceAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LateAcceptanceAcceptor")
            .field("late_acceptance_size", &self.late_acceptance_size)
            .field("current_index", &self.current_index)
            .finish()
    }
}

impl<S: PlanningSolution> Clone for LateAcceptanceAcceptor<S> {
    fn clone(&self) -> Self {
        Self {
            late_acceptance_size: self.late_acceptance_size,
            score_history: self.score_history.clone(),
            current_index: self.current_index,
        }
    }
}

impl<S: PlanningSolution> Acceptor<S> for LateAcceptanceAcceptor<S> {
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        _entity_indices: &[usize],
        _rng: &mut SolverRng,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        match &self.score_history[self.current_index] {
            Some(late_score) => move_score >= late_score,
            None => true,
        }
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        for slot in &mut self.score_history {
            *slot = Some(*initial_score);
        }
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &S::Score, _entity_indices: &[usize]) {
        self.score_history[self.current_index] = Some(*step_score);
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
