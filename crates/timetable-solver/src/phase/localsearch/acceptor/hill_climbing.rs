//! Hill climbing acceptor.

use timetable_core::domain::PlanningSolution;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts moves that are not worse than the last step.
///
/// Sideways moves are allowed so the search can cross plateaus.
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> Acceptor<S> for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        _entity_indices: &[usize],
        _rng: &mut SolverRng,
    ) -> bool {
        move_score >= last_step_score
    }
}
