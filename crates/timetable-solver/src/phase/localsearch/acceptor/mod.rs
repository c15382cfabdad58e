//! Acceptors decide whether a candidate move may be taken.
//!
//! Every acceptor takes moves that do not make the last step's score
//! worse. They differ in which worsening moves they let through, which is
//! how the search escapes local optima.

mod configured;
mod entity_tabu;
mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;

use std::fmt::Debug;

use timetable_core::domain::PlanningSolution;

use crate::scope::SolverRng;

pub use configured::ConfiguredAcceptor;
pub use entity_tabu::EntityTabuAcceptor;
pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Accepts or rejects moves during local search.
pub trait Acceptor<S: PlanningSolution>: Send + Debug {
    /// Returns true if a move touching `entity_indices` and resulting in
    /// `move_score` may be taken after a step that ended at
    /// `last_step_score`.
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        entity_indices: &[usize],
        rng: &mut SolverRng,
    ) -> bool;

    fn phase_started(&mut self, _initial_score: &S::Score) {}

    fn phase_ended(&mut self) {}

    fn step_started(&mut self) {}

    /// Called after a move was applied.
    fn step_ended(&mut self, _step_score: &S::Score, _entity_indices: &[usize]) {}
}

#[cfg(test)]
mod tests;
