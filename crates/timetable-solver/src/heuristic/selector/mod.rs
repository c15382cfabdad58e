//! Move selectors produce the candidate moves of each local search step.

mod random;

use std::fmt::Debug;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use crate::heuristic::r#move::{Move, MoveArena};
use crate::scope::SolverRng;

pub use random::RandomMoveSelector;

/// Fills a step's move arena.
///
/// Selection may draw from `rng`; with the same seed and the same working
/// solution a selector must produce the same moves in the same order.
pub trait MoveSelector<S: PlanningSolution, M: Move<S>>: Send + Debug {
    /// Appends this step's candidate moves to `arena`.
    fn select_moves<D: ScoreDirector<S>>(
        &mut self,
        score_director: &D,
        rng: &mut SolverRng,
        arena: &mut MoveArena<M>,
    );
}

#[cfg(test)]
mod tests;
