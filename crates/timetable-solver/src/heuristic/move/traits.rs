//! Move trait definition.

use std::fmt::Debug;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

/// A move that modifies one or more planning variables.
///
/// Moves are fully typed: no boxing, no virtual dispatch. Every variable
/// write goes through the score director's bracketed protocol so the
/// incremental score stays exact.
///
/// `do_move` returns the move that restores the previous values, which is
/// how the local search evaluates a candidate and rolls it back.
pub trait Move<S: PlanningSolution>: Send + Sync + Debug + Sized {
    /// Returns true if executing this move would change the solution.
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool;

    /// Executes this move and returns its undo move.
    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self;

    /// The entity indices this move touches.
    fn entity_indices(&self) -> &[usize];

    /// The variable this move affects.
    fn variable_name(&self) -> &str;
}
