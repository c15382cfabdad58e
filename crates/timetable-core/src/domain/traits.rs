//! Core domain traits

use std::hash::Hash;

use crate::score::Score;

/// A planning solution: problem facts, planning entities and a score.
///
/// The solver works on one exclusively owned instance at a time and
/// publishes deep copies as best-solution snapshots, hence `Clone`.
///
/// # Example
///
/// ```
/// use timetable_core::{HardSoftScore, PlanningSolution};
///
/// #[derive(Clone)]
/// struct Slots {
///     assigned: Vec<Option<usize>>,
///     score: Option<HardSoftScore>,
/// }
///
/// impl PlanningSolution for Slots {
///     type Score = HardSoftScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score, or `None` before the first evaluation.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);

    /// Returns true if every planning variable has been assigned.
    fn is_initialized(&self) -> bool {
        true
    }
}

/// Trait for unique identification of entities and facts.
///
/// Fact equality is defined by this identifier alone.
pub trait PlanningId {
    /// The type of the unique identifier.
    type Id: Eq + Hash + Copy + std::fmt::Display + Send + Sync + 'static;

    /// Returns the unique identifier for this object.
    fn planning_id(&self) -> Self::Id;
}
