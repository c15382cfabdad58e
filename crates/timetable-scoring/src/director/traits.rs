//! Score director trait.

use timetable_core::domain::PlanningSolution;

/// Owns the working solution and computes its score.
///
/// Variable changes must be bracketed: call `before_variable_changed` while
/// the old value is still set, write the new value through
/// `working_solution_mut`, then call `after_variable_changed`.
pub trait ScoreDirector<S: PlanningSolution>: Send {
    fn working_solution(&self) -> &S;

    /// Mutable access for bracketed variable writes.
    fn working_solution_mut(&mut self) -> &mut S;

    /// Returns the current score and stores it on the working solution.
    fn calculate_score(&mut self) -> S::Score;

    /// Recomputes the score from scratch without touching any cache.
    fn full_score(&self) -> S::Score;

    fn clone_working_solution(&self) -> S {
        self.working_solution().clone()
    }

    fn before_variable_changed(&mut self, entity_index: usize, variable_name: &str);

    fn after_variable_changed(&mut self, entity_index: usize, variable_name: &str);

    /// Whether scores are maintained incrementally.
    fn is_incremental(&self) -> bool {
        false
    }

    /// Drops cached state after the solution was replaced or modified
    /// outside the bracketed protocol.
    fn reset(&mut self) {}

    /// Replaces the working solution.
    fn set_working_solution(&mut self, solution: S) {
        *self.working_solution_mut() = solution;
        self.reset();
    }
}
