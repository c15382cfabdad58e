//! SwapMove - exchanges the planning values of two entities.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::BasicVariableSolution;
use timetable_scoring::ScoreDirector;

use super::Move;

/// Swaps every planning variable between two entities.
///
/// For lessons this exchanges both the timeslot and the room, so two
/// lessons trade places in the grid. A swap is its own undo.
pub struct SwapMove<S> {
    indices: [usize; 2],
    _phantom: PhantomData<fn() -> S>,
}

impl<S> Clone for SwapMove<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SwapMove<S> {}

impl<S> Debug for SwapMove<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapMove")
            .field("left_entity_index", &self.indices[0])
            .field("right_entity_index", &self.indices[1])
            .finish()
    }
}

impl<S> SwapMove<S> {
    pub fn new(left_entity_index: usize, right_entity_index: usize) -> Self {
        Self {
            indices: [left_entity_index, right_entity_index],
            _phantom: PhantomData,
        }
    }

    pub fn left_entity_index(&self) -> usize {
        self.indices[0]
    }

    pub fn right_entity_index(&self) -> usize {
        self.indices[1]
    }
}

impl<S: BasicVariableSolution> Move<S> for SwapMove<S> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let [left, right] = self.indices;
        if left == right {
            return false;
        }
        let solution = score_director.working_solution();
        S::variables()
            .iter()
            .any(|variable| variable.get(solution, left) != variable.get(solution, right))
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self {
        let [left, right] = self.indices;
        for variable in S::variables() {
            let solution = score_director.working_solution();
            let left_value = variable.get(solution, left);
            let right_value = variable.get(solution, right);
            if left_value == right_value {
                continue;
            }

            score_director.before_variable_changed(left, variable.name);
            score_director.before_variable_changed(right, variable.name);
            let solution = score_director.working_solution_mut();
            variable.set(solution, left, right_value);
            variable.set(solution, right, left_value);
            score_director.after_variable_changed(left, variable.name);
            score_director.after_variable_changed(right, variable.name);
        }
        *self
    }

    fn entity_indices(&self) -> &[usize] {
        &self.indices
    }

    fn variable_name(&self) -> &str {
        "*"
    }
}
