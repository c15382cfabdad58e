//! ChangeMove - assigns a value to one planning variable of one entity.

use std::fmt::Debug;

use timetable_core::domain::{BasicVariable, PlanningSolution};
use timetable_scoring::ScoreDirector;

use super::Move;

/// Assigns `to_value` to one variable of the entity at `entity_index`.
///
/// # Example
///
/// ```
/// use timetable_core::{BasicVariableSolution, Timetable};
/// use timetable_scoring::{timetable_constraints, ScoreDirector, TypedScoreDirector};
/// use timetable_solver::heuristic::{ChangeMove, Move};
/// use timetable_test::fixtures::two_lessons_same_teacher;
///
/// let mut director = TypedScoreDirector::new(two_lessons_same_teacher(), timetable_constraints());
/// assert_eq!(director.calculate_score().hard(), -1);
///
/// let timeslot = Timetable::variables()[0];
/// let change = ChangeMove::new(timeslot, 1, Some(1));
/// assert!(change.is_doable(&director));
///
/// let undo = change.do_move(&mut director);
/// assert_eq!(director.calculate_score().hard(), 0);
///
/// undo.do_move(&mut director);
/// assert_eq!(director.calculate_score().hard(), -1);
/// ```
pub struct ChangeMove<S> {
    variable: BasicVariable<S>,
    entity_index: [usize; 1],
    to_value: Option<usize>,
}

impl<S> Clone for ChangeMove<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ChangeMove<S> {}

impl<S> Debug for ChangeMove<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMove")
            .field("entity_index", &self.entity_index[0])
            .field("variable_name", &self.variable.name)
            .field("to_value", &self.to_value)
            .finish()
    }
}

impl<S> ChangeMove<S> {
    pub fn new(variable: BasicVariable<S>, entity_index: usize, to_value: Option<usize>) -> Self {
        Self {
            variable,
            entity_index: [entity_index],
            to_value,
        }
    }

    pub fn entity_index(&self) -> usize {
        self.entity_index[0]
    }

    pub fn to_value(&self) -> Option<usize> {
        self.to_value
    }

    pub fn variable(&self) -> &BasicVariable<S> {
        &self.variable
    }
}

impl<S: PlanningSolution> Move<S> for ChangeMove<S> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let solution = score_director.working_solution();
        let in_range = self
            .to_value
            .map_or(true, |value| value < self.variable.value_count(solution));
        in_range && self.variable.get(solution, self.entity_index[0]) != self.to_value
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self {
        let entity_index = self.entity_index[0];
        let old_value = self
            .variable
            .get(score_director.working_solution(), entity_index);

        score_director.before_variable_changed(entity_index, self.variable.name);
        self.variable
            .set(score_director.working_solution_mut(), entity_index, self.to_value);
        score_director.after_variable_changed(entity_index, self.variable.name);

        Self::new(self.variable, entity_index, old_value)
    }

    fn entity_indices(&self) -> &[usize] {
        &self.entity_index
    }

    fn variable_name(&self) -> &str {
        self.variable.name
    }
}
