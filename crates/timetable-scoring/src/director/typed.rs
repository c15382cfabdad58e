//! Incremental score director over a typed constraint set.

use timetable_core::domain::PlanningSolution;
use timetable_core::score::Score;

use crate::api::analysis::ScoreExplanation;
use crate::api::constraint_set::{ConstraintResult, ConstraintSet};
use crate::director::ScoreDirector;

/// A score director that keeps its score current through per-entity deltas.
///
/// The first `calculate_score` initializes every constraint. After that,
/// each bracketed variable change costs one retract and one insert per
/// constraint, touching only the entities that share a join key with the
/// changed one.
///
/// # Example
///
/// ```
/// use timetable_scoring::{timetable_constraints, ScoreDirector, TypedScoreDirector};
/// use timetable_test::fixtures::two_lessons_same_teacher;
///
/// let mut director = TypedScoreDirector::new(two_lessons_same_teacher(), timetable_constraints());
/// let before = director.calculate_score();
/// assert_eq!(before.hard(), -1);
///
/// // Move the second lesson into the other timeslot.
/// let after = director.do_change(1, |s| s.lessons_mut()[1].set_timeslot(Some(1)));
/// assert_eq!(after.hard(), 0);
/// assert_eq!(after, director.full_score());
/// ```
pub struct TypedScoreDirector<S, C>
where
    S: PlanningSolution,
    C: ConstraintSet<S, S::Score>,
{
    working_solution: S,
    constraints: C,
    cached_score: S::Score,
    initialized: bool,
}

impl<S, C> TypedScoreDirector<S, C>
where
    S: PlanningSolution,
    C: ConstraintSet<S, S::Score>,
{
    pub fn new(solution: S, constraints: C) -> Self {
        Self {
            working_solution: solution,
            constraints,
            cached_score: S::Score::zero(),
            initialized: false,
        }
    }

    fn ensure_initialized(&mut self) {
        if !self.initialized {
            self.cached_score = self.constraints.initialize_all(&self.working_solution);
            self.initialized = true;
        }
    }

    /// Runs one bracketed change of the entity at `entity_index` and
    /// returns the updated score.
    #[inline]
    pub fn do_change<F>(&mut self, entity_index: usize, change_fn: F) -> S::Score
    where
        F: FnOnce(&mut S),
    {
        self.ensure_initialized();
        let retract = self
            .constraints
            .on_retract_all(&self.working_solution, entity_index);
        change_fn(&mut self.working_solution);
        let insert = self
            .constraints
            .on_insert_all(&self.working_solution, entity_index);
        self.cached_score = self.cached_score + retract + insert;
        self.cached_score
    }

    /// Returns the cached score, or zero before initialization.
    #[inline]
    pub fn get_score(&self) -> S::Score {
        self.cached_score
    }

    pub fn constraints(&self) -> &C {
        &self.constraints
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.constraint_count()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Per-constraint scores and match counts, computed from scratch.
    pub fn constraint_results(&self) -> Vec<ConstraintResult<S::Score>> {
        self.constraints.evaluate_each(&self.working_solution)
    }

    /// Full breakdown of the working solution's score.
    pub fn explain(&self) -> ScoreExplanation<S::Score> {
        let analyses = self.constraints.evaluate_detailed(&self.working_solution);
        let score = analyses
            .iter()
            .fold(S::Score::zero(), |total, a| total + a.score);
        ScoreExplanation::new(score, analyses)
    }

    /// Consumes the director and returns the working solution.
    pub fn take_solution(self) -> S {
        self.working_solution
    }
}

impl<S, C> std::fmt::Debug for TypedScoreDirector<S, C>
where
    S: PlanningSolution,
    C: ConstraintSet<S, S::Score>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedScoreDirector")
            .field("initialized", &self.initialized)
            .field("cached_score", &self.cached_score)
            .field("constraint_count", &self.constraints.constraint_count())
            .finish()
    }
}

impl<S, C> ScoreDirector<S> for TypedScoreDirector<S, C>
where
    S: PlanningSolution,
    C: ConstraintSet<S, S::Score>,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        self.ensure_initialized();
        self.working_solution.set_score(Some(self.cached_score));
        self.cached_score
    }

    fn full_score(&self) -> S::Score {
        self.constraints.evaluate_all(&self.working_solution)
    }

    fn before_variable_changed(&mut self, entity_index: usize, _variable_name: &str) {
        if !self.initialized {
            return;
        }
        let delta = self
            .constraints
            .on_retract_all(&self.working_solution, entity_index);
        self.cached_score = self.cached_score + delta;
    }

    fn after_variable_changed(&mut self, entity_index: usize, _variable_name: &str) {
        if !self.initialized {
            return;
        }
        let delta = self
            .constraints
            .on_insert_all(&self.working_solution, entity_index);
        self.cached_score = self.cached_score + delta;
    }

    fn is_incremental(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.constraints.reset_all();
        self.initialized = false;
        self.cached_score = S::Score::zero();
    }
}
