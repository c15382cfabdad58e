// Incremental constraint protocol and tuple-based constraint sets.

use timetable_core::score::Score;
use timetable_core::ConstraintRef;

use super::super::analysis::{ConstraintAnalysis, ConstraintMatch};

/// A single constraint with incremental scoring capability.
///
/// # Incremental protocol
///
/// 1. `initialize` once, inserting every entity.
/// 2. Before an entity's variable changes: `on_retract` while the old value
///    is still visible in the solution.
/// 3. After the change: `on_insert` with the new value visible.
///
/// The score delta of a change is the sum of both returned deltas.
pub trait IncrementalConstraint<S, Sc: Score>: Send + Sync {
    /// Full evaluation from scratch. Touches no incremental state.
    fn evaluate(&self, solution: &S) -> Sc;

    /// Number of matches, computed from scratch.
    fn match_count(&self, solution: &S) -> usize;

    /// Rebuilds the internal indexes from the solution and returns the
    /// total score.
    fn initialize(&mut self, solution: &S) -> Sc;

    /// Inserts the entity at `entity_index` and returns the score delta.
    fn on_insert(&mut self, solution: &S, entity_index: usize) -> Sc;

    /// Retracts the entity at `entity_index` and returns the score delta.
    fn on_retract(&mut self, solution: &S, entity_index: usize) -> Sc;

    /// Clears all incremental state.
    fn reset(&mut self);

    fn name(&self) -> &str;

    fn is_hard(&self) -> bool {
        false
    }

    fn constraint_ref(&self) -> ConstraintRef {
        ConstraintRef::new("", self.name())
    }

    /// Matches with the entities that caused them.
    fn get_matches(&self, _solution: &S) -> Vec<ConstraintMatch<Sc>> {
        Vec::new()
    }

    /// Score impact of a single unit match.
    fn weight(&self) -> Sc {
        Sc::zero()
    }
}

/// Result of evaluating a single constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult<Sc> {
    pub name: String,
    pub score: Sc,
    pub match_count: usize,
    pub is_hard: bool,
}

/// A set of constraints evaluated together.
///
/// Implemented for tuples of `IncrementalConstraint` so that the whole set
/// is monomorphized.
pub trait ConstraintSet<S, Sc: Score>: Send + Sync {
    fn evaluate_all(&self, solution: &S) -> Sc;

    fn constraint_count(&self) -> usize;

    fn evaluate_each(&self, solution: &S) -> Vec<ConstraintResult<Sc>>;

    fn evaluate_detailed(&self, solution: &S) -> Vec<ConstraintAnalysis<Sc>>;

    fn initialize_all(&mut self, solution: &S) -> Sc;

    fn on_insert_all(&mut self, solution: &S, entity_index: usize) -> Sc;

    fn on_retract_all(&mut self, solution: &S, entity_index: usize) -> Sc;

    fn reset_all(&mut self);
}

impl<S: Send + Sync, Sc: Score> ConstraintSet<S, Sc> for () {
    #[inline]
    fn evaluate_all(&self, _solution: &S) -> Sc {
        Sc::zero()
    }

    #[inline]
    fn constraint_count(&self) -> usize {
        0
    }

    fn evaluate_each(&self, _solution: &S) -> Vec<ConstraintResult<Sc>> {
        Vec::new()
    }

    fn evaluate_detailed(&self, _solution: &S) -> Vec<ConstraintAnalysis<Sc>> {
        Vec::new()
    }

    #[inline]
    fn initialize_all(&mut self, _solution: &S) -> Sc {
        Sc::zero()
    }

    #[inline]
    fn on_insert_all(&mut self, _solution: &S, _entity_index: usize) -> Sc {
        Sc::zero()
    }

    #[inline]
    fn on_retract_all(&mut self, _solution: &S, _entity_index: usize) -> Sc {
        Sc::zero()
    }

    #[inline]
    fn reset_all(&mut self) {}
}

macro_rules! impl_constraint_set_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<S, Sc, $($T),+> ConstraintSet<S, Sc> for ($($T,)+)
        where
            S: Send + Sync,
            Sc: Score,
            $($T: IncrementalConstraint<S, Sc>,)+
        {
            #[inline]
            fn evaluate_all(&self, solution: &S) -> Sc {
                let mut total = Sc::zero();
                $(total = total + self.$idx.evaluate(solution);)+
                total
            }

            #[inline]
            fn constraint_count(&self) -> usize {
                let mut count = 0;
                $(let _ = &self.$idx; count += 1;)+
                count
            }

            fn evaluate_each(&self, solution: &S) -> Vec<ConstraintResult<Sc>> {
                vec![$(ConstraintResult {
                    name: self.$idx.name().to_string(),
                    score: self.$idx.evaluate(solution),
                    match_count: self.$idx.match_count(solution),
                    is_hard: self.$idx.is_hard(),
                }),+]
            }

            fn evaluate_detailed(&self, solution: &S) -> Vec<ConstraintAnalysis<Sc>> {
                vec![$(ConstraintAnalysis::new(
                    self.$idx.constraint_ref(),
                    self.$idx.weight(),
                    self.$idx.evaluate(solution),
                    self.$idx.get_matches(solution),
                    self.$idx.is_hard(),
                )),+]
            }

            #[inline]
            fn initialize_all(&mut self, solution: &S) -> Sc {
                let mut total = Sc::zero();
                $(total = total + self.$idx.initialize(solution);)+
                total
            }

            #[inline]
            fn on_insert_all(&mut self, solution: &S, entity_index: usize) -> Sc {
                let mut total = Sc::zero();
                $(total = total + self.$idx.on_insert(solution, entity_index);)+
                total
            }

            #[inline]
            fn on_retract_all(&mut self, solution: &S, entity_index: usize) -> Sc {
                let mut total = Sc::zero();
                $(total = total + self.$idx.on_retract(solution, entity_index);)+
                total
            }

            #[inline]
            fn reset_all(&mut self) {
                $(self.$idx.reset();)+
            }
        }
    };
}

impl_constraint_set_for_tuple!(0: C0);
impl_constraint_set_for_tuple!(0: C0, 1: C1);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
