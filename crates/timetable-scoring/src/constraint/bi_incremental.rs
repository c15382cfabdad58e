//! Incremental bi-constraint for self-join evaluation.
//!
//! Entities are grouped by join key, so inserting or retracting one entity
//! only visits the entities that share its key.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

use timetable_core::score::Score;
use timetable_core::{ConstraintRef, ImpactType};

use crate::api::analysis::ConstraintMatch;
use crate::api::constraint_set::IncrementalConstraint;

/// Incremental constraint over unordered pairs of entities of one class.
///
/// - `extractor` returns the entity slice.
/// - `key_extractor` returns the join key, or `None` when the entity does
///   not take part (for example when a planning variable is unassigned).
/// - `filter` decides whether a same-key pair matches.
/// - `weight` is the non-negative magnitude of a match; `impact_type`
///   gives it a sign.
///
/// Pairs are identified by `(low, high)` entity indices, so each unordered
/// pair is counted exactly once and an entity never pairs with itself.
pub struct IncrementalBiConstraint<S, A, K, E, KE, F, W, Sc>
where
    Sc: Score,
{
    constraint_ref: ConstraintRef,
    impact_type: ImpactType,
    unit_weight: Sc,
    extractor: E,
    key_extractor: KE,
    filter: F,
    weight: W,
    is_hard: bool,
    /// entity_index -> pairs involving this entity
    entity_to_matches: HashMap<usize, HashSet<(usize, usize)>>,
    /// Matched pairs and the signed score they contributed on insertion.
    matches: HashMap<(usize, usize), Sc>,
    key_to_indices: HashMap<K, HashSet<usize>>,
    index_to_key: HashMap<usize, K>,
    _phantom: PhantomData<fn() -> (S, A)>,
}

impl<S, A, K, E, KE, F, W, Sc> IncrementalBiConstraint<S, A, K, E, KE, F, W, Sc>
where
    K: Eq + Hash + Clone,
    E: Fn(&S) -> &[A],
    KE: Fn(&S, &A) -> Option<K>,
    F: Fn(&S, &A, &A) -> bool,
    W: Fn(&S, &A, &A) -> Sc,
    Sc: Score,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        constraint_ref: ConstraintRef,
        impact_type: ImpactType,
        unit_weight: Sc,
        extractor: E,
        key_extractor: KE,
        filter: F,
        weight: W,
        is_hard: bool,
    ) -> Self {
        Self {
            constraint_ref,
            impact_type,
            unit_weight,
            extractor,
            key_extractor,
            filter,
            weight,
            is_hard,
            entity_to_matches: HashMap::new(),
            matches: HashMap::new(),
            key_to_indices: HashMap::new(),
            index_to_key: HashMap::new(),
            _phantom: PhantomData,
        }
    }

    pub fn impact_type(&self) -> ImpactType {
        self.impact_type
    }

    /// Number of pairs currently held by the incremental index.
    pub fn tracked_match_count(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    fn compute_score(&self, solution: &S, a: &A, b: &A) -> Sc {
        self.impact_type.apply((self.weight)(solution, a, b))
    }

    /// Calls `visit(low, high)` for every matching pair, by brute force.
    fn for_each_match(&self, solution: &S, mut visit: impl FnMut(usize, usize)) {
        let entities = (self.extractor)(solution);
        let keys: Vec<Option<K>> = entities
            .iter()
            .map(|e| (self.key_extractor)(solution, e))
            .collect();
        for low in 0..entities.len() {
            let Some(low_key) = &keys[low] else { continue };
            for high in (low + 1)..entities.len() {
                if keys[high].as_ref() != Some(low_key) {
                    continue;
                }
                if (self.filter)(solution, &entities[low], &entities[high]) {
                    visit(low, high);
                }
            }
        }
    }

    fn insert_entity(&mut self, solution: &S, index: usize) -> Sc {
        let entities = (self.extractor)(solution);
        let Some(entity) = entities.get(index) else {
            return Sc::zero();
        };
        let Some(key) = (self.key_extractor)(solution, entity) else {
            return Sc::zero();
        };

        self.index_to_key.insert(index, key.clone());
        let others = self.key_to_indices.entry(key).or_default();
        others.insert(index);

        let mut total = Sc::zero();
        for &other_idx in others.iter() {
            if other_idx == index {
                continue;
            }
            let (low, high) = if index < other_idx {
                (index, other_idx)
            } else {
                (other_idx, index)
            };
            let (a, b) = (&entities[low], &entities[high]);
            if !(self.filter)(solution, a, b) {
                continue;
            }
            let score = self.impact_type.apply((self.weight)(solution, a, b));
            if self.matches.insert((low, high), score).is_none() {
                self.entity_to_matches.entry(low).or_default().insert((low, high));
                self.entity_to_matches.entry(high).or_default().insert((low, high));
                total = total + score;
            }
        }
        total
    }

    fn retract_entity(&mut self, index: usize) -> Sc {
        if let Some(key) = self.index_to_key.remove(&index) {
            if let Some(indices) = self.key_to_indices.get_mut(&key) {
                indices.remove(&index);
                if indices.is_empty() {
                    self.key_to_indices.remove(&key);
                }
            }
        }

        let Some(pairs) = self.entity_to_matches.remove(&index) else {
            return Sc::zero();
        };

        let mut total = Sc::zero();
        for pair in pairs {
            if let Some(score) = self.matches.remove(&pair) {
                total = total - score;
            }
            let other = if pair.0 == index { pair.1 } else { pair.0 };
            if let Some(other_set) = self.entity_to_matches.get_mut(&other) {
                other_set.remove(&pair);
                if other_set.is_empty() {
                    self.entity_to_matches.remove(&other);
                }
            }
        }
        total
    }
}

impl<S, A, K, E, KE, F, W, Sc> IncrementalConstraint<S, Sc>
    for IncrementalBiConstraint<S, A, K, E, KE, F, W, Sc>
where
    K: Eq + Hash + Clone + Send + Sync,
    E: Fn(&S) -> &[A] + Send + Sync,
    KE: Fn(&S, &A) -> Option<K> + Send + Sync,
    F: Fn(&S, &A, &A) -> bool + Send + Sync,
    W: Fn(&S, &A, &A) -> Sc + Send + Sync,
    Sc: Score,
{
    fn evaluate(&self, solution: &S) -> Sc {
        let entities = (self.extractor)(solution);
        let mut total = Sc::zero();
        self.for_each_match(solution, |low, high| {
            total = total + self.compute_score(solution, &entities[low], &entities[high]);
        });
        total
    }

    fn match_count(&self, solution: &S) -> usize {
        let mut count = 0;
        self.for_each_match(solution, |_, _| count += 1);
        count
    }

    fn initialize(&mut self, solution: &S) -> Sc {
        self.reset();
        let count = (self.extractor)(solution).len();
        let mut total = Sc::zero();
        for i in 0..count {
            total = total + self.insert_entity(solution, i);
        }
        total
    }

    fn on_insert(&mut self, solution: &S, entity_index: usize) -> Sc {
        self.insert_entity(solution, entity_index)
    }

    fn on_retract(&mut self, _solution: &S, entity_index: usize) -> Sc {
        self.retract_entity(entity_index)
    }

    fn reset(&mut self) {
        self.entity_to_matches.clear();
        self.matches.clear();
        self.key_to_indices.clear();
        self.index_to_key.clear();
    }

    fn name(&self) -> &str {
        &self.constraint_ref.name
    }

    fn is_hard(&self) -> bool {
        self.is_hard
    }

    fn constraint_ref(&self) -> ConstraintRef {
        self.constraint_ref.clone()
    }

    fn get_matches(&self, solution: &S) -> Vec<ConstraintMatch<Sc>> {
        let entities = (self.extractor)(solution);
        let mut matches = Vec::new();
        self.for_each_match(solution, |low, high| {
            matches.push(ConstraintMatch::new(
                self.constraint_ref.clone(),
                self.compute_score(solution, &entities[low], &entities[high]),
                vec![low, high],
            ));
        });
        matches
    }

    fn weight(&self) -> Sc {
        self.impact_type.apply(self.unit_weight)
    }
}

impl<S, A, K, E, KE, F, W, Sc: Score> std::fmt::Debug
    for IncrementalBiConstraint<S, A, K, E, KE, F, W, Sc>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncrementalBiConstraint")
            .field("name", &self.constraint_ref.name)
            .field("impact_type", &self.impact_type)
            .field("match_count", &self.matches.len())
            .finish()
    }
}
