//! Entity placers for the construction heuristic.
//!
//! A placer decides which entities get placed, in which order, and which
//! candidate assignments each one is offered.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_config::ConstructionHeuristicType;
use timetable_core::domain::{BasicVariable, BasicVariableSolution, PlanningSolution};
use timetable_scoring::ScoreDirector;

use crate::heuristic::r#move::{ChangeMove, CompositeMove, Move};

/// One entity to place, with every candidate assignment for it.
pub struct Placement<S, M> {
    entity_index: usize,
    moves: Vec<M>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S: PlanningSolution, M: Move<S>> Placement<S, M> {
    pub fn new(entity_index: usize, moves: Vec<M>) -> Self {
        Self {
            entity_index,
            moves,
            _phantom: PhantomData,
        }
    }

    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    pub fn moves(&self) -> &[M] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Removes and returns the candidate at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn take_move(&mut self, index: usize) -> M {
        self.moves.swap_remove(index)
    }
}

impl<S, M> Debug for Placement<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Placement")
            .field("entity_index", &self.entity_index)
            .field("move_count", &self.moves.len())
            .finish()
    }
}

/// Produces the placements of a construction phase.
pub trait EntityPlacer<S: PlanningSolution, M: Move<S>>: Send + Debug {
    /// Placements for every entity that still has an unassigned variable,
    /// in placement order.
    fn get_placements<D: ScoreDirector<S>>(&self, score_director: &D) -> Vec<Placement<S, M>>;
}

/// Order in which a [`QueuedEntityPlacer`] visits entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityOrder {
    /// Entity list order.
    #[default]
    Declared,
    /// Highest [`entity_difficulty`](BasicVariableSolution::entity_difficulty)
    /// first; ties keep list order.
    DifficultyDecreasing,
}

impl From<ConstructionHeuristicType> for EntityOrder {
    fn from(kind: ConstructionHeuristicType) -> Self {
        match kind {
            ConstructionHeuristicType::FirstFit => EntityOrder::Declared,
            ConstructionHeuristicType::FirstFitDecreasing => EntityOrder::DifficultyDecreasing,
        }
    }
}

/// Places entities one at a time, offering every combination of values for
/// the variables that are still unassigned.
///
/// Combinations are enumerated with the first variable outermost, so for a
/// lesson every room is tried in the first timeslot before moving on to the
/// second timeslot. Assigned variables are left alone.
pub struct QueuedEntityPlacer<S> {
    order: EntityOrder,
    _phantom: PhantomData<fn() -> S>,
}

impl<S> QueuedEntityPlacer<S> {
    pub fn new(order: EntityOrder) -> Self {
        Self {
            order,
            _phantom: PhantomData,
        }
    }

    pub fn order(&self) -> EntityOrder {
        self.order
    }
}

impl<S> Default for QueuedEntityPlacer<S> {
    fn default() -> Self {
        Self::new(EntityOrder::default())
    }
}

impl<S> Debug for QueuedEntityPlacer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueuedEntityPlacer")
            .field("order", &self.order)
            .finish()
    }
}

impl<S: BasicVariableSolution> QueuedEntityPlacer<S> {
    fn entity_order(&self, solution: &S) -> Vec<usize> {
        let mut entities: Vec<usize> = (0..solution.entity_count()).collect();
        if self.order == EntityOrder::DifficultyDecreasing {
            // Stable, so equally difficult entities keep list order.
            entities.sort_by_key(|&e| std::cmp::Reverse(solution.entity_difficulty(e)));
        }
        entities
    }

    fn candidates(
        solution: &S,
        entity_index: usize,
    ) -> Vec<CompositeMove<S, ChangeMove<S>>> {
        let open: Vec<BasicVariable<S>> = S::variables()
            .iter()
            .filter(|variable| variable.get(solution, entity_index).is_none())
            .copied()
            .collect();
        if open.is_empty() {
            return Vec::new();
        }

        let mut combinations: Vec<Vec<ChangeMove<S>>> = vec![Vec::new()];
        for variable in &open {
            let value_count = variable.value_count(solution);
            let mut next = Vec::with_capacity(combinations.len() * value_count);
            for prefix in &combinations {
                for value in 0..value_count {
                    let mut combination = prefix.clone();
                    combination.push(ChangeMove::new(*variable, entity_index, Some(value)));
                    next.push(combination);
                }
            }
            combinations = next;
        }
        combinations.into_iter().map(CompositeMove::new).collect()
    }
}

impl<S: BasicVariableSolution> EntityPlacer<S, CompositeMove<S, ChangeMove<S>>>
    for QueuedEntityPlacer<S>
{
    fn get_placements<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
    ) -> Vec<Placement<S, CompositeMove<S, ChangeMove<S>>>> {
        let solution = score_director.working_solution();
        self.entity_order(solution)
            .into_iter()
            .filter_map(|entity_index| {
                let moves = Self::candidates(solution, entity_index);
                (!moves.is_empty()).then(|| Placement::new(entity_index, moves))
            })
            .collect()
    }
}
