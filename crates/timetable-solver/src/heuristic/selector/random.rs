//! Random sampling over change and swap moves.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::Rng;
use timetable_core::domain::BasicVariableSolution;
use timetable_scoring::ScoreDirector;

use super::MoveSelector;
use crate::heuristic::r#move::{ChangeMove, EitherMove, MoveArena, SwapMove};
use crate::scope::SolverRng;

/// Samples `selected_count_limit` moves per step.
///
/// Each sample first picks a move kind uniformly: a change of one of the
/// solution's planning variables, or a swap (when there are at least two
/// entities). A change then picks a random entity and a random value from
/// that variable's range; a swap picks two distinct entities.
pub struct RandomMoveSelector<S> {
    selected_count_limit: usize,
    swaps_enabled: bool,
    _phantom: PhantomData<fn() -> S>,
}

impl<S> RandomMoveSelector<S> {
    pub fn new(selected_count_limit: usize) -> Self {
        Self {
            selected_count_limit,
            swaps_enabled: true,
            _phantom: PhantomData,
        }
    }

    /// Restricts sampling to change moves.
    pub fn without_swaps(mut self) -> Self {
        self.swaps_enabled = false;
        self
    }

    pub fn selected_count_limit(&self) -> usize {
        self.selected_count_limit
    }
}

impl<S> Debug for RandomMoveSelector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomMoveSelector")
            .field("selected_count_limit", &self.selected_count_limit)
            .field("swaps_enabled", &self.swaps_enabled)
            .finish()
    }
}

impl<S: BasicVariableSolution> MoveSelector<S, EitherMove<S>> for RandomMoveSelector<S> {
    fn select_moves<D: ScoreDirector<S>>(
        &mut self,
        score_director: &D,
        rng: &mut SolverRng,
        arena: &mut MoveArena<EitherMove<S>>,
    ) {
        let solution = score_director.working_solution();
        let entity_count = solution.entity_count();
        if entity_count == 0 {
            return;
        }
        let variables = S::variables();
        let swap_kind = (self.swaps_enabled && entity_count >= 2).then_some(variables.len());
        let kind_count = variables.len() + usize::from(swap_kind.is_some());
        if kind_count == 0 {
            return;
        }

        for _ in 0..self.selected_count_limit {
            let kind = rng.random_range(0..kind_count);
            if Some(kind) == swap_kind {
                let left = rng.random_range(0..entity_count);
                let mut right = rng.random_range(0..entity_count - 1);
                if right >= left {
                    right += 1;
                }
                arena.push(SwapMove::new(left, right).into());
                continue;
            }

            let variable = variables[kind];
            let value_count = variable.value_count(solution);
            if value_count == 0 {
                continue;
            }
            let entity_index = rng.random_range(0..entity_count);
            let value = rng.random_range(0..value_count);
            arena.push(ChangeMove::new(variable, entity_index, Some(value)).into());
        }
    }
}
