//! Entity tabu acceptor.

use std::collections::VecDeque;

use timetable_core::domain::PlanningSolution;

use super::Acceptor;
use crate::scope::SolverRng;

/// Tabu search over entities.
///
/// A move that is no worse than the last step is always accepted. The
/// entities moved in the last `entity_tabu_size` steps are tabu: a
/// worsening move touching one of them is rejected unless it reaches a
/// score better than the best seen in this phase (aspiration). Worsening
/// moves on other entities are accepted, so this acceptor is meant to be
/// paired with a forager that compares many accepted moves.
pub struct EntityTabuAcceptor<S: PlanningSolution> {
    entity_tabu_size: usize,
    tabu_list: VecDeque<usize>,
    best_score: Option<S::Score>,
}

impl<S: PlanningSolution> EntityTabuAcceptor<S> {
    /// # Panics
    /// Panics if `entity_tabu_size` is zero.
    pub fn new(entity_tabu_size: usize) -> Self {
        assert!(entity_tabu_size > 0, "entity_tabu_size must be > 0");
        Self {
            entity_tabu_size,
            tabu_list: VecDeque::with_capacity(entity_tabu_size),
            best_score: None,
        }
    }

    pub fn is_entity_tabu(&self, entity_index: usize) -> bool {
        self.tabu_list.contains(&entity_index)
    }

    pub fn tabu_count(&self) -> usize {
        self.tabu_list.len()
    }
}

impl<S: PlanningSolution> std::fmt::Debug for EntityTabuAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityTabuAcceptor")
            .field("entity_tabu_size", &self.entity_tabu_size)
            .field("tabu_list", &self.tabu_list)
            .finish()
    }
}

impl<S: PlanningSolution> Acceptor<S> for EntityTabuAcceptor<S> {
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        entity_indices: &[usize],
        _rng: &mut SolverRng,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        let touches_tabu = entity_indices.iter().any(|&e| self.is_entity_tabu(e));
        if !touches_tabu {
            return true;
        }
        let best = self.best_score.unwrap_or(*last_step_score);
        move_score > &best
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        self.tabu_list.clear();
        self.best_score = Some(*initial_score);
    }

    fn phase_ended(&mut self) {
        self.tabu_list.clear();
    }

    fn step_ended(&mut self, step_score: &S::Score, entity_indices: &[usize]) {
        let improved = match &self.best_score {
            Some(best) => step_score > best,
            None => true,
        };
        if improved {
            self.best_score = Some(*step_score);
        }
        for &entity_index in entity_indices {
            self.tabu_list.retain(|&e| e != entity_index);
            if self.tabu_list.len() == self.entity_tabu_size {
                self.tabu_list.pop_front();
            }
            self.tabu_list.push_back(entity_index);
        }
    }
}
