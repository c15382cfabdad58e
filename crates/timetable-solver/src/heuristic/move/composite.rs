//! CompositeMove - applies several moves as one.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::Move;

/// Executes its moves in order. The undo runs the undos in reverse.
///
/// The construction heuristic uses this to assign all variables of one
/// entity in a single candidate.
pub struct CompositeMove<S, M> {
    moves: Vec<M>,
    entity_indices: Vec<usize>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M: Clone> Clone for CompositeMove<S, M> {
    fn clone(&self) -> Self {
        Self {
            moves: self.moves.clone(),
            entity_indices: self.entity_indices.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S, M: Debug> Debug for CompositeMove<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMove")
            .field("moves", &self.moves)
            .finish()
    }
}

impl<S: PlanningSolution, M: Move<S>> CompositeMove<S, M> {
    pub fn new(moves: Vec<M>) -> Self {
        let mut entity_indices: Vec<usize> = Vec::new();
        for m in &moves {
            for &index in m.entity_indices() {
                if !entity_indices.contains(&index) {
                    entity_indices.push(index);
                }
            }
        }
        Self {
            moves,
            entity_indices,
            _phantom: PhantomData,
        }
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
}

impl<S: PlanningSolution, M: Move<S>> Move<S> for CompositeMove<S, M> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        self.moves.iter().any(|m| m.is_doable(score_director))
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self {
        let mut undos: Vec<M> = self
            .moves
            .iter()
            .map(|m| m.do_move(score_director))
            .collect();
        undos.reverse();
        Self {
            moves: undos,
            entity_indices: self.entity_indices.clone(),
            _phantom: PhantomData,
        }
    }

    fn entity_indices(&self) -> &[usize] {
        &self.entity_indices
    }

    fn variable_name(&self) -> &str {
        match self.moves.as_slice() {
            [single] => single.variable_name(),
            _ => "*",
        }
    }
}
