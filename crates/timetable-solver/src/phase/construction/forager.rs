//! Construction foragers pick one candidate of a placement.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;
use tracing::trace;

use super::Placement;
use crate::heuristic::r#move::Move;

/// Chooses which candidate of a placement to apply.
pub trait ConstructionForager<S: PlanningSolution, M: Move<S>>: Send + Debug {
    /// Returns the index of the chosen candidate, or `None` if none of them
    /// is doable.
    ///
    /// Candidates may be applied and undone on `score_director`; the working
    /// solution is unchanged when this returns.
    fn pick_move_index<D: ScoreDirector<S>>(
        &self,
        placement: &Placement<S, M>,
        score_director: &mut D,
    ) -> Option<usize>;
}

/// Scores every candidate and picks the best. Ties go to the earliest
/// candidate.
pub struct BestFitForager<S> {
    _phantom: PhantomData<fn() -> S>,
}

impl<S> BestFitForager<S> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S> Clone for BestFitForager<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BestFitForager<S> {}

impl<S> Default for BestFitForager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Debug for BestFitForager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestFitForager").finish()
    }
}

impl<S: PlanningSolution, M: Move<S>> ConstructionForager<S, M> for BestFitForager<S> {
    fn pick_move_index<D: ScoreDirector<S>>(
        &self,
        placement: &Placement<S, M>,
        score_director: &mut D,
    ) -> Option<usize> {
        let mut best: Option<(usize, S::Score)> = None;

        for (index, m) in placement.moves().iter().enumerate() {
            if !m.is_doable(score_director) {
                continue;
            }
            let undo = m.do_move(score_director);
            let score = score_director.calculate_score();
            undo.do_move(score_director);
            trace!(
                event = "move_evaluated",
                entity = placement.entity_index(),
                candidate = ?m,
                score = %score,
            );

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(index, _)| index)
    }
}
