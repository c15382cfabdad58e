//! EitherMove - a monomorphized union of ChangeMove and SwapMove.

use std::fmt::Debug;

use timetable_core::domain::BasicVariableSolution;
use timetable_scoring::ScoreDirector;

use super::{ChangeMove, Move, SwapMove};

/// The local search move type: a change of one variable or a swap of two
/// entities, without trait-object dispatch.
pub enum EitherMove<S> {
    Change(ChangeMove<S>),
    Swap(SwapMove<S>),
}

impl<S> Clone for EitherMove<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for EitherMove<S> {}

impl<S> Debug for EitherMove<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Change(m) => m.fmt(f),
            Self::Swap(m) => m.fmt(f),
        }
    }
}

impl<S> From<ChangeMove<S>> for EitherMove<S> {
    fn from(m: ChangeMove<S>) -> Self {
        Self::Change(m)
    }
}

impl<S> From<SwapMove<S>> for EitherMove<S> {
    fn from(m: SwapMove<S>) -> Self {
        Self::Swap(m)
    }
}

impl<S: BasicVariableSolution> Move<S> for EitherMove<S> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        match self {
            Self::Change(m) => m.is_doable(score_director),
            Self::Swap(m) => m.is_doable(score_director),
        }
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self {
        match self {
            Self::Change(m) => Self::Change(m.do_move(score_director)),
            Self::Swap(m) => Self::Swap(m.do_move(score_director)),
        }
    }

    fn entity_indices(&self) -> &[usize] {
        match self {
            Self::Change(m) => m.entity_indices(),
            Self::Swap(m) => m.entity_indices(),
        }
    }

    fn variable_name(&self) -> &str {
        match self {
            Self::Change(m) => m.variable_name(),
            Self::Swap(m) => m.variable_name(),
        }
    }
}
