//! Composite terminations over tuples.

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Fires when any member fires.
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Fires when every member fires.
#[derive(Debug, Clone)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_composite_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<S, D, $($T),+> Termination<S, D> for OrTermination<($($T,)+)>
        where
            S: PlanningSolution,
            D: ScoreDirector<S>,
            $($T: Termination<S, D>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))||+
            }
        }

        impl<S, D, $($T),+> Termination<S, D> for AndTermination<($($T,)+)>
        where
            S: PlanningSolution,
            D: ScoreDirector<S>,
            $($T: Termination<S, D>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))&&+
            }
        }
    };
}

impl_composite_termination!(0: T0);
impl_composite_termination!(0: T0, 1: T1);
impl_composite_termination!(0: T0, 1: T1, 2: T2);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
