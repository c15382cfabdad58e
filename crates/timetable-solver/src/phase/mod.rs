//! Solver phases.
//!
//! - [`ConstructionHeuristicPhase`](construction::ConstructionHeuristicPhase)
//!   assigns every unassigned lesson
//! - [`LocalSearchPhase`](localsearch::LocalSearchPhase) improves a
//!   complete assignment until terminated

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use timetable_core::domain::BasicVariableSolution;
use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;

use crate::heuristic::{EitherMove, RandomMoveSelector};
use crate::scope::SolverScope;
use crate::termination::Termination;
use construction::ConstructionHeuristicPhase;
use localsearch::{AcceptedCountForager, ConfiguredAcceptor, LocalSearchPhase};

/// A phase of the solving process. Phases run in sequence on the same
/// solver scope.
pub trait Phase<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Runs until the phase is done or `termination` fires.
    ///
    /// The phase updates the best solution in `solver_scope` whenever it
    /// finds a better one.
    fn solve<T: Termination<S, D>>(
        &mut self,
        phase_index: usize,
        solver_scope: &mut SolverScope<S, D>,
        termination: &T,
    );

    fn phase_type_name(&self) -> &'static str;
}

/// The local search phase as built from configuration.
pub type ConfiguredLocalSearchPhase<S> = LocalSearchPhase<
    S,
    EitherMove<S>,
    RandomMoveSelector<S>,
    ConfiguredAcceptor<S>,
    AcceptedCountForager<S>,
>;

/// A phase built from configuration, dispatched by `match`.
pub enum ConfiguredPhase<S: BasicVariableSolution> {
    Construction(ConstructionHeuristicPhase<S>),
    LocalSearch(ConfiguredLocalSearchPhase<S>),
}

impl<S: BasicVariableSolution> Debug for ConfiguredPhase<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction(phase) => f.debug_tuple("Construction").field(phase).finish(),
            Self::LocalSearch(phase) => f.debug_tuple("LocalSearch").field(phase).finish(),
        }
    }
}

impl<S, D> Phase<S, D> for ConfiguredPhase<S>
where
    S: BasicVariableSolution,
    D: ScoreDirector<S>,
{
    fn solve<T: Termination<S, D>>(
        &mut self,
        phase_index: usize,
        solver_scope: &mut SolverScope<S, D>,
        termination: &T,
    ) {
        match self {
            Self::Construction(phase) => phase.solve(phase_index, solver_scope, termination),
            Self::LocalSearch(phase) => phase.solve(phase_index, solver_scope, termination),
        }
    }

    fn phase_type_name(&self) -> &'static str {
        match self {
            Self::Construction(phase) => Phase::<S, D>::phase_type_name(phase),
            Self::LocalSearch(phase) => Phase::<S, D>::phase_type_name(phase),
        }
    }
}
