//! Search engine for the school timetable solver.
//!
//! This crate provides:
//! - [`Solver`]: runs phases in order on one working timetable
//! - Phases: a construction heuristic and a local search
//! - Moves and move selection
//! - Termination conditions
//! - [`SolverManager`]: background solving with best-solution callbacks
//! - Configuration wiring ([`SolverBuilder`])

pub mod builder;
pub mod error;
pub mod event;
pub mod heuristic;
pub mod manager;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;

#[cfg(test)]
mod test_utils;

pub use builder::{ConfiguredSolver, ConfiguredTermination, SolverBuilder};
pub use error::{Result, SolverError};
pub use event::{
    CountingEventListener, LoggingEventListener, PhaseLifecycleListener, SolverEventListener,
    SolverEventSupport,
};
pub use heuristic::{
    ChangeMove, CompositeMove, EitherMove, Move, MoveArena, MoveSelector, RandomMoveSelector,
    SwapMove,
};
pub use manager::{SolveHandle, SolverManager};
pub use phase::{
    construction::{
        BestFitForager, ConstructionForager, ConstructionHeuristicPhase, EntityOrder,
        EntityPlacer, Placement, QueuedEntityPlacer,
    },
    localsearch::{
        AcceptedCountForager, Acceptor, ConfiguredAcceptor, EntityTabuAcceptor,
        HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchForager, LocalSearchPhase,
        SimulatedAnnealingAcceptor,
    },
    ConfiguredLocalSearchPhase, ConfiguredPhase, Phase,
};
pub use scope::{PhaseScope, SolverRng, SolverScope, StepScope};
pub use solver::{SolveResult, Solver};
pub use stats::SolverStats;
pub use termination::{
    AndTermination, BestScoreFeasibleTermination, BestScoreTermination, NoTermination,
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination, UnimprovedTimeTermination,
};
