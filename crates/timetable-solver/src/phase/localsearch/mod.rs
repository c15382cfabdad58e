//! Local search phase.
//!
//! Improves a complete assignment step by step: sample moves, score each
//! one, let the acceptor filter them and the forager pick one.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{
    Acceptor, ConfiguredAcceptor, EntityTabuAcceptor, HillClimbingAcceptor,
    LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
pub use forager::{AcceptedCountForager, LocalSearchForager};
pub use phase::LocalSearchPhase;

#[cfg(test)]
mod tests;
