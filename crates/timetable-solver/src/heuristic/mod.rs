//! Heuristic building blocks
//!
//! - Moves: operations that modify planning variables
//! - Selectors: components that produce the candidate moves of a step

pub mod r#move;
pub mod selector;

pub use r#move::{ChangeMove, CompositeMove, EitherMove, Move, MoveArena, SwapMove};
pub use selector::{MoveSelector, RandomMoveSelector};
