//! Moves that modify planning variables.
//!
//! - `ChangeMove<S>` assigns a value to one variable of one entity
//! - `SwapMove<S>` exchanges all variables between two entities
//! - `EitherMove<S>` is the local search union of the two
//! - `CompositeMove<S, M>` applies several moves as one
//!
//! Moves undo themselves: `do_move` returns the move that restores the
//! previous values.

mod arena;
mod change;
mod composite;
mod either;
mod swap;
mod traits;

pub use arena::MoveArena;
pub use change::ChangeMove;
pub use composite::CompositeMove;
pub use either::EitherMove;
pub use swap::SwapMove;
pub use traits::Move;
