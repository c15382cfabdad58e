//! Background solving with best-solution callbacks.
//!
//! [`SolverManager::solve_async`] runs one solve on a dedicated worker
//! thread and returns a [`SolveHandle`] right away. New best solutions
//! travel from the worker to a delivery thread over a channel; the delivery
//! thread stores each one in the handle's best-solution slot and then calls
//! the callback, so callbacks never overlap and arrive in the order the
//! solutions improved.

mod handle;
mod solver_manager;

pub use handle::SolveHandle;
pub use solver_manager::SolverManager;
