//! Score director implementations.
//!
//! The score director owns the working solution and keeps its score up to
//! date as planning variables change.
//!
//! - [`SimpleScoreDirector`] recalculates everything on every request.
//! - [`TypedScoreDirector`] applies per-entity deltas through a
//!   [`ConstraintSet`](crate::ConstraintSet).

mod simple;
mod traits;

pub mod typed;


pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
pub use typed::TypedScoreDirector;
