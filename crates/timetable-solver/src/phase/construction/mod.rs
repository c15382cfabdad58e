//! Construction heuristic phase.
//!
//! Builds an initial solution by placing each unassigned entity once, on
//! the best-scoring combination of values.

mod forager;
mod phase;
mod placer;

pub use forager::{BestFitForager, ConstructionForager};
pub use phase::ConstructionHeuristicPhase;
pub use placer::{EntityOrder, EntityPlacer, Placement, QueuedEntityPlacer};
