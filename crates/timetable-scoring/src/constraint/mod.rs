//! Typed constraint infrastructure.
//!
//! Filters, keys and weights are generic type parameters, so each
//! constraint is fully specialized with no boxing per predicate call.

pub mod bi_incremental;


pub use bi_incremental::IncrementalBiConstraint;
