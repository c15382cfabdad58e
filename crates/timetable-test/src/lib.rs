//! Shared test fixtures for the timetable crates.
//!
//! This crate only depends on `timetable-core`, so every other crate can
//! take it as a dev-dependency without cycles.
//!
//! - [`builder`] - terse `Timetable` construction
//! - [`fixtures`] - small named problem instances
//! - [`mutations`] - seeded random variable changes for equivalence checks
//!
//! ```toml
//! [dev-dependencies]
//! timetable-test = { workspace = true }
//! ```

pub mod builder;
pub mod fixtures;
pub mod mutations;

pub use builder::{at, TimetableBuilder};
pub use mutations::{random_change, randomize, LessonChange};
