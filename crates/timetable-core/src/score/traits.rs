//! Core Score trait definition

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for all score types.
///
/// Scores are compared lexicographically from the highest priority level
/// down; a greater score is a better solution. Implementations must be
/// cheap to copy and safe to hand across threads, since best-solution
/// snapshots travel with their score.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Ord
    + std::hash::Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns true if every hard constraint is satisfied.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns the number of score levels.
    fn levels_count() -> usize;

    /// Returns the level values, highest priority first.
    fn to_level_numbers(&self) -> Vec<i64>;

    /// Returns the semantic label for the level at `index`.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(index: usize) -> ScoreLevel;

    /// Collapses the levels into one number for temperature-based acceptance.
    ///
    /// Higher levels are weighted so that one unit always outweighs any
    /// realistic amount of the level below.
    fn to_scalar(&self) -> f64;

    /// Returns true if this score is strictly better than `other`.
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is strictly worse than `other`.
    fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }
}

/// A score that can be read back from its display form.
pub trait ParseableScore: Score {
    /// Parses a score such as `"0hard/-100soft"`.
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the canonical string form accepted by [`parse`](Self::parse).
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Score parse error: {message}")]
pub struct ScoreParseError {
    pub message: String,
}

impl ScoreParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
