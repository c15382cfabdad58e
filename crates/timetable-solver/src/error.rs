//! Solver error types.

use timetable_config::ConfigError;
use timetable_core::ScoreParseError;

/// Failures when building a solver or collecting its result.
///
/// Solving itself never fails: an infeasible timetable is reported
/// through its score.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid starting temperature '{value}': {source}")]
    InvalidTemperature {
        value: String,
        #[source]
        source: ScoreParseError,
    },

    #[error("invalid best score limit '{value}': {source}")]
    InvalidBestScoreLimit {
        value: String,
        #[source]
        source: ScoreParseError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to spawn the solver thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("the solver thread panicked: {0}")]
    WorkerPanicked(String),
}

pub type Result<T, E = SolverError> = std::result::Result<T, E>;
