//! Solving entry points with all wiring in place.

use std::path::Path;

use timetable_config::{ConfigError, SolverConfig};
use timetable_core::Timetable;
use timetable_scoring::{timetable_constraints, TimetableScoreDirector};
use timetable_solver::{Result, SolveHandle, SolveResult, SolverBuilder, SolverManager};
use tracing::info;

/// A solver manager for timetables scored by the six timetable
/// constraints.
pub type TimetableSolverManager = SolverManager<Timetable, TimetableScoreDirector>;

/// Wraps a timetable in the incremental score director.
pub fn score_director(timetable: Timetable) -> TimetableScoreDirector {
    TimetableScoreDirector::new(timetable, timetable_constraints())
}

pub fn solver_manager(config: SolverConfig) -> Result<TimetableSolverManager> {
    SolverManager::new(config, score_director)
}

/// Reads the solver configuration at `path`, or the defaults when there is
/// no file there. A file that exists but does not parse is an error.
pub fn load_config(path: impl AsRef<Path>) -> std::result::Result<SolverConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        info!(event = "config_default", path = %path.display());
        return Ok(SolverConfig::default());
    }
    let config = SolverConfig::load(path)?;
    info!(event = "config_loaded", path = %path.display());
    Ok(config)
}

/// Solves on the calling thread and returns the best timetable found.
pub fn solve(timetable: Timetable, config: &SolverConfig) -> Result<SolveResult<Timetable>> {
    let mut solver = SolverBuilder::build::<Timetable>(config)?;
    Ok(solver.solve(score_director(timetable)))
}

/// Starts solving in the background.
///
/// Only an invalid `config` is an error. Once started, the solve reports
/// every improving timetable to `on_best_solution_changed` and always
/// reports at least one.
pub fn solve_async<F>(
    timetable: Timetable,
    config: SolverConfig,
    on_best_solution_changed: F,
) -> Result<SolveHandle<Timetable>>
where
    F: FnMut(Timetable) + Send + 'static,
{
    Ok(solver_manager(config)?.solve_async(timetable, on_best_solution_changed))
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
