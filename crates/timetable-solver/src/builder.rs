//! Wiring from [`SolverConfig`] to solver components.

use timetable_config::{
    ConstructionHeuristicConfig, LocalSearchConfig, PhaseConfig, SolverConfig, TerminationConfig,
    DEFAULT_ACCEPTED_COUNT_LIMIT, DEFAULT_SELECTED_COUNT_LIMIT,
};
use timetable_core::domain::{BasicVariableSolution, PlanningSolution};
use timetable_core::score::ParseableScore;
use tracing::debug;

use crate::error::{Result, SolverError};
use crate::heuristic::RandomMoveSelector;
use crate::phase::construction::{BestFitForager, ConstructionHeuristicPhase, QueuedEntityPlacer};
use crate::phase::localsearch::{AcceptedCountForager, ConfiguredAcceptor, LocalSearchPhase};
use crate::phase::{ConfiguredLocalSearchPhase, ConfiguredPhase};
use crate::solver::Solver;
use crate::termination::{
    BestScoreTermination, OrTermination, StepCountTermination, TimeTermination,
    UnimprovedStepCountTermination, UnimprovedTimeTermination,
};

/// Every configurable limit; unset limits are `None` and never fire.
pub type ConfiguredTermination<S> = OrTermination<(
    Option<TimeTermination>,
    Option<StepCountTermination>,
    Option<UnimprovedStepCountTermination>,
    Option<UnimprovedTimeTermination>,
    Option<BestScoreTermination<<S as PlanningSolution>::Score>>,
)>;

/// A solver assembled from configuration.
pub type ConfiguredSolver<S> = Solver<ConfiguredPhase<S>, ConfiguredTermination<S>, S>;

/// Builds solvers and their parts from configuration.
pub struct SolverBuilder;

impl SolverBuilder {
    /// Validates `config` and builds a solver from it.
    ///
    /// Missing settings fall back to their defaults: a 30 second time
    /// limit, a first fit construction heuristic followed by late
    /// acceptance, and seed 0. A phase list that starts with local search
    /// gets a first fit construction heuristic in front of it.
    pub fn build<S>(config: &SolverConfig) -> Result<ConfiguredSolver<S>>
    where
        S: BasicVariableSolution,
        S::Score: ParseableScore,
    {
        config.validate()?;

        let phases = config
            .effective_phases()
            .iter()
            .map(Self::phase::<S>)
            .collect::<Result<Vec<_>>>()?;
        let termination = Self::termination::<S>(&config.effective_termination())?;

        let mode = config.environment_mode;
        let seed = mode.is_reproducible().then(|| config.seed());
        debug!(
            event = "solver_built",
            phases = phases.len(),
            environment_mode = ?mode,
            seed = ?seed,
        );

        Ok(Solver::new(phases)
            .with_termination(termination)
            .with_seed(seed)
            .with_score_assertions(mode.is_asserted()))
    }

    /// Combines every configured limit with OR.
    pub fn termination<S>(config: &TerminationConfig) -> Result<ConfiguredTermination<S>>
    where
        S: PlanningSolution,
        S::Score: ParseableScore,
    {
        let best_score = match &config.best_score_limit {
            Some(value) => {
                let target = S::Score::parse(value).map_err(|source| {
                    SolverError::InvalidBestScoreLimit {
                        value: value.clone(),
                        source,
                    }
                })?;
                Some(BestScoreTermination::new(target))
            }
            None => None,
        };

        Ok(OrTermination::new((
            config.time_limit().map(TimeTermination::new),
            config.step_count_limit.map(StepCountTermination::new),
            config
                .unimproved_step_count_limit
                .map(UnimprovedStepCountTermination::new),
            config
                .unimproved_time_limit()
                .map(UnimprovedTimeTermination::new),
            best_score,
        )))
    }

    pub fn phase<S>(config: &PhaseConfig) -> Result<ConfiguredPhase<S>>
    where
        S: BasicVariableSolution,
        S::Score: ParseableScore,
    {
        Ok(match config {
            PhaseConfig::ConstructionHeuristic(ch) => {
                ConfiguredPhase::Construction(Self::construction_phase(ch))
            }
            PhaseConfig::LocalSearch(ls) => ConfiguredPhase::LocalSearch(Self::local_search_phase(ls)?),
        })
    }

    pub fn construction_phase<S>(config: &ConstructionHeuristicConfig) -> ConstructionHeuristicPhase<S>
    where
        S: BasicVariableSolution,
    {
        ConstructionHeuristicPhase::new(
            QueuedEntityPlacer::new(config.construction_heuristic_type.into()),
            BestFitForager::new(),
        )
    }

    /// Tabu search accepts almost every move, so unless a forager is
    /// configured it compares the whole sample instead of taking the first
    /// accepted move.
    pub fn local_search_phase<S>(config: &LocalSearchConfig) -> Result<ConfiguredLocalSearchPhase<S>>
    where
        S: BasicVariableSolution,
        S::Score: ParseableScore,
    {
        let acceptor =
            ConfiguredAcceptor::from_config(&config.acceptor.clone().unwrap_or_default())?;
        let selected_count_limit = config
            .move_selector
            .as_ref()
            .and_then(|m| m.selected_count_limit)
            .unwrap_or(DEFAULT_SELECTED_COUNT_LIMIT);
        let default_accepted = if acceptor.wants_full_sample() {
            selected_count_limit
        } else {
            DEFAULT_ACCEPTED_COUNT_LIMIT
        };
        let accepted_count_limit = config
            .forager
            .as_ref()
            .and_then(|f| f.accepted_count_limit)
            .unwrap_or(default_accepted);

        Ok(LocalSearchPhase::new(
            RandomMoveSelector::new(selected_count_limit),
            acceptor,
            AcceptedCountForager::new(accepted_count_limit),
        ))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
