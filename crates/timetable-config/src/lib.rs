//! Configuration for the timetable solver.
//!
//! Load solver configuration from TOML or YAML files to control
//! termination, phases and acceptors without code changes.
//!
//! # Examples
//!
//! ```
//! use timetable_config::{AcceptorConfig, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [termination]
//!     seconds_spent_limit = 30
//!     unimproved_step_count_limit = 5000
//!
//!     [[phases]]
//!     type = "construction_heuristic"
//!     construction_heuristic_type = "first_fit"
//!
//!     [[phases]]
//!     type = "local_search"
//!     [phases.acceptor]
//!     type = "late_acceptance"
//!     late_acceptance_size = 400
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.phases.len(), 2);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use timetable_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert_eq!(config.effective_phases().len(), 2);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time budget used when no termination limit is configured.
pub const DEFAULT_SECONDS_SPENT_LIMIT: u64 = 30;

pub const DEFAULT_LATE_ACCEPTANCE_SIZE: usize = 400;

pub const DEFAULT_ENTITY_TABU_SIZE: usize = 5;

pub const DEFAULT_STARTING_TEMPERATURE: &str = "0hard/2soft";

pub const DEFAULT_DECAY_RATE: f64 = 0.999;

pub const DEFAULT_ACCEPTED_COUNT_LIMIT: usize = 1;

pub const DEFAULT_SELECTED_COUNT_LIMIT: usize = 64;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results. Defaults to 0.
    #[serde(default)]
    pub random_seed: Option<u64>,

    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Phases, run in order. Empty means construction then late acceptance;
    /// see [`SolverConfig::effective_phases`].
    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format from its
    /// extension: `.yaml`/`.yml` as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, doesn't parse, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no solver run could honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for phase in &self.phases {
            let PhaseConfig::LocalSearch(ls) = phase else {
                continue;
            };
            match &ls.acceptor {
                Some(AcceptorConfig::LateAcceptance(la)) if la.late_acceptance_size == Some(0) => {
                    return Err(ConfigError::Invalid(
                        "late_acceptance_size must be at least 1".to_string(),
                    ));
                }
                Some(AcceptorConfig::TabuSearch(tabu)) if tabu.entity_tabu_size == Some(0) => {
                    return Err(ConfigError::Invalid(
                        "entity_tabu_size must be at least 1".to_string(),
                    ));
                }
                Some(AcceptorConfig::SimulatedAnnealing(sa)) => {
                    if let Some(rate) = sa.decay_rate {
                        if !(rate > 0.0 && rate <= 1.0) {
                            return Err(ConfigError::Invalid(format!(
                                "decay_rate must be in (0, 1], got {rate}"
                            )));
                        }
                    }
                }
                _ => {}
            }
            if ls.forager.as_ref().and_then(|f| f.accepted_count_limit) == Some(0) {
                return Err(ConfigError::Invalid(
                    "accepted_count_limit must be at least 1".to_string(),
                ));
            }
            if ls.move_selector.as_ref().and_then(|m| m.selected_count_limit) == Some(0) {
                return Err(ConfigError::Invalid(
                    "selected_count_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the unimproved step count limit.
    pub fn with_unimproved_step_count(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            unimproved_step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    pub fn with_termination(mut self, termination: TerminationConfig) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phases.push(phase);
        self
    }

    /// Uses `acceptor` for every local search phase, adding the default
    /// phases first when none are configured.
    pub fn with_acceptor(mut self, acceptor: AcceptorConfig) -> Self {
        if self.phases.is_empty() {
            self.phases = default_phases();
        }
        for phase in &mut self.phases {
            if let PhaseConfig::LocalSearch(ls) = phase {
                ls.acceptor = Some(acceptor.clone());
            }
        }
        self
    }

    /// The seed used by reproducible modes.
    pub fn seed(&self) -> u64 {
        self.random_seed.unwrap_or(0)
    }

    /// Returns the termination time limit, if configured.
    ///
    /// ```
    /// use timetable_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     minutes_spent_limit = 1
    ///     seconds_spent_limit = 30
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_secs(90)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// The termination settings in force, falling back to the default
    /// time budget when nothing is configured.
    pub fn effective_termination(&self) -> TerminationConfig {
        match &self.termination {
            Some(t) if t.has_limit() => t.clone(),
            _ => TerminationConfig {
                seconds_spent_limit: Some(DEFAULT_SECONDS_SPENT_LIMIT),
                ..TerminationConfig::default()
            },
        }
    }

    /// The phases to run, falling back to the default pair.
    ///
    /// Local search needs every lesson assigned, so a list that does not
    /// open with a construction heuristic gets a default one in front.
    pub fn effective_phases(&self) -> Vec<PhaseConfig> {
        match self.phases.first() {
            None => default_phases(),
            Some(PhaseConfig::ConstructionHeuristic(_)) => self.phases.clone(),
            Some(PhaseConfig::LocalSearch(_)) => {
                let mut phases = Vec::with_capacity(self.phases.len() + 1);
                phases.push(PhaseConfig::ConstructionHeuristic(
                    ConstructionHeuristicConfig::default(),
                ));
                phases.extend(self.phases.iter().cloned());
                phases
            }
        }
    }
}

fn default_phases() -> Vec<PhaseConfig> {
    vec![
        PhaseConfig::ConstructionHeuristic(ConstructionHeuristicConfig::default()),
        PhaseConfig::LocalSearch(LocalSearchConfig::default()),
    ]
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Seeds the random source from the operating system.
    NonReproducible,

    /// Seeds the random source from `random_seed`.
    #[default]
    Reproducible,

    /// Reproducible, and cross-checks every step's incremental score
    /// against a full recalculation.
    FullAssert,
}

impl EnvironmentMode {
    pub fn is_reproducible(self) -> bool {
        !matches!(self, EnvironmentMode::NonReproducible)
    }

    pub fn is_asserted(self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Termination configuration. Configured limits combine with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    pub seconds_spent_limit: Option<u64>,

    pub minutes_spent_limit: Option<u64>,

    /// Target best score, e.g. `"0hard/0soft"`.
    pub best_score_limit: Option<String>,

    pub step_count_limit: Option<u64>,

    pub unimproved_step_count_limit: Option<u64>,

    pub unimproved_seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds =
            self.seconds_spent_limit.unwrap_or(0) + self.minutes_spent_limit.unwrap_or(0) * 60;
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }

    pub fn unimproved_time_limit(&self) -> Option<Duration> {
        self.unimproved_seconds_spent_limit.map(Duration::from_secs)
    }

    /// Whether at least one limit is configured.
    pub fn has_limit(&self) -> bool {
        self.time_limit().is_some()
            || self.best_score_limit.is_some()
            || self.step_count_limit.is_some()
            || self.unimproved_step_count_limit.is_some()
            || self.unimproved_seconds_spent_limit.is_some()
    }
}

/// Phase configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseConfig {
    ConstructionHeuristic(ConstructionHeuristicConfig),

    LocalSearch(LocalSearchConfig),
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionHeuristicConfig {
    #[serde(default)]
    pub construction_heuristic_type: ConstructionHeuristicType,
}

/// Construction heuristic types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionHeuristicType {
    /// Lessons in list order.
    #[default]
    FirstFit,

    /// Lessons sharing a teacher or student group with the most other
    /// lessons first.
    FirstFitDecreasing,
}

/// Local search configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    pub acceptor: Option<AcceptorConfig>,

    pub forager: Option<ForagerConfig>,

    pub move_selector: Option<MoveSelectorConfig>,
}

/// Acceptor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Accepts moves that do not make the score worse.
    HillClimbing,

    TabuSearch(TabuSearchConfig),

    SimulatedAnnealing(SimulatedAnnealingConfig),

    LateAcceptance(LateAcceptanceConfig),
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TabuSearchConfig {
    /// Number of recent steps whose moved lessons stay tabu.
    pub entity_tabu_size: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatedAnnealingConfig {
    /// Starting temperature as a score, e.g. `"0hard/2soft"`.
    pub starting_temperature: Option<String>,

    /// Factor applied to the temperature after every step.
    pub decay_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LateAcceptanceConfig {
    pub late_acceptance_size: Option<usize>,
}

/// Forager configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ForagerConfig {
    /// Accepted moves to collect before picking the best of them.
    pub accepted_count_limit: Option<usize>,
}

/// Move selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MoveSelectorConfig {
    /// Moves sampled per step.
    pub selected_count_limit: Option<usize>,
}

#[cfg(test)]
mod tests;
