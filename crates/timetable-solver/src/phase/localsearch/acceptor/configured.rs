//! Acceptor selected at runtime from configuration.

use timetable_config::{AcceptorConfig, ConfigError, DEFAULT_DECAY_RATE, DEFAULT_ENTITY_TABU_SIZE, DEFAULT_LATE_ACCEPTANCE_SIZE, DEFAULT_STARTING_TEMPERATURE};
use timetable_core::domain::PlanningSolution;
use timetable_core::score::{ParseableScore, Score};

use super::{
    Acceptor, EntityTabuAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor,
};
use crate::error::{Result, SolverError};
use crate::scope::SolverRng;

/// One of the built-in acceptors, dispatched by `match`.
pub enum ConfiguredAcceptor<S: PlanningSolution> {
    HillClimbing(HillClimbingAcceptor),
    LateAcceptance(LateAcceptanceAcceptor<S>),
    SimulatedAnnealing(SimulatedAnnealingAcceptor),
    EntityTabu(EntityTabuAcceptor<S>),
}

impl<S> ConfiguredAcceptor<S>
where
    S: PlanningSolution,
    S::Score: ParseableScore,
{
    /// Builds the acceptor a config names, filling in defaults.
    pub fn from_config(config: &AcceptorConfig) -> Result<Self> {
        Ok(match config {
            AcceptorConfig::HillClimbing => Self::HillClimbing(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance(la) => Self::LateAcceptance(LateAcceptanceAcceptor::new(
                la.late_acceptance_size
                    .unwrap_or(DEFAULT_LATE_ACCEPTANCE_SIZE),
            )),
            AcceptorConfig::SimulatedAnnealing(sa) => {
                let value = sa
                    .starting_temperature
                    .as_deref()
                    .unwrap_or(DEFAULT_STARTING_TEMPERATURE);
                let temperature = S::Score::parse(value).map_err(|source| {
                    SolverError::InvalidTemperature {
                        value: value.to_string(),
                        source,
                    }
                })?;
                let temperature = temperature.to_scalar();
                if temperature <= 0.0 {
                    return Err(SolverError::Config(ConfigError::Invalid(format!(
                        "starting_temperature must be positive, got {value}"
                    ))));
                }
                Self::SimulatedAnnealing(SimulatedAnnealingAcceptor::new(
                    temperature,
                    sa.decay_rate.unwrap_or(DEFAULT_DECAY_RATE),
                ))
            }
            AcceptorConfig::TabuSearch(tabu) => Self::EntityTabu(EntityTabuAcceptor::new(
                tabu.entity_tabu_size.unwrap_or(DEFAULT_ENTITY_TABU_SIZE),
            )),
        })
    }
}

impl<S: PlanningSolution> std::fmt::Debug for ConfiguredAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HillClimbing(a) => f.debug_tuple("HillClimbing").field(a).finish(),
            Self::LateAcceptance(a) => f.debug_tuple("LateAcceptance").field(a).finish(),
            Self::SimulatedAnnealing(a) => f.debug_tuple("SimulatedAnnealing").field(a).finish(),
            Self::EntityTabu(a) => f.debug_tuple("EntityTabu").field(a).finish(),
        }
    }
}

impl<S: PlanningSolution> ConfiguredAcceptor<S> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HillClimbing(_) => "HillClimbing",
            Self::LateAcceptance(_) => "LateAcceptance",
            Self::SimulatedAnnealing(_) => "SimulatedAnnealing",
            Self::EntityTabu(_) => "EntityTabu",
        }
    }

    /// Tabu search accepts worsening moves, so it needs a forager that
    /// compares the whole sample instead of taking the first accepted move.
    pub fn wants_full_sample(&self) -> bool {
        matches!(self, Self::EntityTabu(_))
    }
}

impl<S: PlanningSolution> Acceptor<S> for ConfiguredAcceptor<S> {
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        entity_indices: &[usize],
        rng: &mut SolverRng,
    ) -> bool {
        match self {
            Self::HillClimbing(a) => {
                Acceptor::<S>::is_accepted(a, last_step_score, move_score, entity_indices, rng)
            }
            Self::LateAcceptance(a) => {
                a.is_accepted(last_step_score, move_score, entity_indices, rng)
            }
            Self::SimulatedAnnealing(a) => {
                Acceptor::<S>::is_accepted(a, last_step_score, move_score, entity_indices, rng)
            }
            Self::EntityTabu(a) => a.is_accepted(last_step_score, move_score, entity_indices, rng),
        }
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        match self {
            Self::HillClimbing(a) => Acceptor::<S>::phase_started(a, initial_score),
            Self::LateAcceptance(a) => a.phase_started(initial_score),
            Self::SimulatedAnnealing(a) => Acceptor::<S>::phase_started(a, initial_score),
            Self::EntityTabu(a) => a.phase_started(initial_score),
        }
    }

    fn phase_ended(&mut self) {
        match self {
            Self::HillClimbing(a) => Acceptor::<S>::phase_ended(a),
            Self::LateAcceptance(a) => a.phase_ended(),
            Self::SimulatedAnnealing(a) => Acceptor::<S>::phase_ended(a),
            Self::EntityTabu(a) => a.phase_ended(),
        }
    }

    fn step_started(&mut self) {
        match self {
            Self::HillClimbing(a) => Acceptor::<S>::step_started(a),
            Self::LateAcceptance(a) => a.step_started(),
            Self::SimulatedAnnealing(a) => Acceptor::<S>::step_started(a),
            Self::EntityTabu(a) => a.step_started(),
        }
    }

    fn step_ended(&mut self, step_score: &S::Score, entity_indices: &[usize]) {
        match self {
            Self::HillClimbing(a) => Acceptor::<S>::step_ended(a, step_score, entity_indices),
            Self::LateAcceptance(a) => a.step_ended(step_score, entity_indices),
            Self::SimulatedAnnealing(a) => {
                Acceptor::<S>::step_ended(a, step_score, entity_indices)
            }
            Self::EntityTabu(a) => a.step_ended(step_score, entity_indices),
        }
    }
}
