//! Simulated annealing acceptor.

use rand::Rng;
use timetable_core::domain::PlanningSolution;
use timetable_core::score::Score;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts worsening moves with probability `exp(delta / temperature)`.
///
/// `delta` is the scalar difference between the move score and the last
/// step score (see [`Score::to_scalar`]), so a lost hard point is
/// practically never accepted while small soft losses often are. The
/// temperature decays multiplicatively every step.
///
/// # Example
///
/// ```
/// use timetable_solver::phase::localsearch::SimulatedAnnealingAcceptor;
///
/// let acceptor = SimulatedAnnealingAcceptor::new(2.0, 0.999);
/// assert_eq!(acceptor.current_temperature(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    decay_rate: f64,
}

impl SimulatedAnnealingAcceptor {
    pub fn new(starting_temperature: f64, decay_rate: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            decay_rate,
        }
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    /// Probability of accepting a move that changes the scalar score by
    /// `delta`.
    pub fn acceptance_probability(&self, delta: f64) -> f64 {
        if delta >= 0.0 {
            return 1.0;
        }
        if self.current_temperature <= 0.0 {
            return 0.0;
        }
        (delta / self.current_temperature).exp()
    }
}

impl<S: PlanningSolution> Acceptor<S> for SimulatedAnnealingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &S::Score,
        move_score: &S::Score,
        _entity_indices: &[usize],
        rng: &mut SolverRng,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        let delta = (*move_score - *last_step_score).to_scalar();
        let probability = self.acceptance_probability(delta);
        probability > 0.0 && rng.random::<f64>() < probability
    }

    fn phase_started(&mut self, _initial_score: &S::Score) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_ended(&mut self, _step_score: &S::Score, _entity_indices: &[usize]) {
        self.current_temperature *= self.decay_rate;
    }
}
