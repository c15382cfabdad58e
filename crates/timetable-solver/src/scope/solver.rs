//! Solver-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::SolverEventSupport;
use crate::stats::SolverStats;
use crate::termination::Termination;

/// Random source of a solve. Seeded runs are reproducible.
pub type SolverRng = ChaCha8Rng;

/// Top-level scope of one solve.
///
/// Owns the score director (and with it the working solution), the best
/// snapshot, the random source and the bookkeeping terminations read.
pub struct SolverScope<S: PlanningSolution, D: ScoreDirector<S>> {
    score_director: D,
    best_solution: Option<S>,
    best_score: Option<S::Score>,
    rng: SolverRng,
    start_time: Option<Instant>,
    total_step_count: u64,
    last_improvement_step: u64,
    last_improvement_time: Option<Instant>,
    stats: SolverStats,
    terminate_early_flag: Option<Arc<AtomicBool>>,
    best_solution_sender: Option<UnboundedSender<(S, S::Score)>>,
    event_support: SolverEventSupport<S>,
    assert_score: bool,
}

impl<S: PlanningSolution, D: ScoreDirector<S>> SolverScope<S, D> {
    /// Creates a scope seeded with 0.
    pub fn new(score_director: D) -> Self {
        Self::with_rng(score_director, SolverRng::seed_from_u64(0))
    }

    pub fn with_seed(score_director: D, seed: u64) -> Self {
        Self::with_rng(score_director, SolverRng::seed_from_u64(seed))
    }

    pub fn with_rng(score_director: D, rng: SolverRng) -> Self {
        Self {
            score_director,
            best_solution: None,
            best_score: None,
            rng,
            start_time: None,
            total_step_count: 0,
            last_improvement_step: 0,
            last_improvement_time: None,
            stats: SolverStats::default(),
            terminate_early_flag: None,
            best_solution_sender: None,
            event_support: SolverEventSupport::new(),
            assert_score: false,
        }
    }

    /// Every new best snapshot is also sent on this channel.
    pub fn with_best_solution_sender(mut self, sender: UnboundedSender<(S, S::Score)>) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    pub fn with_event_support(mut self, event_support: SolverEventSupport<S>) -> Self {
        self.event_support = event_support;
        self
    }

    /// Cross-checks the incremental score against a full recalculation
    /// after every step.
    pub fn with_score_assertions(mut self, enabled: bool) -> Self {
        self.assert_score = enabled;
        self
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn start_solving(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_improvement_time = Some(now);
        self.total_step_count = 0;
        self.last_improvement_step = 0;
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Time since the best score last improved, or since the start.
    pub fn time_since_last_improvement(&self) -> Duration {
        self.last_improvement_time
            .map(|t| t.elapsed())
            .unwrap_or_default()
    }

    /// Steps taken since the best score last improved.
    pub fn steps_since_last_improvement(&self) -> u64 {
        self.total_step_count - self.last_improvement_step
    }

    pub fn score_director(&self) -> &D {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        &mut self.score_director
    }

    /// Splits the borrow so moves can be sampled while reading the solution.
    pub fn director_and_rng(&mut self) -> (&mut D, &mut SolverRng) {
        (&mut self.score_director, &mut self.rng)
    }

    pub fn working_solution(&self) -> &S {
        self.score_director.working_solution()
    }

    pub fn calculate_score(&mut self) -> S::Score {
        self.score_director.calculate_score()
    }

    pub fn best_solution(&self) -> Option<&S> {
        self.best_solution.as_ref()
    }

    pub fn best_score(&self) -> Option<&S::Score> {
        self.best_score.as_ref()
    }

    /// Replaces the best snapshot if the working solution is strictly
    /// better, or if there is no snapshot yet. Returns true on replacement.
    ///
    /// The snapshot is handed to listeners and to the best-solution
    /// channel before this returns.
    pub fn update_best_solution(&mut self) -> bool {
        let current_score = self.score_director.calculate_score();
        let improved = match &self.best_score {
            None => true,
            Some(best) => current_score > *best,
        };
        if !improved {
            return false;
        }

        let mut snapshot = self.score_director.clone_working_solution();
        snapshot.set_score(Some(current_score));
        debug!(
            event = "new_best",
            score = %current_score,
            step = self.total_step_count,
        );

        self.last_improvement_step = self.total_step_count;
        self.last_improvement_time = Some(Instant::now());
        self.stats.record_best_score_improvement();
        self.event_support
            .fire_best_solution_changed(&snapshot, &current_score);
        if let Some(sender) = &self.best_solution_sender {
            // A dropped receiver only means nobody listens any more.
            let _ = sender.send((snapshot.clone(), current_score));
        }

        self.best_solution = Some(snapshot);
        self.best_score = Some(current_score);
        true
    }

    pub fn rng(&mut self) -> &mut SolverRng {
        &mut self.rng
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.stats.record_step();
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    pub fn event_support(&self) -> &SolverEventSupport<S> {
        &self.event_support
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// True when termination was requested from outside or `termination`
    /// fires.
    pub fn should_terminate<T: Termination<S, D>>(&self, termination: &T) -> bool {
        self.is_terminate_early() || termination.is_terminated(self)
    }

    /// Panics when the maintained score differs from a full
    /// recalculation. No-op unless score assertions are enabled.
    pub fn assert_score(&mut self, context: &str) {
        if !self.assert_score {
            return;
        }
        let working = self.score_director.calculate_score();
        let full = self.score_director.full_score();
        assert!(
            working == full,
            "score corruption after {context}: incremental score {working} != full score {full}"
        );
    }

    /// Consumes the scope, returning the best snapshot (or the working
    /// solution if none was taken) with its score, and the statistics.
    pub fn into_result(mut self) -> (S, S::Score, SolverStats) {
        self.stats.finish();
        match (self.best_solution, self.best_score) {
            (Some(solution), Some(score)) => (solution, score, self.stats),
            _ => {
                let score = self.score_director.calculate_score();
                let solution = self.score_director.clone_working_solution();
                (solution, score, self.stats)
            }
        }
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> std::fmt::Debug for SolverScope<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverScope")
            .field("best_score", &self.best_score)
            .field("total_step_count", &self.total_step_count)
            .field("last_improvement_step", &self.last_improvement_step)
            .field("elapsed", &self.elapsed())
            .finish()
    }
}
