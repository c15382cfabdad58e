//! Solver statistics.
//!
//! Plain counters updated by the phases and returned with the final
//! result of a solve.

use std::time::{Duration, Instant};

/// Solver-level statistics.
///
/// # Example
///
/// ```
/// use timetable_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    time_spent: Option<Duration>,
    /// Total steps taken across all phases.
    pub step_count: u64,
    /// Total moves evaluated across all phases.
    pub moves_evaluated: u64,
    /// Total moves accepted by the acceptor.
    pub moves_accepted: u64,
    /// Number of times the best solution was replaced.
    pub best_score_improvements: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.time_spent = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.time_spent = Some(self.elapsed());
    }

    /// Time since [`start`](Self::start), or the frozen total after
    /// [`finish`](Self::finish).
    pub fn elapsed(&self) -> Duration {
        if let Some(spent) = self.time_spent {
            return spent;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    /// Counts moves scored outside an acceptor, as construction does.
    pub fn record_moves_evaluated(&mut self, count: u64) {
        self.moves_evaluated += count;
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_best_score_improvement(&mut self) {
        self.best_score_improvements += 1;
    }

    /// Moves evaluated per second of solving.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Accepted over evaluated moves.
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }
}
