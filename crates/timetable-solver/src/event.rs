//! Event hooks for monitoring solver progress.
//!
//! Listeners are called synchronously on the solver thread, in
//! registration order. They must be cheap: a slow listener slows the
//! search down.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use timetable_core::{HardSoftScore, Timetable};
//! use timetable_solver::event::{SolverEventListener, SolverEventSupport};
//!
//! #[derive(Debug)]
//! struct PrintScore;
//!
//! impl SolverEventListener<Timetable> for PrintScore {
//!     fn on_best_solution_changed(&self, _solution: &Timetable, score: &HardSoftScore) {
//!         println!("new best: {score}");
//!     }
//! }
//!
//! let mut support = SolverEventSupport::<Timetable>::new();
//! support.add_solver_listener(Arc::new(PrintScore));
//! assert_eq!(support.solver_listener_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use timetable_core::domain::PlanningSolution;
use tracing::{debug, info};

/// Listener for solver-level events.
pub trait SolverEventListener<S: PlanningSolution>: Send + Sync + Debug {
    /// Called each time the best solution is replaced by a strictly better one.
    fn on_best_solution_changed(&self, solution: &S, score: &S::Score);

    fn on_solving_started(&self, _solution: &S) {}

    fn on_solving_ended(&self, _solution: &S, _is_terminated_early: bool) {}
}

/// Listener for phase transitions.
pub trait PhaseLifecycleListener<S: PlanningSolution>: Send + Sync + Debug {
    fn on_phase_started(&self, phase_index: usize, phase_type: &str);

    fn on_phase_ended(&self, phase_index: usize, phase_type: &str);
}

/// Central event broadcaster.
pub struct SolverEventSupport<S: PlanningSolution> {
    solver_listeners: Vec<Arc<dyn SolverEventListener<S>>>,
    phase_listeners: Vec<Arc<dyn PhaseLifecycleListener<S>>>,
}

impl<S: PlanningSolution> SolverEventSupport<S> {
    pub fn new() -> Self {
        Self {
            solver_listeners: Vec::new(),
            phase_listeners: Vec::new(),
        }
    }

    pub fn add_solver_listener(&mut self, listener: Arc<dyn SolverEventListener<S>>) {
        self.solver_listeners.push(listener);
    }

    pub fn add_phase_listener(&mut self, listener: Arc<dyn PhaseLifecycleListener<S>>) {
        self.phase_listeners.push(listener);
    }

    pub fn fire_best_solution_changed(&self, solution: &S, score: &S::Score) {
        for listener in &self.solver_listeners {
            listener.on_best_solution_changed(solution, score);
        }
    }

    pub fn fire_solving_started(&self, solution: &S) {
        for listener in &self.solver_listeners {
            listener.on_solving_started(solution);
        }
    }

    pub fn fire_solving_ended(&self, solution: &S, is_terminated_early: bool) {
        for listener in &self.solver_listeners {
            listener.on_solving_ended(solution, is_terminated_early);
        }
    }

    pub fn fire_phase_started(&self, phase_index: usize, phase_type: &str) {
        for listener in &self.phase_listeners {
            listener.on_phase_started(phase_index, phase_type);
        }
    }

    pub fn fire_phase_ended(&self, phase_index: usize, phase_type: &str) {
        for listener in &self.phase_listeners {
            listener.on_phase_ended(phase_index, phase_type);
        }
    }

    pub fn solver_listener_count(&self) -> usize {
        self.solver_listeners.len()
    }

    pub fn phase_listener_count(&self) -> usize {
        self.phase_listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.solver_listeners.is_empty() || !self.phase_listeners.is_empty()
    }
}

impl<S: PlanningSolution> Default for SolverEventSupport<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlanningSolution> Clone for SolverEventSupport<S> {
    fn clone(&self) -> Self {
        Self {
            solver_listeners: self.solver_listeners.clone(),
            phase_listeners: self.phase_listeners.clone(),
        }
    }
}

impl<S: PlanningSolution> Debug for SolverEventSupport<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverEventSupport")
            .field("solver_listeners", &self.solver_listeners.len())
            .field("phase_listeners", &self.phase_listeners.len())
            .finish()
    }
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener;

impl<S: PlanningSolution> SolverEventListener<S> for LoggingEventListener {
    fn on_best_solution_changed(&self, _solution: &S, score: &S::Score) {
        info!(event = "best_solution_changed", score = %score);
    }

    fn on_solving_started(&self, _solution: &S) {
        info!(event = "solving_started");
    }

    fn on_solving_ended(&self, _solution: &S, is_terminated_early: bool) {
        info!(event = "solving_ended", terminated_early = is_terminated_early);
    }
}

impl<S: PlanningSolution> PhaseLifecycleListener<S> for LoggingEventListener {
    fn on_phase_started(&self, phase_index: usize, phase_type: &str) {
        debug!(event = "phase_started", phase_index, phase_type);
    }

    fn on_phase_ended(&self, phase_index: usize, phase_type: &str) {
        debug!(event = "phase_ended", phase_index, phase_type);
    }
}

/// Counts event occurrences. Useful in tests.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    best_solution_count: AtomicUsize,
    solving_started_count: AtomicUsize,
    solving_ended_count: AtomicUsize,
    phase_started_count: AtomicUsize,
    phase_ended_count: AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_solution_count(&self) -> usize {
        self.best_solution_count.load(Ordering::SeqCst)
    }

    pub fn solving_started_count(&self) -> usize {
        self.solving_started_count.load(Ordering::SeqCst)
    }

    pub fn solving_ended_count(&self) -> usize {
        self.solving_ended_count.load(Ordering::SeqCst)
    }

    pub fn phase_started_count(&self) -> usize {
        self.phase_started_count.load(Ordering::SeqCst)
    }

    pub fn phase_ended_count(&self) -> usize {
        self.phase_ended_count.load(Ordering::SeqCst)
    }
}

impl<S: PlanningSolution> SolverEventListener<S> for CountingEventListener {
    fn on_best_solution_changed(&self, _solution: &S, _score: &S::Score) {
        self.best_solution_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_started(&self, _solution: &S) {
        self.solving_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _solution: &S, _is_terminated_early: bool) {
        self.solving_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl<S: PlanningSolution> PhaseLifecycleListener<S> for CountingEventListener {
    fn on_phase_started(&self, _phase_index: usize, _phase_type: &str) {
        self.phase_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_phase_ended(&self, _phase_index: usize, _phase_type: &str) {
        self.phase_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}
