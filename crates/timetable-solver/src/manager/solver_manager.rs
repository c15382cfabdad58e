//! SolverManager implementation.

use std::fmt::Debug;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use timetable_config::SolverConfig;
use timetable_core::domain::{BasicVariableSolution, PlanningSolution};
use timetable_core::score::ParseableScore;
use timetable_scoring::ScoreDirector;
use tokio::sync::mpsc;
use tracing::error;

use super::SolveHandle;
use crate::builder::SolverBuilder;
use crate::error::{Result, SolverError};
use crate::event::SolverEventListener;

/// Starts solves in the background from one validated configuration.
///
/// Every solve gets freshly built phases, so one manager can run any
/// number of independent solves, also at the same time.
pub struct SolverManager<S: PlanningSolution, D> {
    config: SolverConfig,
    director_factory: fn(S) -> D,
    listeners: Vec<Arc<dyn SolverEventListener<S>>>,
}

impl<S: PlanningSolution, D> Debug for SolverManager<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverManager")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S, D> SolverManager<S, D>
where
    S: BasicVariableSolution,
    S::Score: ParseableScore,
    D: ScoreDirector<S> + 'static,
{
    /// Validates `config` up front so that starting a solve cannot fail on
    /// configuration. `director_factory` wraps each submitted solution in
    /// a score director.
    pub fn new(config: SolverConfig, director_factory: fn(S) -> D) -> Result<Self> {
        SolverBuilder::build::<S>(&config)?;
        Ok(Self {
            config,
            director_factory,
            listeners: Vec::new(),
        })
    }

    /// Registers a listener on every solver this manager starts. Listeners
    /// run on the worker thread.
    pub fn with_listener(mut self, listener: Arc<dyn SolverEventListener<S>>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Starts solving `solution` on a new thread and returns immediately.
    ///
    /// `on_best_solution_changed` receives each new best solution, with its
    /// score set, exactly once per improvement and strictly improving. It
    /// is called from a single delivery thread, never concurrently with
    /// itself. A solve always delivers at least one solution, even when
    /// terminated right away.
    ///
    /// Failures to start the threads are reported by
    /// [`SolveHandle::await_termination`].
    pub fn solve_async<F>(&self, solution: S, on_best_solution_changed: F) -> SolveHandle<S>
    where
        F: FnMut(S) + Send + 'static,
    {
        let terminate_early = Arc::new(AtomicBool::new(false));
        let best = Arc::new(Mutex::new(None));

        let solver = match SolverBuilder::build::<S>(&self.config) {
            Ok(solver) => solver,
            Err(err) => {
                error!(event = "solve_rejected", error = %err);
                return SolveHandle::failed(terminate_early, best, err);
            }
        };
        let (sender, receiver) = mpsc::unbounded_channel::<(S, S::Score)>();
        let mut solver = self
            .listeners
            .iter()
            .fold(solver, |solver, listener| solver.with_listener(Arc::clone(listener)))
            .with_best_solution_sender(sender)
            .with_terminate_early_flag(Arc::clone(&terminate_early));

        let delivery = {
            let best = Arc::clone(&best);
            let mut callback = on_best_solution_changed;
            let mut receiver = receiver;
            thread::Builder::new()
                .name("timetable-delivery".to_string())
                .spawn(move || {
                    while let Some((snapshot, score)) = receiver.blocking_recv() {
                        *best.lock() = Some((snapshot.clone(), score));
                        callback(snapshot);
                    }
                })
        };
        let delivery = match delivery {
            Ok(delivery) => delivery,
            Err(err) => {
                error!(event = "solve_rejected", error = %err);
                return SolveHandle::failed(terminate_early, best, SolverError::Spawn(err));
            }
        };

        let director_factory = self.director_factory;
        let worker = thread::Builder::new()
            .name("timetable-solver".to_string())
            .spawn(move || solver.solve(director_factory(solution)));
        match worker {
            Ok(worker) => SolveHandle::new(terminate_early, best, worker, delivery),
            Err(err) => {
                // The solver, and with it the sender, was dropped with the
                // closure, so the delivery thread ends on its own.
                error!(event = "solve_rejected", error = %err);
                SolveHandle::failed(terminate_early, best, SolverError::Spawn(err))
            }
        }
    }
}
