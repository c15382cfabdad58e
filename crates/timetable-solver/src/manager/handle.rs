//! Handle to a background solve.

use std::any::Any;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use timetable_core::domain::PlanningSolution;

use crate::error::{Result, SolverError};
use crate::solver::SolveResult;

type BestSlot<S> = Arc<Mutex<Option<(S, <S as PlanningSolution>::Score)>>>;

/// Controls one solve started by
/// [`SolverManager::solve_async`](super::SolverManager::solve_async).
///
/// Dropping the handle does not stop the solve; it runs until its
/// termination fires and keeps delivering callbacks.
pub struct SolveHandle<S: PlanningSolution> {
    terminate_early: Arc<AtomicBool>,
    best: BestSlot<S>,
    state: HandleState<S>,
}

enum HandleState<S: PlanningSolution> {
    Running {
        worker: JoinHandle<SolveResult<S>>,
        delivery: JoinHandle<()>,
    },
    Failed(SolverError),
}

impl<S: PlanningSolution> SolveHandle<S> {
    pub(super) fn new(
        terminate_early: Arc<AtomicBool>,
        best: BestSlot<S>,
        worker: JoinHandle<SolveResult<S>>,
        delivery: JoinHandle<()>,
    ) -> Self {
        Self {
            terminate_early,
            best,
            state: HandleState::Running { worker, delivery },
        }
    }

    pub(super) fn failed(terminate_early: Arc<AtomicBool>, best: BestSlot<S>, error: SolverError) -> Self {
        Self {
            terminate_early,
            best,
            state: HandleState::Failed(error),
        }
    }

    /// Asks the solver to stop at the next step boundary. Returns at once;
    /// the solver still publishes its best solution before it ends.
    pub fn terminate_early(&self) {
        self.terminate_early.store(true, Ordering::SeqCst);
    }

    pub fn is_terminate_early_requested(&self) -> bool {
        self.terminate_early.load(Ordering::SeqCst)
    }

    /// True until the worker has finished solving.
    pub fn is_solving(&self) -> bool {
        match &self.state {
            HandleState::Running { worker, .. } => !worker.is_finished(),
            HandleState::Failed(_) => false,
        }
    }

    /// The last delivered best solution.
    ///
    /// Updated right before the callback receives the same solution, and
    /// always as a whole: a reader never sees half of one snapshot.
    pub fn best_solution(&self) -> Option<S> {
        self.best.lock().as_ref().map(|(solution, _)| solution.clone())
    }

    pub fn best_score(&self) -> Option<S::Score> {
        self.best.lock().as_ref().map(|(_, score)| *score)
    }

    /// Blocks until solving has ended and every callback has returned.
    pub fn await_termination(self) -> Result<SolveResult<S>> {
        let (worker, delivery) = match self.state {
            HandleState::Running { worker, delivery } => (worker, delivery),
            HandleState::Failed(error) => return Err(error),
        };
        let result = worker.join().map_err(panic_message);
        // The worker dropped its sender when it ended, so delivery drains
        // the channel and stops.
        let delivered = delivery.join().map_err(panic_message);
        let result = result?;
        delivered?;
        Ok(result)
    }
}

impl<S: PlanningSolution> Debug for SolveHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveHandle")
            .field("is_solving", &self.is_solving())
            .field("terminate_early", &self.is_terminate_early_requested())
            .field("best_score", &self.best_score())
            .finish()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> SolverError {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    };
    SolverError::WorkerPanicked(message)
}
