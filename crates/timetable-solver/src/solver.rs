//! Solver implementation.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use timetable_core::domain::{BasicVariableSolution, PlanningSolution};
use timetable_scoring::ScoreDirector;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::event::{SolverEventListener, SolverEventSupport};
use crate::phase::Phase;
use crate::scope::{SolverRng, SolverScope};
use crate::stats::SolverStats;
use crate::termination::{NoTermination, Termination};

/// Outcome of a solve.
#[derive(Debug, Clone)]
pub struct SolveResult<S: PlanningSolution> {
    /// The best solution found, with its score set.
    pub solution: S,
    pub score: S::Score,
    pub stats: SolverStats,
    /// True when solving stopped because termination was requested from
    /// outside rather than by a configured limit.
    pub terminated_early: bool,
}

/// Runs phases in order on one working solution.
///
/// Termination is checked before every phase and, inside the phases,
/// before every step. A solve always publishes at least one best solution,
/// even when it is terminated before the first phase.
///
/// # Type Parameters
/// * `P` - The phase type
/// * `T` - The termination condition
/// * `S` - The solution type
///
/// # Example
///
/// ```
/// use timetable_core::Timetable;
/// use timetable_solver::phase::construction::{
///     BestFitForager, ConstructionHeuristicPhase, QueuedEntityPlacer,
/// };
/// use timetable_solver::solver::Solver;
/// use timetable_scoring::{timetable_constraints, TimetableScoreDirector};
/// use timetable_test::fixtures::small_unassigned;
///
/// let phase: ConstructionHeuristicPhase<Timetable> =
///     ConstructionHeuristicPhase::new(QueuedEntityPlacer::default(), BestFitForager::new());
/// let mut solver = Solver::<_, _, Timetable>::new(vec![phase]).with_seed(Some(7));
///
/// let director = TimetableScoreDirector::new(small_unassigned(), timetable_constraints());
/// let result = solver.solve(director);
/// assert_eq!(result.solution.assigned_count(), 6);
/// ```
pub struct Solver<P, T, S: PlanningSolution> {
    phases: Vec<P>,
    termination: T,
    seed: Option<u64>,
    assert_score: bool,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
    event_support: SolverEventSupport<S>,
    best_solution_sender: Option<UnboundedSender<(S, S::Score)>>,
    _phantom: PhantomData<fn() -> S>,
}

impl<P: Debug, T: Debug, S: PlanningSolution> Debug for Solver<P, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("phases", &self.phases)
            .field("termination", &self.termination)
            .field("seed", &self.seed)
            .field("assert_score", &self.assert_score)
            .finish()
    }
}

impl<P, S: PlanningSolution> Solver<P, NoTermination, S> {
    /// Creates a solver with the given phases, seed 0 and no termination.
    pub fn new(phases: Vec<P>) -> Self {
        Solver {
            phases,
            termination: NoTermination,
            seed: Some(0),
            assert_score: false,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
            event_support: SolverEventSupport::new(),
            best_solution_sender: None,
            _phantom: PhantomData,
        }
    }
}

impl<P, T, S: PlanningSolution> Solver<P, T, S> {
    /// Replaces the termination condition.
    pub fn with_termination<T2>(self, termination: T2) -> Solver<P, T2, S> {
        Solver {
            phases: self.phases,
            termination,
            seed: self.seed,
            assert_score: self.assert_score,
            terminate_early_flag: self.terminate_early_flag,
            solving: self.solving,
            event_support: self.event_support,
            best_solution_sender: self.best_solution_sender,
            _phantom: PhantomData,
        }
    }

    /// Seeds the random source. `None` seeds it from the operating system,
    /// which makes runs non-reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Cross-checks the incremental score after every step.
    pub fn with_score_assertions(mut self, enabled: bool) -> Self {
        self.assert_score = enabled;
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn SolverEventListener<S>>) -> Self {
        self.event_support.add_solver_listener(listener);
        self
    }

    pub fn with_event_support(mut self, event_support: SolverEventSupport<S>) -> Self {
        self.event_support = event_support;
        self
    }

    /// Every new best solution is also sent on this channel, in order.
    pub fn with_best_solution_sender(mut self, sender: UnboundedSender<(S, S::Score)>) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    /// Shares the flag that requests early termination.
    ///
    /// The flag is honored even if it is raised before solving starts.
    pub fn with_terminate_early_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = flag;
        self
    }

    /// Requests early termination. Safe to call from another thread through
    /// [`terminate_early_flag`](Self::terminate_early_flag).
    pub fn terminate_early(&self) {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
    }

    pub fn terminate_early_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.terminate_early_flag)
    }

    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    pub fn phases(&self) -> &[P] {
        &self.phases
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_score_asserted(&self) -> bool {
        self.assert_score
    }
}

impl<P, T, S> Solver<P, T, S>
where
    S: BasicVariableSolution,
{
    /// Solves the working solution held by `score_director`.
    ///
    /// Never fails: an infeasible timetable is reported through the score,
    /// and an early termination returns the best solution found so far.
    pub fn solve<D>(&mut self, score_director: D) -> SolveResult<S>
    where
        D: ScoreDirector<S>,
        P: Phase<S, D>,
        T: Termination<S, D>,
    {
        self.solving.store(true, Ordering::SeqCst);

        let solution = score_director.working_solution();
        let entity_count = solution.entity_count();
        let value_count: usize = S::variables()
            .iter()
            .map(|variable| variable.value_count(solution))
            .sum();
        info!(event = "solve_start", entity_count, value_count);

        let rng = match self.seed {
            Some(seed) => SolverRng::seed_from_u64(seed),
            None => SolverRng::from_os_rng(),
        };
        let mut solver_scope = SolverScope::with_rng(score_director, rng)
            .with_event_support(self.event_support.clone())
            .with_score_assertions(self.assert_score);
        if let Some(sender) = &self.best_solution_sender {
            solver_scope = solver_scope.with_best_solution_sender(sender.clone());
        }
        solver_scope.set_terminate_early_flag(Arc::clone(&self.terminate_early_flag));
        solver_scope.start_solving();
        self.event_support
            .fire_solving_started(solver_scope.working_solution());

        for (phase_index, phase) in self.phases.iter_mut().enumerate() {
            if solver_scope.should_terminate(&self.termination) {
                break;
            }
            let phase_type = Phase::<S, D>::phase_type_name(phase);
            debug!(
                event = "phase_start",
                phase = phase_type,
                phase_index,
                score = %solver_scope.calculate_score(),
            );
            self.event_support.fire_phase_started(phase_index, phase_type);

            let phase_start = Instant::now();
            let steps_before = solver_scope.total_step_count();
            phase.solve(phase_index, &mut solver_scope, &self.termination);

            let best_score = match solver_scope.best_score() {
                Some(score) => *score,
                None => solver_scope.calculate_score(),
            };
            debug!(
                event = "phase_end",
                phase = phase_type,
                phase_index,
                best_score = %best_score,
                steps = solver_scope.total_step_count() - steps_before,
                duration_ms = phase_start.elapsed().as_millis() as u64,
                moves_per_sec = solver_scope.stats().moves_per_second() as u64,
            );
            self.event_support.fire_phase_ended(phase_index, phase_type);
        }

        // Publish the untouched input when nothing ran.
        if solver_scope.best_score().is_none() {
            solver_scope.update_best_solution();
        }

        let terminated_early = solver_scope.is_terminate_early();
        let (solution, score, stats) = solver_scope.into_result();
        self.event_support
            .fire_solving_ended(&solution, terminated_early);
        info!(
            event = "solve_end",
            score = %score,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        self.solving.store(false, Ordering::SeqCst);
        SolveResult {
            solution,
            score,
            stats,
            terminated_early,
        }
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
