//! Local search phase implementation.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;
use tracing::trace;

use crate::heuristic::r#move::{Move, MoveArena};
use crate::heuristic::selector::MoveSelector;
use crate::phase::localsearch::{Acceptor, LocalSearchForager};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope, StepScope};
use crate::termination::Termination;

/// Local search phase that improves an existing solution.
///
/// Every step:
/// 1. the move selector fills the arena with candidate moves
/// 2. each doable move is applied, scored and undone
/// 3. the acceptor filters the scored moves and the forager collects them
/// 4. the forager's pick is taken out of the arena and applied for real
///
/// A step in which nothing was accepted leaves the solution unchanged and
/// still counts, so step based terminations keep progressing. The phase
/// only ends on its own when a step samples no doable move at all.
pub struct LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    move_selector: MS,
    acceptor: A,
    forager: Fo,
    arena: MoveArena<M>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, MS, A, Fo> LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    pub fn new(move_selector: MS, acceptor: A, forager: Fo) -> Self {
        Self {
            move_selector,
            acceptor,
            forager,
            arena: MoveArena::new(),
            _phantom: PhantomData,
        }
    }

    pub fn move_selector(&self) -> &MS {
        &self.move_selector
    }

    pub fn acceptor(&self) -> &A {
        &self.acceptor
    }

    pub fn forager(&self) -> &Fo {
        &self.forager
    }
}

impl<S, M, MS, A, Fo> Debug for LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .field("arena", &self.arena)
            .finish()
    }
}

impl<S, D, M, MS, A, Fo> Phase<S, D> for LocalSearchPhase<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S>,
{
    fn solve<T: Termination<S, D>>(
        &mut self,
        phase_index: usize,
        solver_scope: &mut SolverScope<S, D>,
        termination: &T,
    ) {
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index);
        let mut last_step_score = phase_scope.calculate_score();
        self.acceptor.phase_started(&last_step_score);

        loop {
            if phase_scope.solver_scope().should_terminate(termination) {
                break;
            }

            let mut step_scope = StepScope::new(&mut phase_scope);
            self.forager.step_started();
            self.acceptor.step_started();

            self.arena.reset();
            {
                let (director, rng) = step_scope.director_and_rng();
                self.move_selector.select_moves(&*director, rng, &mut self.arena);
            }

            let mut doable_count = 0usize;
            for index in 0..self.arena.len() {
                let Some(m) = self.arena.get(index) else {
                    break;
                };
                if !m.is_doable(step_scope.score_director()) {
                    continue;
                }
                doable_count += 1;

                let move_score = {
                    let director = step_scope.score_director_mut();
                    let undo = m.do_move(director);
                    let score = director.calculate_score();
                    undo.do_move(director);
                    score
                };

                let (_, rng) = step_scope.director_and_rng();
                let accepted =
                    self.acceptor
                        .is_accepted(&last_step_score, &move_score, m.entity_indices(), rng);
                step_scope
                    .phase_scope_mut()
                    .solver_scope_mut()
                    .stats_mut()
                    .record_move(accepted);
                trace!(
                    event = "move_evaluated",
                    step = step_scope.step_index(),
                    candidate = ?m,
                    score = %move_score,
                    accepted,
                );

                if accepted {
                    self.forager.add_move_index(index, move_score);
                    if self.forager.is_quit_early() {
                        break;
                    }
                }
            }

            if doable_count == 0 {
                break;
            }

            if let Some((index, score)) = self.forager.pick_move_index() {
                let selected = self.arena.take(index);
                selected.do_move(step_scope.score_director_mut());
                step_scope.set_step_score(score);
                last_step_score = score;
                self.acceptor.step_ended(&score, selected.entity_indices());
                step_scope.phase_scope_mut().update_best_solution();
            }

            step_scope.complete();
        }

        self.acceptor.phase_ended();
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
