//! Construction heuristic phase implementation.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;
use timetable_scoring::ScoreDirector;
use tracing::trace;

use super::{BestFitForager, ConstructionForager, EntityPlacer, QueuedEntityPlacer};
use crate::heuristic::r#move::{ChangeMove, CompositeMove, Move};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope, StepScope};
use crate::termination::Termination;

/// Construction heuristic phase that builds an initial solution.
///
/// Each placement is one step. Termination is checked before every step,
/// so a phase cut short leaves the remaining entities unassigned. The best
/// solution is updated once, when the phase ends.
pub struct ConstructionHeuristicPhase<
    S,
    M = CompositeMove<S, ChangeMove<S>>,
    P = QueuedEntityPlacer<S>,
    Fo = BestFitForager<S>,
> {
    placer: P,
    forager: Fo,
    _phantom: PhantomData<fn() -> (S, M)>,
}

impl<S, M, P, Fo> ConstructionHeuristicPhase<S, M, P, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    P: EntityPlacer<S, M>,
    Fo: ConstructionForager<S, M>,
{
    pub fn new(placer: P, forager: Fo) -> Self {
        Self {
            placer,
            forager,
            _phantom: PhantomData,
        }
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }
}

impl<S, M, P: Debug, Fo: Debug> Debug for ConstructionHeuristicPhase<S, M, P, Fo> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructionHeuristicPhase")
            .field("placer", &self.placer)
            .field("forager", &self.forager)
            .finish()
    }
}

impl<S, D, M, P, Fo> Phase<S, D> for ConstructionHeuristicPhase<S, M, P, Fo>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    M: Move<S>,
    P: EntityPlacer<S, M>,
    Fo: ConstructionForager<S, M>,
{
    fn solve<T: Termination<S, D>>(
        &mut self,
        phase_index: usize,
        solver_scope: &mut SolverScope<S, D>,
        termination: &T,
    ) {
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index);
        let placements = self.placer.get_placements(phase_scope.score_director());

        for mut placement in placements {
            if phase_scope.solver_scope().should_terminate(termination) {
                break;
            }

            let mut step_scope = StepScope::new(&mut phase_scope);
            let selected = self
                .forager
                .pick_move_index(&placement, step_scope.score_director_mut());
            step_scope
                .phase_scope_mut()
                .solver_scope_mut()
                .stats_mut()
                .record_moves_evaluated(placement.len() as u64);

            if let Some(index) = selected {
                let entity_index = placement.entity_index();
                let m = placement.take_move(index);
                m.do_move(step_scope.score_director_mut());
                let step_score = step_scope.calculate_score();
                step_scope.set_step_score(step_score);
                trace!(event = "entity_placed", entity = entity_index, score = %step_score);
            }

            step_scope.complete();
        }

        phase_scope.update_best_solution();
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }
}
