use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use timetable_core::{HardSoftScore, PlanningSolution, Score, Timetable};
use timetable_scoring::ScoreDirector;
use timetable_test::fixtures::{small_unassigned, two_lessons_same_teacher};

use super::*;
use crate::event::{CountingEventListener, SolverEventSupport};
use crate::termination::{NoTermination, StepCountTermination};
use crate::test_utils::{director, scope};

fn resolve_conflict(scope: &mut SolverScope<Timetable, timetable_scoring::TimetableScoreDirector>) {
    scope
        .score_director_mut()
        .do_change(1, |t| t.lessons_mut()[1].set_timeslot(Some(1)));
}

#[test]
fn test_first_update_always_takes_snapshot() {
    let mut scope = scope(two_lessons_same_teacher());
    assert!(scope.best_solution().is_none());

    assert!(scope.update_best_solution());
    assert_eq!(scope.best_score(), Some(&HardSoftScore::of(-1, -1)));

    let best = scope.best_solution().unwrap();
    assert_eq!(best.score(), Some(HardSoftScore::of(-1, -1)));
    assert_eq!(scope.stats().best_score_improvements, 1);
}

#[test]
fn test_update_requires_strict_improvement() {
    let mut scope = scope(two_lessons_same_teacher());
    scope.update_best_solution();

    // Same score again is not an improvement.
    assert!(!scope.update_best_solution());

    resolve_conflict(&mut scope);
    assert!(scope.update_best_solution());
    assert!(scope.best_score().unwrap().is_feasible());

    // Moving back makes the working solution worse; the snapshot stays.
    scope
        .score_director_mut()
        .do_change(1, |t| t.lessons_mut()[1].set_timeslot(Some(0)));
    assert!(!scope.update_best_solution());
    assert_eq!(scope.best_solution().unwrap().lessons()[1].timeslot(), Some(1));
}

#[test]
fn test_snapshot_is_independent_of_working_solution() {
    let mut scope = scope(two_lessons_same_teacher());
    scope.update_best_solution();

    resolve_conflict(&mut scope);
    assert_eq!(scope.best_solution().unwrap().lessons()[1].timeslot(), Some(0));
    assert_eq!(scope.working_solution().lessons()[1].timeslot(), Some(1));
}

#[test]
fn test_snapshots_go_to_channel_and_listeners() {
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let counter = Arc::new(CountingEventListener::new());
    let mut events = SolverEventSupport::new();
    events.add_solver_listener(counter.clone());

    let mut scope = SolverScope::with_seed(director(two_lessons_same_teacher()), 1)
        .with_best_solution_sender(sender)
        .with_event_support(events);
    scope.start_solving();

    scope.update_best_solution();
    resolve_conflict(&mut scope);
    scope.update_best_solution();
    scope.update_best_solution();

    let (first, first_score) = receiver.try_recv().unwrap();
    let (second, second_score) = receiver.try_recv().unwrap();
    assert!(receiver.try_recv().is_err());
    assert!(second_score > first_score);
    assert_eq!(first.score(), Some(first_score));
    assert_eq!(second.score(), Some(second_score));
    assert_eq!(counter.best_solution_count(), 2);
}

#[test]
fn test_closed_channel_does_not_stop_updates() {
    let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
    drop(receiver);
    let mut scope = SolverScope::new(director(two_lessons_same_teacher()))
        .with_best_solution_sender(sender);

    assert!(scope.update_best_solution());
    assert!(scope.best_solution().is_some());
}

#[test]
fn test_improvement_bookkeeping() {
    let mut scope = scope(two_lessons_same_teacher());
    scope.update_best_solution();
    scope.increment_step_count();
    scope.increment_step_count();
    assert_eq!(scope.steps_since_last_improvement(), 2);

    resolve_conflict(&mut scope);
    scope.update_best_solution();
    assert_eq!(scope.steps_since_last_improvement(), 0);
    assert_eq!(scope.total_step_count(), 2);
    assert_eq!(scope.stats().step_count, 2);
}

#[test]
fn test_terminate_early_flag() {
    let mut scope = scope(small_unassigned());
    assert!(!scope.is_terminate_early());
    assert!(!scope.should_terminate(&NoTermination));

    let flag = Arc::new(AtomicBool::new(false));
    scope.set_terminate_early_flag(flag.clone());
    assert!(!scope.should_terminate(&NoTermination));

    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    assert!(scope.is_terminate_early());
    assert!(scope.should_terminate(&NoTermination));
}

#[test]
fn test_phase_and_step_counts() {
    let mut scope = scope(small_unassigned());
    {
        let mut phase = PhaseScope::new(&mut scope, 0);
        assert_eq!(phase.phase_index(), 0);
        assert!(phase.starting_score().is_none());
        {
            let mut step = StepScope::new(&mut phase);
            assert_eq!(step.step_index(), 0);
            step.set_step_score(HardSoftScore::ZERO);
            step.complete();
        }
        let step = StepScope::new(&mut phase);
        assert_eq!(step.step_index(), 1);
    }
    assert_eq!(scope.total_step_count(), 1);
    assert!(scope.should_terminate(&StepCountTermination::new(1)));

    scope.update_best_solution();
    let phase = PhaseScope::new(&mut scope, 1);
    assert_eq!(phase.starting_score(), Some(&HardSoftScore::ZERO));
    assert_eq!(phase.step_count(), 0);
}

#[test]
fn test_assert_score_passes_on_consistent_director() {
    let mut scope = scope(two_lessons_same_teacher()).with_score_assertions(true);
    resolve_conflict(&mut scope);
    scope.assert_score("test");
    assert_eq!(
        scope.calculate_score(),
        scope.score_director().full_score()
    );
}

#[test]
fn test_into_result_without_snapshot_uses_working_solution() {
    let scope = scope(two_lessons_same_teacher());
    let (solution, score, _) = scope.into_result();
    assert_eq!(score, HardSoftScore::of(-1, -1));
    assert_eq!(solution.lessons().len(), 2);
}

#[test]
fn test_into_result_returns_best_snapshot() {
    let mut scope = scope(two_lessons_same_teacher());
    resolve_conflict(&mut scope);
    scope.update_best_solution();
    let best = *scope.best_score().unwrap();

    scope
        .score_director_mut()
        .do_change(1, |t| t.lessons_mut()[1].set_timeslot(Some(0)));

    let (solution, score, stats) = scope.into_result();
    assert_eq!(score, best);
    assert_eq!(solution.lessons()[1].timeslot(), Some(1));
    assert_eq!(stats.best_score_improvements, 1);
}
