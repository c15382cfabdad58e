use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use timetable_core::{HardSoftScore, Timetable};
use timetable_test::fixtures::{school_week, two_lessons_same_teacher};

use super::*;
use crate::test_utils::scope;

#[test]
fn test_step_count_termination() {
    let mut scope = scope(school_week());
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let scope = scope(school_week());
    assert!(TimeTermination::millis(0).is_terminated(&scope));
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
}

#[test]
fn test_unimproved_step_count_resets_on_improvement() {
    let mut scope = scope(two_lessons_same_teacher());
    let term = UnimprovedStepCountTermination::new(2);

    // The first snapshot always counts as an improvement.
    assert!(scope.update_best_solution());
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));

    // Move the second lesson out of the shared timeslot.
    scope
        .score_director_mut()
        .do_change(1, |t| t.lessons_mut()[1].set_timeslot(Some(1)));
    assert!(scope.update_best_solution());
    assert_eq!(scope.steps_since_last_improvement(), 0);
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_unimproved_time_termination() {
    let scope = scope(school_week());
    let term = UnimprovedTimeTermination::millis(10);
    assert!(!UnimprovedTimeTermination::seconds(60).is_terminated(&scope));
    std::thread::sleep(Duration::from_millis(15));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_best_score_termination() {
    let mut scope = scope(two_lessons_same_teacher());
    let reached = BestScoreTermination::new(HardSoftScore::of(-1, -1));
    let feasible_target = BestScoreTermination::new(HardSoftScore::ZERO);

    // Nothing to compare before the first snapshot.
    assert!(!reached.is_terminated(&scope));

    scope.update_best_solution();
    assert!(reached.is_terminated(&scope));
    assert!(!feasible_target.is_terminated(&scope));
}

#[test]
fn test_best_score_feasible_termination() {
    let mut scope = scope(two_lessons_same_teacher());
    let term = BestScoreFeasibleTermination::<Timetable>::new();

    scope.update_best_solution();
    assert!(!term.is_terminated(&scope));

    scope
        .score_director_mut()
        .do_change(1, |t| t.lessons_mut()[1].set_timeslot(Some(1)));
    scope.update_best_solution();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_and_termination() {
    let mut scope = scope(school_week());
    scope.increment_step_count();

    let fired = StepCountTermination::new(1);
    let pending = StepCountTermination::new(5);

    assert!(OrTermination::new((pending, fired)).is_terminated(&scope));
    assert!(!AndTermination::new((pending, fired)).is_terminated(&scope));
    assert!(AndTermination::new((fired, TimeTermination::millis(0))).is_terminated(&scope));
    assert!(!OrTermination::new((pending,)).is_terminated(&scope));
}

#[test]
fn test_optional_members() {
    let scope = scope(school_week());
    let none: Option<TimeTermination> = None;

    assert!(!none.is_terminated(&scope));
    assert!(Some(TimeTermination::millis(0)).is_terminated(&scope));
    assert!(!NoTermination.is_terminated(&scope));
    assert!(OrTermination::new((none, Some(StepCountTermination::new(0)))).is_terminated(&scope));
}

#[test]
fn test_terminate_early_flag() {
    let mut scope = scope(school_week());
    let flag = Arc::new(AtomicBool::new(false));
    scope.set_terminate_early_flag(flag.clone());

    assert!(!scope.should_terminate(&NoTermination));
    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    assert!(scope.should_terminate(&NoTermination));
}
