use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use timetable_core::{HardSoftScore, PlanningSolution, Score, Timetable};
use timetable_scoring::{ScoreDirector, TimetableScoreDirector};
use timetable_test::fixtures::{school_week, two_lessons_same_teacher};
use timetable_test::{randomize, TimetableBuilder};

use super::*;
use crate::heuristic::{EitherMove, RandomMoveSelector};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::termination::{NoTermination, StepCountTermination};
use crate::test_utils::scope;

type TestPhase<A> = LocalSearchPhase<
    Timetable,
    EitherMove<Timetable>,
    RandomMoveSelector<Timetable>,
    A,
    AcceptedCountForager<Timetable>,
>;

fn phase<A: Acceptor<Timetable>>(acceptor: A, accepted_count_limit: usize) -> TestPhase<A> {
    LocalSearchPhase::new(
        RandomMoveSelector::new(32),
        acceptor,
        AcceptedCountForager::new(accepted_count_limit),
    )
}

fn randomized_week(seed: u64) -> Timetable {
    let mut timetable = school_week();
    randomize(&mut timetable, &mut ChaCha8Rng::seed_from_u64(seed));
    timetable
}

fn run<A: Acceptor<Timetable>>(
    mut phase: TestPhase<A>,
    mut solver_scope: SolverScope<Timetable, TimetableScoreDirector>,
    steps: u64,
) -> SolverScope<Timetable, TimetableScoreDirector> {
    solver_scope.update_best_solution();
    phase.solve(0, &mut solver_scope, &StepCountTermination::new(steps));
    solver_scope
}

#[test]
fn test_hill_climbing_resolves_teacher_conflict() {
    let solver_scope = scope(two_lessons_same_teacher());
    let initial = HardSoftScore::of(-1, -1);

    let solver_scope = run(phase(HillClimbingAcceptor::new(), 1), solver_scope, 50);

    let best = *solver_scope.best_score().unwrap();
    assert!(best > initial);
    assert!(best.is_feasible(), "best {best}");
}

#[test]
fn test_step_count_is_respected() {
    let solver_scope = scope(randomized_week(1));
    let solver_scope = run(phase(HillClimbingAcceptor::new(), 1), solver_scope, 25);
    assert_eq!(solver_scope.total_step_count(), 25);
    assert_eq!(solver_scope.stats().step_count, 25);
}

#[test]
fn test_best_never_worse_than_start_for_each_acceptor() {
    let start = scope(randomized_week(2)).calculate_score();

    let results = [
        run(phase(HillClimbingAcceptor::new(), 1), scope(randomized_week(2)), 100),
        run(phase(LateAcceptanceAcceptor::new(20), 1), scope(randomized_week(2)), 100),
    ];
    for solver_scope in &results {
        assert!(*solver_scope.best_score().unwrap() >= start);
    }
}

#[test]
fn test_worsening_acceptors_keep_best_snapshot() {
    let start = scope(randomized_week(3)).calculate_score();

    let annealed = run(
        phase(SimulatedAnnealingAcceptor::new(2.0, 0.99), 1),
        scope(randomized_week(3)),
        100,
    );
    assert!(*annealed.best_score().unwrap() >= start);

    let tabu = run(
        phase(EntityTabuAcceptor::new(3), 32),
        scope(randomized_week(3)),
        100,
    );
    assert!(*tabu.best_score().unwrap() >= start);
}

#[test]
fn test_best_snapshot_matches_its_score() {
    let solver_scope = run(
        phase(LateAcceptanceAcceptor::new(10), 1),
        scope(randomized_week(4)),
        80,
    );
    let best = solver_scope.best_solution().unwrap().clone();
    let best_score = *solver_scope.best_score().unwrap();
    assert_eq!(best.score(), Some(best_score));

    let mut director = crate::test_utils::director(best);
    assert_eq!(director.calculate_score(), best_score);
}

#[test]
fn test_same_seed_same_result() {
    let first = run(
        phase(LateAcceptanceAcceptor::new(10), 1),
        scope(randomized_week(5)),
        60,
    );
    let second = run(
        phase(LateAcceptanceAcceptor::new(10), 1),
        scope(randomized_week(5)),
        60,
    );

    assert_eq!(first.best_score(), second.best_score());
    let first_lessons = first.best_solution().unwrap().lessons();
    let second_lessons = second.best_solution().unwrap().lessons();
    for (a, b) in first_lessons.iter().zip(second_lessons) {
        assert_eq!((a.timeslot(), a.room()), (b.timeslot(), b.room()));
    }
}

#[test]
fn test_score_assertions_hold_during_search() {
    let solver_scope = scope(randomized_week(6)).with_score_assertions(true);
    let solver_scope = run(phase(EntityTabuAcceptor::new(5), 32), solver_scope, 40);
    assert_eq!(solver_scope.total_step_count(), 40);
}

#[test]
fn test_phase_ends_without_doable_moves() {
    let timetable = TimetableBuilder::new()
        .timeslot(chrono::Weekday::Mon, (8, 30), (9, 30))
        .room("Room A")
        .assigned_lesson("Math", "A. Turing", "9th grade", 0, 0)
        .build();
    let mut solver_scope = scope(timetable);
    solver_scope.update_best_solution();

    let mut phase = phase(HillClimbingAcceptor::new(), 1);
    phase.solve(0, &mut solver_scope, &NoTermination);

    assert_eq!(solver_scope.total_step_count(), 0);
}

#[test]
fn test_phase_type_name() {
    let phase = phase(HillClimbingAcceptor::new(), 1);
    assert_eq!(
        Phase::<Timetable, TimetableScoreDirector>::phase_type_name(&phase),
        "LocalSearch"
    );
}
