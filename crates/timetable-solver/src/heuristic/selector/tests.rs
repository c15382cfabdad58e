use rand::SeedableRng;
use timetable_core::{BasicVariableSolution, Timetable};
use timetable_test::fixtures::school_week;
use timetable_test::TimetableBuilder;

use super::*;
use crate::heuristic::r#move::EitherMove;
use crate::test_utils::director;

fn sample(
    selector: &mut RandomMoveSelector<Timetable>,
    timetable: Timetable,
    seed: u64,
) -> Vec<EitherMove<Timetable>> {
    let director = director(timetable);
    let mut rng = SolverRng::seed_from_u64(seed);
    let mut arena = MoveArena::new();
    selector.select_moves(&director, &mut rng, &mut arena);
    arena.iter().copied().collect()
}

#[test]
fn test_samples_the_requested_count_in_range() {
    let timetable = school_week();
    let entity_count = timetable.entity_count();
    let mut selector = RandomMoveSelector::new(200);
    let moves = sample(&mut selector, timetable, 1);

    assert_eq!(moves.len(), 200);
    let mut saw_change = false;
    let mut saw_swap = false;
    for m in &moves {
        match m {
            EitherMove::Change(change) => {
                saw_change = true;
                assert!(change.entity_index() < entity_count);
                let limit = if change.variable().name == "timeslot" { 10 } else { 3 };
                assert!(change.to_value().is_some_and(|v| v < limit));
            }
            EitherMove::Swap(swap) => {
                saw_swap = true;
                assert_ne!(swap.left_entity_index(), swap.right_entity_index());
                assert!(swap.right_entity_index() < entity_count);
            }
        }
    }
    assert!(saw_change && saw_swap);
}

#[test]
fn test_same_seed_same_moves() {
    let mut selector = RandomMoveSelector::new(32);
    let first = format!("{:?}", sample(&mut selector, school_week(), 9));
    let second = format!("{:?}", sample(&mut selector, school_week(), 9));
    let other = format!("{:?}", sample(&mut selector, school_week(), 10));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_without_swaps() {
    let mut selector = RandomMoveSelector::new(50).without_swaps();
    let moves = sample(&mut selector, school_week(), 2);
    assert!(moves.iter().all(|m| matches!(m, EitherMove::Change(_))));
}

#[test]
fn test_single_entity_never_swaps() {
    let timetable = TimetableBuilder::new()
        .timeslot(chrono::Weekday::Mon, (8, 30), (9, 30))
        .room("Room A")
        .lesson("Math", "A. Turing", "9th grade")
        .build();
    let mut selector = RandomMoveSelector::new(20);
    let moves = sample(&mut selector, timetable, 3);

    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| matches!(m, EitherMove::Change(_))));
}

#[test]
fn test_empty_solution_yields_nothing() {
    let timetable = TimetableBuilder::new()
        .timeslot(chrono::Weekday::Mon, (8, 30), (9, 30))
        .room("Room A")
        .build();
    let mut selector = RandomMoveSelector::new(20);
    assert!(sample(&mut selector, timetable, 3).is_empty());
}
