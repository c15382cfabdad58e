use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use timetable_config::{EnvironmentMode, TerminationConfig};
use timetable_core::{BasicVariableSolution, HardSoftScore, PlanningSolution, Score};
use timetable_scoring::full_score;

use super::*;
use crate::data::generate_problem;

fn step_limited(steps: u64) -> SolverConfig {
    SolverConfig::new()
        .with_random_seed(17)
        .with_termination(TerminationConfig {
            step_count_limit: Some(steps),
            ..TerminationConfig::default()
        })
}

#[test]
fn test_seed_data_end_to_end() {
    let initial = generate_problem().unwrap();
    let initial_score = full_score(&initial);
    let scores: Arc<Mutex<Vec<HardSoftScore>>> = Arc::default();
    let sink = Arc::clone(&scores);

    let handle = solve_async(initial, step_limited(400), move |best: Timetable| {
        assert!(best.is_initialized());
        sink.lock().extend(best.score());
    })
    .unwrap();
    let result = handle.await_termination().unwrap();

    assert!(result.solution.is_initialized());
    assert!(result.score.hard() >= initial_score.hard());
    assert_eq!(full_score(&result.solution), result.score);

    let scores = scores.lock();
    assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(scores.last(), Some(&result.score));
}

#[test]
fn test_seed_data_is_scheduled_feasibly() {
    let config = step_limited(500).with_environment_mode(EnvironmentMode::FullAssert);
    let result = solve(generate_problem().unwrap(), &config).unwrap();

    assert!(result.score.is_feasible(), "ended at {}", result.score);
    assert_eq!(result.solution.assigned_count(), 20);
}

#[test]
fn test_cancel_returns_promptly() {
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);

    let handle = solve_async(generate_problem().unwrap(), SolverConfig::new(), move |_| {
        *counter.lock() += 1;
    })
    .unwrap();
    handle.terminate_early();

    let started = Instant::now();
    let result = handle.await_termination().unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(result.terminated_early);
    assert_eq!(*calls.lock(), 1);
}

#[test]
fn test_load_config() {
    let missing = std::env::temp_dir().join("timetable-no-such-solver.toml");
    assert_eq!(load_config(&missing).unwrap(), SolverConfig::default());

    let path = std::env::temp_dir().join(format!("timetable-solver-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "random_seed = 9\n\n[termination]\nseconds_spent_limit = 5").unwrap();
    drop(file);

    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.random_seed, Some(9));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SolverConfig::new().with_termination(TerminationConfig {
        best_score_limit: Some("not a score".to_owned()),
        ..TerminationConfig::default()
    });
    assert!(solve_async(generate_problem().unwrap(), config, |_| {}).is_err());
}
