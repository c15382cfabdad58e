use std::time::Duration;

use timetable_config::{
    AcceptorConfig, ConstructionHeuristicConfig, ConstructionHeuristicType, EnvironmentMode,
    ForagerConfig, LocalSearchConfig, PhaseConfig, SolverConfig, TabuSearchConfig,
    TerminationConfig,
};
use timetable_core::{HardSoftScore, Timetable};

use super::*;
use crate::phase::construction::EntityOrder;

fn local_search(phase: &ConfiguredPhase<Timetable>) -> &ConfiguredLocalSearchPhase<Timetable> {
    match phase {
        ConfiguredPhase::LocalSearch(ls) => ls,
        other => panic!("expected local search, got {other:?}"),
    }
}

#[test]
fn test_default_config() {
    let solver = SolverBuilder::build::<Timetable>(&SolverConfig::default()).unwrap();

    assert_eq!(solver.phases().len(), 2);
    assert!(matches!(solver.phases()[0], ConfiguredPhase::Construction(_)));
    let ls = local_search(&solver.phases()[1]);
    assert_eq!(ls.acceptor().name(), "LateAcceptance");
    assert_eq!(ls.move_selector().selected_count_limit(), 64);
    assert_eq!(ls.forager().accepted_count_limit(), 1);

    assert_eq!(solver.seed(), Some(0));
    assert!(!solver.is_score_asserted());

    let (time, step, unimproved_steps, unimproved_time, best) = &solver.termination().0;
    assert_eq!(time.as_ref().map(|t| t.limit()), Some(Duration::from_secs(30)));
    assert!(step.is_none());
    assert!(unimproved_steps.is_none());
    assert!(unimproved_time.is_none());
    assert!(best.is_none());
}

#[test]
fn test_local_search_only_gets_construction_first() {
    let config = SolverConfig {
        phases: vec![PhaseConfig::LocalSearch(LocalSearchConfig {
            acceptor: Some(AcceptorConfig::HillClimbing),
            ..LocalSearchConfig::default()
        })],
        ..SolverConfig::default()
    };
    let solver = SolverBuilder::build::<Timetable>(&config).unwrap();

    assert_eq!(solver.phases().len(), 2);
    assert!(matches!(solver.phases()[0], ConfiguredPhase::Construction(_)));
    assert_eq!(local_search(&solver.phases()[1]).acceptor().name(), "HillClimbing");
}

#[test]
fn test_environment_modes() {
    let asserted = SolverBuilder::build::<Timetable>(
        &SolverConfig::new()
            .with_environment_mode(EnvironmentMode::FullAssert)
            .with_random_seed(9),
    )
    .unwrap();
    assert!(asserted.is_score_asserted());
    assert_eq!(asserted.seed(), Some(9));

    let unseeded = SolverBuilder::build::<Timetable>(
        &SolverConfig::new().with_environment_mode(EnvironmentMode::NonReproducible),
    )
    .unwrap();
    assert_eq!(unseeded.seed(), None);
}

#[test]
fn test_termination_limits() {
    let termination = SolverBuilder::termination::<Timetable>(&TerminationConfig {
        step_count_limit: Some(100),
        unimproved_step_count_limit: Some(20),
        best_score_limit: Some("0hard/-5soft".to_string()),
        ..TerminationConfig::default()
    })
    .unwrap();

    let (time, step, unimproved_steps, _, best) = &termination.0;
    assert!(time.is_none());
    assert!(step.is_some());
    assert_eq!(unimproved_steps.as_ref().map(|t| t.limit()), Some(20));
    assert!(best.is_some());
}

#[test]
fn test_bad_best_score_limit() {
    let result = SolverBuilder::termination::<Timetable>(&TerminationConfig {
        best_score_limit: Some("zero".to_string()),
        ..TerminationConfig::default()
    });
    assert!(matches!(
        result,
        Err(SolverError::InvalidBestScoreLimit { ref value, .. }) if value == "zero"
    ));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SolverConfig::new().with_acceptor(AcceptorConfig::TabuSearch(TabuSearchConfig {
        entity_tabu_size: Some(0),
    }));
    assert!(matches!(
        SolverBuilder::build::<Timetable>(&config),
        Err(SolverError::Config(_))
    ));
}

#[test]
fn test_tabu_forager_defaults_to_selected_count() {
    let phase = SolverBuilder::local_search_phase::<Timetable>(&LocalSearchConfig {
        acceptor: Some(AcceptorConfig::TabuSearch(TabuSearchConfig::default())),
        forager: None,
        move_selector: None,
    })
    .unwrap();
    assert_eq!(phase.forager().accepted_count_limit(), 64);

    let phase = SolverBuilder::local_search_phase::<Timetable>(&LocalSearchConfig {
        acceptor: Some(AcceptorConfig::TabuSearch(TabuSearchConfig::default())),
        forager: Some(ForagerConfig {
            accepted_count_limit: Some(4),
        }),
        move_selector: None,
    })
    .unwrap();
    assert_eq!(phase.forager().accepted_count_limit(), 4);
}

#[test]
fn test_construction_order_follows_type() {
    let phase = SolverBuilder::construction_phase::<Timetable>(&ConstructionHeuristicConfig {
        construction_heuristic_type: ConstructionHeuristicType::FirstFitDecreasing,
    });
    assert_eq!(phase.placer().order(), EntityOrder::DifficultyDecreasing);

    let phase = SolverBuilder::phase::<Timetable>(&PhaseConfig::ConstructionHeuristic(
        ConstructionHeuristicConfig::default(),
    ))
    .unwrap();
    match phase {
        ConfiguredPhase::Construction(ch) => assert_eq!(ch.placer().order(), EntityOrder::Declared),
        other => panic!("expected construction, got {other:?}"),
    }
}

#[test]
fn test_best_score_target_is_parsed() {
    let termination = SolverBuilder::termination::<Timetable>(&TerminationConfig {
        best_score_limit: Some("0hard/0soft".to_string()),
        ..TerminationConfig::default()
    })
    .unwrap();
    assert_eq!(
        termination.0 .4.as_ref().map(|t| *t.target()),
        Some(HardSoftScore::ZERO)
    );
}
