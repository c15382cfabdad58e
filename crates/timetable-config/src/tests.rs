//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "full_assert"
        random_seed = 42

        [termination]
        seconds_spent_limit = 30
        unimproved_step_count_limit = 1000

        [[phases]]
        type = "construction_heuristic"
        construction_heuristic_type = "first_fit_decreasing"

        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "late_acceptance"
        late_acceptance_size = 400
        [phases.forager]
        accepted_count_limit = 4
        [phases.move_selector]
        selected_count_limit = 32
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.seed(), 42);
    let termination = config.termination.clone().unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.unimproved_step_count_limit, Some(1000));
    assert_eq!(config.phases.len(), 2);

    let PhaseConfig::LocalSearch(ls) = &config.phases[1] else {
        panic!("expected local search");
    };
    assert_eq!(
        ls.acceptor,
        Some(AcceptorConfig::LateAcceptance(LateAcceptanceConfig {
            late_acceptance_size: Some(400)
        }))
    );
    assert_eq!(ls.forager.as_ref().unwrap().accepted_count_limit, Some(4));
    assert_eq!(
        ls.move_selector.as_ref().unwrap().selected_count_limit,
        Some(32)
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: non_reproducible
        random_seed: 42
        termination:
          seconds_spent_limit: 30
        phases:
          - type: construction_heuristic
            construction_heuristic_type: first_fit
          - type: local_search
            acceptor:
              type: simulated_annealing
              starting_temperature: 0hard/5soft
              decay_rate: 0.99
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::NonReproducible);
    assert!(!config.environment_mode.is_reproducible());
    assert_eq!(config.random_seed, Some(42));

    let PhaseConfig::LocalSearch(ls) = &config.phases[1] else {
        panic!("expected local search");
    };
    assert_eq!(
        ls.acceptor,
        Some(AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig {
            starting_temperature: Some("0hard/5soft".to_string()),
            decay_rate: Some(0.99),
        }))
    );
}

#[test]
fn test_unit_acceptor_variants() {
    let config = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "hill_climbing"

        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "tabu_search"
        entity_tabu_size = 7
    "#,
    )
    .unwrap();

    let acceptors: Vec<_> = config
        .phases
        .iter()
        .map(|p| match p {
            PhaseConfig::LocalSearch(ls) => ls.acceptor.clone(),
            PhaseConfig::ConstructionHeuristic(_) => None,
        })
        .collect();
    assert_eq!(
        acceptors,
        vec![
            Some(AcceptorConfig::HillClimbing),
            Some(AcceptorConfig::TabuSearch(TabuSearchConfig {
                entity_tabu_size: Some(7)
            })),
        ]
    );
}

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.seed(), 0);
    assert_eq!(
        config.effective_termination().time_limit(),
        Some(Duration::from_secs(DEFAULT_SECONDS_SPENT_LIMIT))
    );
    assert_eq!(
        config.effective_phases(),
        vec![
            PhaseConfig::ConstructionHeuristic(ConstructionHeuristicConfig::default()),
            PhaseConfig::LocalSearch(LocalSearchConfig::default()),
        ]
    );
    assert_eq!(AcceptorConfig::default(), AcceptorConfig::LateAcceptance(LateAcceptanceConfig::default()));
}

#[test]
fn test_construction_is_prepended_to_local_search_only() {
    let config = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "hill_climbing"
    "#,
    )
    .unwrap();
    let phases = config.effective_phases();
    assert_eq!(phases.len(), 2);
    assert_eq!(
        phases[0],
        PhaseConfig::ConstructionHeuristic(ConstructionHeuristicConfig::default())
    );
    assert_eq!(phases[1], config.phases[0]);

    let ordered = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "construction_heuristic"
        construction_heuristic_type = "first_fit_decreasing"
    "#,
    )
    .unwrap();
    assert_eq!(ordered.effective_phases(), ordered.phases);
}

#[test]
fn test_empty_termination_falls_back_to_default_budget() {
    let config = SolverConfig::from_toml_str("[termination]\n").unwrap();
    assert!(!config.termination.as_ref().unwrap().has_limit());
    assert_eq!(
        config.effective_termination().seconds_spent_limit,
        Some(DEFAULT_SECONDS_SPENT_LIMIT)
    );
}

#[test]
fn test_configured_termination_is_kept() {
    let config = SolverConfig::new().with_unimproved_step_count(50);
    let termination = config.effective_termination();
    assert_eq!(termination.unimproved_step_count_limit, Some(50));
    assert_eq!(termination.seconds_spent_limit, None);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_acceptor(AcceptorConfig::HillClimbing);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert!(config.environment_mode.is_asserted());
    assert_eq!(config.phases.len(), 2);
    assert!(matches!(
        &config.phases[1],
        PhaseConfig::LocalSearch(LocalSearchConfig {
            acceptor: Some(AcceptorConfig::HillClimbing),
            ..
        })
    ));
}

#[test]
fn test_invalid_values_rejected() {
    let err = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "local_search"
        [phases.acceptor]
        type = "late_acceptance"
        late_acceptance_size = 0
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = SolverConfig::from_yaml_str(
        r#"
        phases:
          - type: local_search
            acceptor:
              type: simulated_annealing
              decay_rate: 1.5
    "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("decay_rate"));
}

#[test]
fn test_unknown_phase_type_is_a_parse_error() {
    let err = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "exhaustive_search"
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_picks_format_from_extension() {
    let dir = std::env::temp_dir().join(format!("timetable-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml_path = dir.join("solver.yaml");
    std::fs::write(&yaml_path, "random_seed: 9\n").unwrap();
    assert_eq!(SolverConfig::load(&yaml_path).unwrap().seed(), 9);

    let toml_path = dir.join("solver.toml");
    std::fs::write(&toml_path, "random_seed = 8\n").unwrap();
    assert_eq!(SolverConfig::load(&toml_path).unwrap().seed(), 8);

    let missing = SolverConfig::load(dir.join("missing.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));

    std::fs::remove_dir_all(&dir).unwrap();
}
