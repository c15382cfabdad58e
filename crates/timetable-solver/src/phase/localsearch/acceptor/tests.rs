use rand::SeedableRng;
use timetable_config::{
    AcceptorConfig, LateAcceptanceConfig, SimulatedAnnealingConfig, TabuSearchConfig,
};
use timetable_core::{HardSoftScore, Timetable};

use super::*;
use crate::error::SolverError;

fn score(hard: i64, soft: i64) -> HardSoftScore {
    HardSoftScore::of(hard, soft)
}

fn rng() -> SolverRng {
    SolverRng::seed_from_u64(7)
}

#[test]
fn test_hill_climbing_accepts_equal_and_better() {
    let mut acceptor = HillClimbingAcceptor::new();
    let mut rng = rng();
    let last = score(0, -5);

    assert!(Acceptor::<Timetable>::is_accepted(&mut acceptor, &last, &score(0, -4), &[0], &mut rng));
    assert!(Acceptor::<Timetable>::is_accepted(&mut acceptor, &last, &score(0, -5), &[0], &mut rng));
    assert!(!Acceptor::<Timetable>::is_accepted(&mut acceptor, &last, &score(0, -6), &[0], &mut rng));
    assert!(!Acceptor::<Timetable>::is_accepted(&mut acceptor, &last, &score(-1, 10), &[0], &mut rng));
}

#[test]
fn test_late_acceptance_compares_with_old_step_score() {
    let mut acceptor = LateAcceptanceAcceptor::<Timetable>::new(2);
    let mut rng = rng();
    acceptor.phase_started(&score(0, -10));

    acceptor.step_ended(&score(0, -5), &[0]);
    acceptor.step_ended(&score(0, -3), &[1]);

    // Slot 0 now holds -5soft, from two steps ago.
    let last = score(0, -3);
    assert!(acceptor.is_accepted(&last, &score(0, -4), &[2], &mut rng));
    assert!(acceptor.is_accepted(&last, &score(0, -5), &[2], &mut rng));
    assert!(!acceptor.is_accepted(&last, &score(0, -6), &[2], &mut rng));
}

#[test]
fn test_late_acceptance_starts_from_initial_score() {
    let mut acceptor = LateAcceptanceAcceptor::<Timetable>::new(3);
    let mut rng = rng();
    acceptor.phase_started(&score(0, -10));

    assert!(acceptor.is_accepted(&score(0, -2), &score(0, -9), &[0], &mut rng));
    assert!(!acceptor.is_accepted(&score(0, -2), &score(0, -11), &[0], &mut rng));
}

#[test]
#[should_panic(expected = "late_acceptance_size must be > 0")]
fn test_late_acceptance_rejects_zero_size() {
    let _ = LateAcceptanceAcceptor::<Timetable>::new(0);
}

#[test]
fn test_simulated_annealing_probability() {
    let acceptor = SimulatedAnnealingAcceptor::new(2.0, 0.5);

    assert_eq!(acceptor.acceptance_probability(1.0), 1.0);
    assert!((acceptor.acceptance_probability(-2.0) - (-1.0f64).exp()).abs() < 1e-12);

    let cold = SimulatedAnnealingAcceptor::new(0.0, 0.5);
    assert_eq!(cold.acceptance_probability(-1.0), 0.0);
}

#[test]
fn test_simulated_annealing_never_accepts_hard_loss() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(2.0, 0.999);
    let mut rng = rng();
    Acceptor::<Timetable>::phase_started(&mut acceptor, &score(0, 0));

    for _ in 0..1_000 {
        assert!(!Acceptor::<Timetable>::is_accepted(
            &mut acceptor,
            &score(0, 0),
            &score(-1, 0),
            &[0],
            &mut rng,
        ));
    }
}

#[test]
fn test_simulated_annealing_sometimes_accepts_small_soft_loss() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(2.0, 1.0);
    let mut rng = rng();
    Acceptor::<Timetable>::phase_started(&mut acceptor, &score(0, 0));

    // p = exp(-0.5) ~ 0.61
    let accepted = (0..1_000)
        .filter(|_| {
            Acceptor::<Timetable>::is_accepted(
                &mut acceptor,
                &score(0, 0),
                &score(0, -1),
                &[0],
                &mut rng,
            )
        })
        .count();
    assert!(accepted > 400 && accepted < 800, "accepted {accepted}");
}

#[test]
fn test_simulated_annealing_cools_every_step() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(4.0, 0.5);
    Acceptor::<Timetable>::phase_started(&mut acceptor, &score(0, 0));
    Acceptor::<Timetable>::step_ended(&mut acceptor, &score(0, 0), &[0]);
    Acceptor::<Timetable>::step_ended(&mut acceptor, &score(0, 0), &[0]);
    assert_eq!(acceptor.current_temperature(), 1.0);

    Acceptor::<Timetable>::phase_started(&mut acceptor, &score(0, 0));
    assert_eq!(acceptor.current_temperature(), 4.0);
}

#[test]
fn test_entity_tabu_rejects_recent_entities() {
    let mut acceptor = EntityTabuAcceptor::<Timetable>::new(2);
    let mut rng = rng();
    acceptor.phase_started(&score(0, -10));

    acceptor.step_ended(&score(0, -8), &[3]);
    assert!(acceptor.is_entity_tabu(3));

    // Worsening moves on free entities pass.
    assert!(acceptor.is_accepted(&score(0, -8), &score(0, -20), &[1], &mut rng));
    // Worsening move on a tabu entity, no aspiration.
    assert!(!acceptor.is_accepted(&score(0, -8), &score(0, -9), &[3], &mut rng));
    assert!(!acceptor.is_accepted(&score(0, -8), &score(0, -9), &[1, 3], &mut rng));
}

#[test]
fn test_entity_tabu_accepts_non_worsening_moves_on_tabu_entities() {
    let mut acceptor = EntityTabuAcceptor::<Timetable>::new(2);
    let mut rng = rng();
    acceptor.phase_started(&score(0, -3));
    acceptor.step_ended(&score(0, -3), &[1]);
    assert!(acceptor.is_entity_tabu(1));

    assert!(acceptor.is_accepted(&score(0, -3), &score(0, -3), &[1], &mut rng));
    // Improves on the last step without beating the phase best.
    acceptor.step_ended(&score(0, -5), &[2]);
    assert!(acceptor.is_accepted(&score(0, -5), &score(0, -4), &[1, 2], &mut rng));
}

#[test]
fn test_configured_acceptor_debug_names_variant() {
    let acceptor = ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::HillClimbing)
        .expect("hill climbing builds");
    assert!(format!("{acceptor:?}").starts_with("HillClimbing"));
}

#[test]
fn test_entity_tabu_aspiration() {
    let mut acceptor = EntityTabuAcceptor::<Timetable>::new(2);
    let mut rng = rng();
    acceptor.phase_started(&score(0, -10));
    acceptor.step_ended(&score(0, -8), &[3]);

    assert!(acceptor.is_accepted(&score(0, -8), &score(0, -7), &[3], &mut rng));
}

#[test]
fn test_entity_tabu_list_is_bounded() {
    let mut acceptor = EntityTabuAcceptor::<Timetable>::new(2);
    acceptor.phase_started(&score(0, 0));

    acceptor.step_ended(&score(0, 0), &[1]);
    acceptor.step_ended(&score(0, 0), &[2]);
    acceptor.step_ended(&score(0, 0), &[3]);

    assert_eq!(acceptor.tabu_count(), 2);
    assert!(!acceptor.is_entity_tabu(1));
    assert!(acceptor.is_entity_tabu(2));
    assert!(acceptor.is_entity_tabu(3));

    acceptor.phase_ended();
    assert_eq!(acceptor.tabu_count(), 0);
}

#[test]
fn test_configured_defaults() {
    let acceptor = ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::default()).unwrap();
    match acceptor {
        ConfiguredAcceptor::LateAcceptance(la) => assert_eq!(la.late_acceptance_size(), 400),
        other => panic!("expected late acceptance, got {other:?}"),
    }

    let acceptor = ConfiguredAcceptor::<Timetable>::from_config(
        &AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig::default()),
    )
    .unwrap();
    match acceptor {
        ConfiguredAcceptor::SimulatedAnnealing(sa) => assert_eq!(sa.current_temperature(), 2.0),
        other => panic!("expected simulated annealing, got {other:?}"),
    }
}

#[test]
fn test_configured_sizes() {
    let acceptor = ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::LateAcceptance(
        LateAcceptanceConfig {
            late_acceptance_size: Some(12),
        },
    ))
    .unwrap();
    assert_eq!(acceptor.name(), "LateAcceptance");
    assert!(!acceptor.wants_full_sample());

    let acceptor = ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::TabuSearch(
        TabuSearchConfig {
            entity_tabu_size: Some(7),
        },
    ))
    .unwrap();
    assert_eq!(acceptor.name(), "EntityTabu");
    assert!(acceptor.wants_full_sample());
}

#[test]
fn test_configured_rejects_bad_temperature() {
    let result = ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::SimulatedAnnealing(
        SimulatedAnnealingConfig {
            starting_temperature: Some("warm".to_string()),
            decay_rate: None,
        },
    ));
    assert!(matches!(
        result,
        Err(SolverError::InvalidTemperature { ref value, .. }) if value == "warm"
    ));
}

#[test]
fn test_configured_delegates() {
    let mut acceptor =
        ConfiguredAcceptor::<Timetable>::from_config(&AcceptorConfig::HillClimbing).unwrap();
    let mut rng = rng();
    acceptor.phase_started(&score(0, -1));
    assert!(acceptor.is_accepted(&score(0, -1), &score(0, 0), &[0], &mut rng));
    assert!(!acceptor.is_accepted(&score(0, -1), &score(0, -2), &[0], &mut rng));
}

#[test]
fn test_configured_rejects_non_positive_temperature() {
    for value in ["0hard/-5soft", "0hard/0soft", "-1hard/10soft"] {
        let result = ConfiguredAcceptor::<Timetable>::from_config(
            &AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig {
                starting_temperature: Some(value.to_string()),
                decay_rate: None,
            }),
        );
        match result {
            Err(SolverError::Config(err)) => {
                assert!(err.to_string().contains("starting_temperature"), "{err}")
            }
            other => panic!("expected {value} to be rejected, got {other:?}"),
        }
    }
}
