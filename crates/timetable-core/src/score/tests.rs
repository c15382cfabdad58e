//! Tests for score types.

use super::*;

#[test]
fn test_creation() {
    let score = HardSoftScore::of(-2, -100);
    assert_eq!(score.hard(), -2);
    assert_eq!(score.soft(), -100);
    assert_eq!(HardSoftScore::of_hard(-2), HardSoftScore::of(-2, 0));
    assert_eq!(HardSoftScore::of_soft(7), HardSoftScore::of(0, 7));
}

#[test]
fn test_feasibility() {
    assert!(HardSoftScore::of(0, -1000).is_feasible());
    assert!(!HardSoftScore::of(-1, 0).is_feasible());
}

#[test]
fn test_hard_dominates_soft() {
    let worse = HardSoftScore::of(-1, 100);
    let better = HardSoftScore::of(0, -100);
    assert!(better > worse);
    assert!(better.is_better_than(&worse));
    assert!(worse.is_worse_than(&better));
}

#[test]
fn test_soft_breaks_ties() {
    assert!(HardSoftScore::of(-3, -5) > HardSoftScore::of(-3, -6));
    assert_eq!(
        HardSoftScore::of(-3, -5).cmp(&HardSoftScore::of(-3, -5)),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_arithmetic() {
    let s1 = HardSoftScore::of(-1, -100);
    let s2 = HardSoftScore::of(-1, -50);

    assert_eq!(s1 + s2, HardSoftScore::of(-2, -150));
    assert_eq!(s1 - s2, HardSoftScore::of(0, -50));
    assert_eq!(-s1, HardSoftScore::of(1, 100));
    assert_eq!(HardSoftScore::ONE_SOFT.times(2), HardSoftScore::of(0, 2));
}

#[test]
fn test_display_and_parse() {
    let score = HardSoftScore::of(-3, 12);
    assert_eq!(score.to_string(), "-3hard/12soft");
    assert_eq!(HardSoftScore::parse("-3hard/12soft").unwrap(), score);
    assert_eq!(HardSoftScore::parse(" 0hard / -1soft ").unwrap(), HardSoftScore::of(0, -1));
    assert_eq!(score.to_string_repr(), "-3hard/12soft");
}

#[test]
fn test_parse_errors() {
    assert!(HardSoftScore::parse("0hard").is_err());
    assert!(HardSoftScore::parse("0/0soft").is_err());
    assert!(HardSoftScore::parse("xhard/0soft").is_err());
    let err = HardSoftScore::parse("0hard/0medium").unwrap_err();
    assert!(err.message.contains("soft"));
}

#[test]
fn test_levels() {
    let score = HardSoftScore::of(-1, 4);
    assert_eq!(HardSoftScore::levels_count(), 2);
    assert_eq!(score.to_level_numbers(), vec![-1, 4]);
    assert_eq!(HardSoftScore::level_label(0), ScoreLevel::Hard);
    assert_eq!(HardSoftScore::level_label(1), ScoreLevel::Soft);
}

#[test]
fn test_scalar_preserves_order() {
    let a = HardSoftScore::of(-1, 500);
    let b = HardSoftScore::of(0, -500);
    assert!(a.to_scalar() < b.to_scalar());
}
