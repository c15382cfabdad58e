use super::*;
use crate::api::analysis::{ConstraintAnalysis, ConstraintMatch, ScoreExplanation};
use timetable_core::{ConstraintRef, HardSoftScore};

struct Fixed {
    name: &'static str,
    score: HardSoftScore,
}

impl IncrementalConstraint<(), HardSoftScore> for Fixed {
    fn evaluate(&self, _solution: &()) -> HardSoftScore {
        self.score
    }

    fn match_count(&self, _solution: &()) -> usize {
        1
    }

    fn initialize(&mut self, _solution: &()) -> HardSoftScore {
        self.score
    }

    fn on_insert(&mut self, _solution: &(), _entity_index: usize) -> HardSoftScore {
        HardSoftScore::ZERO
    }

    fn on_retract(&mut self, _solution: &(), _entity_index: usize) -> HardSoftScore {
        HardSoftScore::ZERO
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        self.name
    }
}

#[test]
fn test_empty_set() {
    let mut set = ();
    assert_eq!(
        ConstraintSet::<(), HardSoftScore>::evaluate_all(&set, &()),
        HardSoftScore::ZERO
    );
    assert_eq!(ConstraintSet::<(), HardSoftScore>::constraint_count(&set), 0);
    assert_eq!(
        ConstraintSet::<(), HardSoftScore>::initialize_all(&mut set, &()),
        HardSoftScore::ZERO
    );
}

#[test]
fn test_tuple_sums_members() {
    let set = (
        Fixed {
            name: "a",
            score: HardSoftScore::of(-1, 0),
        },
        Fixed {
            name: "b",
            score: HardSoftScore::of(0, 3),
        },
    );

    assert_eq!(set.evaluate_all(&()), HardSoftScore::of(-1, 3));
    let names: Vec<_> = set.evaluate_each(&()).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["a", "b"]);

    let detailed = set.evaluate_detailed(&());
    assert_eq!(detailed[0].constraint_ref, ConstraintRef::new("", "a"));
    assert!(!detailed[1].is_hard);
}

#[test]
fn test_explanation_indictments() {
    let room = ConstraintRef::new("", "Room conflict");
    let stability = ConstraintRef::new("", "Teacher room stability");
    let explanation = ScoreExplanation::new(
        HardSoftScore::of(-1, -1),
        vec![
            ConstraintAnalysis::new(
                room.clone(),
                HardSoftScore::of_hard(-1),
                HardSoftScore::of_hard(-1),
                vec![ConstraintMatch::new(
                    room.clone(),
                    HardSoftScore::of_hard(-1),
                    vec![0, 2],
                )],
                true,
            ),
            ConstraintAnalysis::new(
                stability.clone(),
                HardSoftScore::of_soft(-1),
                HardSoftScore::of_soft(-1),
                vec![ConstraintMatch::new(
                    stability.clone(),
                    HardSoftScore::of_soft(-1),
                    vec![2, 3],
                )],
                false,
            ),
        ],
    );

    assert_eq!(explanation.total_match_count(), 2);
    assert_eq!(explanation.non_zero_constraints().len(), 2);
    assert!(explanation.analysis("Room conflict").is_some());

    let indictments = explanation.indictments();
    assert_eq!(indictments.len(), 3);
    // Entity 2 is in both matches and is the worst.
    assert_eq!(indictments[0].entity_index, 2);
    assert_eq!(indictments[0].score, HardSoftScore::of(-1, -1));
    assert_eq!(indictments[0].violated_constraints().len(), 2);
    assert_eq!(indictments[2].entity_index, 3);
}
