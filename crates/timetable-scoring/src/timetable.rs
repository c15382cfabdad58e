//! The school timetable constraints.
//!
//! | Constraint                       | Level | Join key                      |
//! |----------------------------------|-------|-------------------------------|
//! | Room conflict                    | hard  | timeslot, room                |
//! | Teacher conflict                 | hard  | timeslot, teacher             |
//! | Student group conflict           | hard  | timeslot, student group       |
//! | Teacher room stability           | soft  | teacher                       |
//! | Teacher time efficiency          | soft  | teacher, weekday              |
//! | Student group subject variety    | soft  | subject, student group, weekday |
//!
//! Only lessons with both a timeslot and a room take part in any
//! constraint.

use chrono::{TimeDelta, Weekday};
use timetable_core::{
    ConstraintRef, HardSoftScore, ImpactType, Lesson, StudentGroupId, SubjectId, TeacherId,
    Timeslot, Timetable,
};

use crate::api::analysis::ScoreExplanation;
use crate::api::constraint_set::ConstraintSet;
use crate::constraint::IncrementalBiConstraint;
use crate::director::TypedScoreDirector;

pub const CONSTRAINT_PACKAGE: &str = "timetable";

pub const ROOM_CONFLICT: &str = "Room conflict";
pub const TEACHER_CONFLICT: &str = "Teacher conflict";
pub const STUDENT_GROUP_CONFLICT: &str = "Student group conflict";
pub const TEACHER_ROOM_STABILITY: &str = "Teacher room stability";
pub const TEACHER_TIME_EFFICIENCY: &str = "Teacher time efficiency";
pub const STUDENT_GROUP_SUBJECT_VARIETY: &str = "Student group subject variety";

/// Largest gap between one lesson's end and the next one's start for the
/// two to count as back to back.
pub const ADJACENCY_WINDOW_MINUTES: i64 = 30;

type LessonsFn = fn(&Timetable) -> &[Lesson];
type KeyFn<K> = fn(&Timetable, &Lesson) -> Option<K>;
type PairFilter = fn(&Timetable, &Lesson, &Lesson) -> bool;
type PairWeight = fn(&Timetable, &Lesson, &Lesson) -> HardSoftScore;

/// A lesson self-join with nameable function-pointer parts.
pub type LessonPairConstraint<K> = IncrementalBiConstraint<
    Timetable,
    Lesson,
    K,
    LessonsFn,
    KeyFn<K>,
    PairFilter,
    PairWeight,
    HardSoftScore,
>;

/// The full constraint set, in reporting order.
pub type TimetableConstraints = (
    LessonPairConstraint<(usize, usize)>,
    LessonPairConstraint<(usize, TeacherId)>,
    LessonPairConstraint<(usize, StudentGroupId)>,
    LessonPairConstraint<TeacherId>,
    LessonPairConstraint<(TeacherId, Weekday)>,
    LessonPairConstraint<(SubjectId, StudentGroupId, Weekday)>,
);

/// Incremental director over the timetable constraints.
pub type TimetableScoreDirector = TypedScoreDirector<Timetable, TimetableConstraints>;

/// Builds a fresh, uninitialized set of the six constraints.
pub fn timetable_constraints() -> TimetableConstraints {
    (
        lesson_pair(
            ROOM_CONFLICT,
            ImpactType::Penalty,
            HardSoftScore::ONE_HARD,
            room_slot_key,
            any_pair,
            one_hard,
        ),
        lesson_pair(
            TEACHER_CONFLICT,
            ImpactType::Penalty,
            HardSoftScore::ONE_HARD,
            teacher_slot_key,
            any_pair,
            one_hard,
        ),
        lesson_pair(
            STUDENT_GROUP_CONFLICT,
            ImpactType::Penalty,
            HardSoftScore::ONE_HARD,
            group_slot_key,
            any_pair,
            one_hard,
        ),
        lesson_pair(
            TEACHER_ROOM_STABILITY,
            ImpactType::Penalty,
            HardSoftScore::ONE_SOFT,
            teacher_key,
            different_rooms,
            one_soft,
        ),
        lesson_pair(
            TEACHER_TIME_EFFICIENCY,
            ImpactType::Reward,
            HardSoftScore::ONE_SOFT,
            teacher_day_key,
            back_to_back,
            back_to_back_weight,
        ),
        lesson_pair(
            STUDENT_GROUP_SUBJECT_VARIETY,
            ImpactType::Penalty,
            HardSoftScore::ONE_SOFT,
            subject_group_day_key,
            back_to_back,
            back_to_back_weight,
        ),
    )
}

fn lesson_pair<K>(
    name: &'static str,
    impact_type: ImpactType,
    unit_weight: HardSoftScore,
    key: KeyFn<K>,
    filter: PairFilter,
    weight: PairWeight,
) -> LessonPairConstraint<K>
where
    K: Eq + std::hash::Hash + Clone,
{
    let lessons: LessonsFn = Timetable::lessons;
    IncrementalBiConstraint::new(
        ConstraintRef::new(CONSTRAINT_PACKAGE, name),
        impact_type,
        unit_weight,
        lessons,
        key,
        filter,
        weight,
        unit_weight.hard() != 0,
    )
}

/// Scores a timetable from scratch by enumerating every lesson pair.
pub fn full_score(timetable: &Timetable) -> HardSoftScore {
    timetable_constraints().evaluate_all(timetable)
}

/// Breaks the score of a timetable down per constraint and per match.
pub fn explain_score(timetable: &Timetable) -> ScoreExplanation<HardSoftScore> {
    let analyses = timetable_constraints().evaluate_detailed(timetable);
    let score = analyses
        .iter()
        .fold(HardSoftScore::ZERO, |total, a| total + a.score);
    ScoreExplanation::new(score, analyses)
}

/// Applies `change` to one lesson and returns the updated score, touching
/// only the pairs that involve that lesson.
///
/// The result always equals `full_score` of the mutated timetable.
pub fn incremental_score<F>(
    director: &mut TimetableScoreDirector,
    lesson_index: usize,
    change: F,
) -> HardSoftScore
where
    F: FnOnce(&mut Lesson),
{
    director.do_change(lesson_index, |timetable| {
        if let Some(lesson) = timetable.lessons_mut().get_mut(lesson_index) {
            change(lesson);
        }
    })
}

/// True when `first` ends no earlier than `second` starts and at most
/// thirty minutes after it. Compares times of day only.
pub fn within_30_minutes(first: &Timeslot, second: &Timeslot) -> bool {
    let between = first.end_time() - second.start_time();
    between >= TimeDelta::zero() && between <= TimeDelta::minutes(ADJACENCY_WINDOW_MINUTES)
}

fn placement(lesson: &Lesson) -> Option<(usize, usize)> {
    Some((lesson.timeslot()?, lesson.room()?))
}

fn weekday(timetable: &Timetable, lesson: &Lesson) -> Option<Weekday> {
    let (timeslot, _) = placement(lesson)?;
    timetable
        .timeslots()
        .get(timeslot)
        .map(Timeslot::day_of_week)
}

fn room_slot_key(_timetable: &Timetable, lesson: &Lesson) -> Option<(usize, usize)> {
    placement(lesson)
}

fn teacher_slot_key(_timetable: &Timetable, lesson: &Lesson) -> Option<(usize, TeacherId)> {
    placement(lesson).map(|(timeslot, _)| (timeslot, lesson.teacher_id()))
}

fn group_slot_key(_timetable: &Timetable, lesson: &Lesson) -> Option<(usize, StudentGroupId)> {
    placement(lesson).map(|(timeslot, _)| (timeslot, lesson.student_group_id()))
}

fn teacher_key(_timetable: &Timetable, lesson: &Lesson) -> Option<TeacherId> {
    placement(lesson).map(|_| lesson.teacher_id())
}

fn teacher_day_key(timetable: &Timetable, lesson: &Lesson) -> Option<(TeacherId, Weekday)> {
    Some((lesson.teacher_id(), weekday(timetable, lesson)?))
}

fn subject_group_day_key(
    timetable: &Timetable,
    lesson: &Lesson,
) -> Option<(SubjectId, StudentGroupId, Weekday)> {
    Some((
        lesson.subject_id(),
        lesson.student_group_id(),
        weekday(timetable, lesson)?,
    ))
}

fn any_pair(_timetable: &Timetable, _a: &Lesson, _b: &Lesson) -> bool {
    true
}

fn different_rooms(_timetable: &Timetable, a: &Lesson, b: &Lesson) -> bool {
    a.room() != b.room()
}

/// Number of orderings of the pair in which the first lesson runs into the
/// second, so 0, 1 or 2.
///
/// Only distinct lessons are paired. A join of lessons with themselves
/// would also let a lesson in a slot of 30 minutes or less count against
/// its own slot; this scoring leaves those self-matches out.
fn adjacent_orderings(timetable: &Timetable, a: &Lesson, b: &Lesson) -> i64 {
    let (Some(first), Some(second)) = (timetable.timeslot_of(a), timetable.timeslot_of(b)) else {
        return 0;
    };
    i64::from(within_30_minutes(first, second)) + i64::from(within_30_minutes(second, first))
}

fn back_to_back(timetable: &Timetable, a: &Lesson, b: &Lesson) -> bool {
    adjacent_orderings(timetable, a, b) > 0
}

fn back_to_back_weight(timetable: &Timetable, a: &Lesson, b: &Lesson) -> HardSoftScore {
    HardSoftScore::ONE_SOFT.times(adjacent_orderings(timetable, a, b))
}

fn one_hard(_timetable: &Timetable, _a: &Lesson, _b: &Lesson) -> HardSoftScore {
    HardSoftScore::ONE_HARD
}

fn one_soft(_timetable: &Timetable, _a: &Lesson, _b: &Lesson) -> HardSoftScore {
    HardSoftScore::ONE_SOFT
}

#[cfg(test)]
#[path = "timetable_tests.rs"]
mod tests;
