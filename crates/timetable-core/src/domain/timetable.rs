//! The timetable aggregate.

use std::collections::HashSet;
use std::fmt;

use super::{
    BasicVariable, BasicVariableSolution, Interner, Lesson, PlanningId, PlanningSolution, Room,
    Timeslot,
};
use crate::error::{Result, TimetableError};
use crate::score::HardSoftScore;

/// One problem instance: the room and timeslot pools, the lessons to
/// schedule and the current score.
///
/// Construction validates that identifiers are unique within each pool and
/// that pre-seeded lessons only reference pool members. The distinct
/// teachers and student groups are derived from the lessons once, in order
/// of first appearance.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use timetable_core::{Lesson, PlanningSolution, Room, Timeslot, Timetable};
///
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let timetable = Timetable::new(
///     vec![Timeslot::new(1, Weekday::Mon, at(8, 30), at(9, 30)).unwrap()],
///     vec![Room::new(1, "Room A")],
///     vec![
///         Lesson::new(1, "Physics", "Kiratkudave Snehal", "10th C grade"),
///         Lesson::new(2, "Physics", "Kiratkudave Snehal", "9th C grade"),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(timetable.teachers(), ["Kiratkudave Snehal"]);
/// assert_eq!(timetable.student_groups(), ["10th C grade", "9th C grade"]);
/// assert!(timetable.score().is_none());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    timeslots: Vec<Timeslot>,
    rooms: Vec<Room>,
    lessons: Vec<Lesson>,
    teachers: Vec<String>,
    student_groups: Vec<String>,
    subjects: Vec<String>,
    score: Option<HardSoftScore>,
}

impl Timetable {
    /// Builds a timetable from its pools.
    pub fn new(timeslots: Vec<Timeslot>, rooms: Vec<Room>, mut lessons: Vec<Lesson>) -> Result<Self> {
        ensure_unique_ids("timeslot", &timeslots)?;
        ensure_unique_ids("room", &rooms)?;
        ensure_unique_ids("lesson", &lessons)?;

        for lesson in &lessons {
            if let Some(index) = lesson.timeslot() {
                if index >= timeslots.len() {
                    return Err(TimetableError::UnknownTimeslot {
                        lesson: lesson.id().value(),
                        index,
                        pool_size: timeslots.len(),
                    });
                }
            }
            if let Some(index) = lesson.room() {
                if index >= rooms.len() {
                    return Err(TimetableError::UnknownRoom {
                        lesson: lesson.id().value(),
                        index,
                        pool_size: rooms.len(),
                    });
                }
            }
        }

        let mut subjects = Interner::new();
        let mut teachers = Interner::new();
        let mut student_groups = Interner::new();
        for lesson in &mut lessons {
            lesson.bind_identities(&mut subjects, &mut teachers, &mut student_groups);
        }

        Ok(Self {
            timeslots,
            rooms,
            lessons,
            teachers: teachers.into_names(),
            student_groups: student_groups.into_names(),
            subjects: subjects.into_names(),
            score: None,
        })
    }

    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Mutable access to the lessons.
    ///
    /// Only the planning variables of a lesson can be changed. Indices set
    /// here must stay within the pools; the solver never produces others.
    pub fn lessons_mut(&mut self) -> &mut [Lesson] {
        &mut self.lessons
    }

    /// Distinct teacher names in order of first appearance.
    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    /// Distinct student group names in order of first appearance.
    pub fn student_groups(&self) -> &[String] {
        &self.student_groups
    }

    /// Distinct subjects in order of first appearance.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// The timeslot a lesson is assigned to.
    pub fn timeslot_of(&self, lesson: &Lesson) -> Option<&Timeslot> {
        lesson.timeslot().and_then(|i| self.timeslots.get(i))
    }

    /// The room a lesson is assigned to.
    pub fn room_of(&self, lesson: &Lesson) -> Option<&Room> {
        lesson.room().and_then(|i| self.rooms.get(i))
    }

    /// Lessons missing a timeslot or a room.
    pub fn unassigned_lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(|l| !l.is_assigned())
    }

    pub fn assigned_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_assigned()).count()
    }
}

fn ensure_unique_ids<T: PlanningId>(kind: &'static str, items: &[T]) -> Result<()>
where
    T::Id: Into<u32>,
{
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let id = item.planning_id();
        if !seen.insert(id) {
            return Err(TimetableError::DuplicateId {
                kind,
                id: id.into(),
            });
        }
    }
    Ok(())
}

impl PlanningSolution for Timetable {
    type Score = HardSoftScore;

    fn score(&self) -> Option<HardSoftScore> {
        self.score
    }

    fn set_score(&mut self, score: Option<HardSoftScore>) {
        self.score = score;
    }

    fn is_initialized(&self) -> bool {
        self.lessons.iter().all(Lesson::is_assigned)
    }
}

fn get_timeslot(t: &Timetable, i: usize) -> Option<usize> {
    t.lessons.get(i).and_then(Lesson::timeslot)
}

fn set_timeslot(t: &mut Timetable, i: usize, v: Option<usize>) {
    if let Some(lesson) = t.lessons.get_mut(i) {
        lesson.set_timeslot(v);
    }
}

fn timeslot_count(t: &Timetable) -> usize {
    t.timeslots.len()
}

fn get_room(t: &Timetable, i: usize) -> Option<usize> {
    t.lessons.get(i).and_then(Lesson::room)
}

fn set_room(t: &mut Timetable, i: usize, v: Option<usize>) {
    if let Some(lesson) = t.lessons.get_mut(i) {
        lesson.set_room(v);
    }
}

fn room_count(t: &Timetable) -> usize {
    t.rooms.len()
}

static LESSON_VARIABLES: [BasicVariable<Timetable>; 2] = [
    BasicVariable {
        name: "timeslot",
        getter: get_timeslot,
        setter: set_timeslot,
        value_count: timeslot_count,
    },
    BasicVariable {
        name: "room",
        getter: get_room,
        setter: set_room,
        value_count: room_count,
    },
];

impl BasicVariableSolution for Timetable {
    fn entity_count(&self) -> usize {
        self.lessons.len()
    }

    fn variables() -> &'static [BasicVariable<Self>] {
        &LESSON_VARIABLES
    }

    /// Lessons sharing their teacher or student group with many others are
    /// the hardest to place.
    fn entity_difficulty(&self, entity_index: usize) -> usize {
        let Some(lesson) = self.lessons.get(entity_index) else {
            return 0;
        };
        self.lessons
            .iter()
            .filter(|other| other.id() != lesson.id())
            .filter(|other| {
                other.teacher_id() == lesson.teacher_id()
                    || other.student_group_id() == lesson.student_group_id()
            })
            .count()
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Timetable({} timeslots, {} rooms, {} lessons, score={})",
            self.timeslots.len(),
            self.rooms.len(),
            self.lessons.len(),
            self.score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "None".to_owned())
        )?;
        for lesson in &self.lessons {
            let slot = self
                .timeslot_of(lesson)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unassigned".to_owned());
            let room = self
                .room_of(lesson)
                .map(|r| r.name().to_owned())
                .unwrap_or_else(|| "unassigned".to_owned());
            writeln!(f, "  {} @ {} in {}", lesson, slot, room)?;
        }
        Ok(())
    }
}
