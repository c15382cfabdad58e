//! Seeded random planning-variable changes.

use rand::{Rng, RngCore};
use timetable_core::Timetable;

/// One change of one lesson's planning variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonChange {
    pub lesson_index: usize,
    pub timeslot: Option<usize>,
    pub room: Option<usize>,
}

impl LessonChange {
    pub fn apply(&self, timetable: &mut Timetable) {
        let lesson = &mut timetable.lessons_mut()[self.lesson_index];
        lesson.set_timeslot(self.timeslot);
        lesson.set_room(self.room);
    }
}

fn random_value<R: RngCore>(rng: &mut R, count: usize) -> Option<usize> {
    // One in eight draws unassigns the variable.
    if count == 0 || rng.random_ratio(1, 8) {
        None
    } else {
        Some(rng.random_range(0..count))
    }
}

/// Picks a random lesson and random new values for both variables.
pub fn random_change<R: RngCore>(timetable: &Timetable, rng: &mut R) -> LessonChange {
    let lesson_index = rng.random_range(0..timetable.lessons().len());
    LessonChange {
        lesson_index,
        timeslot: random_value(rng, timetable.timeslots().len()),
        room: random_value(rng, timetable.rooms().len()),
    }
}

/// Assigns every lesson a random timeslot and room.
pub fn randomize<R: RngCore>(timetable: &mut Timetable, rng: &mut R) {
    let timeslots = timetable.timeslots().len();
    let rooms = timetable.rooms().len();
    for lesson in timetable.lessons_mut() {
        lesson.set_timeslot(Some(rng.random_range(0..timeslots)));
        lesson.set_room(Some(rng.random_range(0..rooms)));
    }
}
