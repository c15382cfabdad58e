//! Terse timetable construction for tests.

use chrono::{NaiveTime, Weekday};
use timetable_core::{Lesson, Room, Timeslot, Timetable};

/// Time of day from hours and minutes. Panics on an invalid time.
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Builds a `Timetable` with sequential ids starting at 1.
///
/// ```
/// use chrono::Weekday;
/// use timetable_test::TimetableBuilder;
///
/// let timetable = TimetableBuilder::new()
///     .timeslot(Weekday::Mon, (8, 30), (9, 30))
///     .room("Room A")
///     .assigned_lesson("Math", "A. Turing", "9th grade", 0, 0)
///     .build();
/// assert_eq!(timetable.assigned_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    timeslots: Vec<Timeslot>,
    rooms: Vec<Room>,
    lessons: Vec<Lesson>,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeslot(mut self, day: Weekday, start: (u32, u32), end: (u32, u32)) -> Self {
        let id = self.timeslots.len() as u32 + 1;
        let slot = Timeslot::new(id, day, at(start.0, start.1), at(end.0, end.1))
            .expect("fixture timeslot starts before it ends");
        self.timeslots.push(slot);
        self
    }

    pub fn room(mut self, name: &str) -> Self {
        let id = self.rooms.len() as u32 + 1;
        self.rooms.push(Room::new(id, name));
        self
    }

    pub fn lesson(mut self, subject: &str, teacher: &str, group: &str) -> Self {
        let id = self.lessons.len() as u32 + 1;
        self.lessons.push(Lesson::new(id, subject, teacher, group));
        self
    }

    /// Adds a lesson pre-seeded with pool indices.
    pub fn assigned_lesson(
        mut self,
        subject: &str,
        teacher: &str,
        group: &str,
        timeslot: usize,
        room: usize,
    ) -> Self {
        let id = self.lessons.len() as u32 + 1;
        self.lessons
            .push(Lesson::new(id, subject, teacher, group).with_assignment(timeslot, room));
        self
    }

    pub fn build(self) -> Timetable {
        Timetable::new(self.timeslots, self.rooms, self.lessons).expect("fixture timetable is valid")
    }
}
