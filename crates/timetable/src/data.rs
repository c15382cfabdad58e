//! The reference school week.

use chrono::{NaiveTime, Weekday};
use timetable_core::{Lesson, Result, Room, Timeslot, Timetable};

const TIMESLOTS: [(Weekday, (u32, u32), (u32, u32)); 11] = [
    (Weekday::Mon, (8, 30), (9, 30)),
    (Weekday::Mon, (9, 30), (10, 30)),
    (Weekday::Mon, (10, 30), (11, 30)),
    (Weekday::Mon, (13, 30), (14, 30)),
    (Weekday::Mon, (14, 30), (15, 30)),
    (Weekday::Tue, (8, 30), (9, 30)),
    (Weekday::Tue, (9, 30), (10, 30)),
    (Weekday::Tue, (10, 30), (11, 30)),
    (Weekday::Tue, (13, 30), (14, 30)),
    (Weekday::Tue, (14, 30), (15, 30)),
    (Weekday::Wed, (8, 30), (9, 30)),
];

const ROOMS: [&str; 3] = ["Room A", "Room B", "Room C"];

// (subject, teacher, student group); an empty subject is allowed.
const LESSONS: [(&str, &str, &str); 20] = [
    ("Chemistry", "J.J.Sireesha", "10th B grade"),
    ("Mathmatics", "Gond Surjyakant", "10th C grade"),
    ("Physics", "Kiratkudave Snehal", "10th C grade"),
    ("Physics", "Kiratkudave Snehal", "9th C grade"),
    ("", "Shailkh Sana", "10th C grade"),
    ("", "Shailkh Sana", "10th A grade"),
    ("", "Shailkh Sana", "8th C grade"),
    ("Drawing", "Swati Miss", "10th C grade"),
    ("Drawing", "Swati Miss", "10th A grade"),
    ("Drawing", "Swati Miss", "7th A grade"),
    ("Drawing", "Swati Miss", "8th A grade"),
    ("Drawing", "Swati Miss", "9th C grade"),
    ("Drawing", "Swati Miss", "6th B grade"),
    ("Drawing", "Swati Miss", "6th D grade"),
    ("PE", "Kirti", "8th B grade"),
    ("PE", "Kirti", "9th B grade"),
    ("", "Phatare Komal", "10th C grade"),
    ("PE", "Chitra Rajwade", "6th B grade"),
    ("Computer", "Rameshwari", "10th C grade"),
    ("Computer", "Rameshwari", "8th D grade"),
];

/// Builds the reference problem: 11 one-hour timeslots from Monday to
/// Wednesday morning, three rooms and 20 lessons.
///
/// Lesson 1 is pre-seeded to the first timeslot in Room A; every other
/// lesson starts unassigned. Ids count from 1 in list order.
///
/// ```
/// let timetable = timetable::data::generate_problem().unwrap();
/// assert_eq!(timetable.lessons().len(), 20);
/// assert_eq!(timetable.assigned_count(), 1);
/// ```
pub fn generate_problem() -> Result<Timetable> {
    let timeslots = TIMESLOTS
        .iter()
        .zip(1u32..)
        .map(|(&(day, start, end), id)| Timeslot::new(id, day, time(start), time(end)))
        .collect::<Result<Vec<_>>>()?;

    let rooms = ROOMS
        .iter()
        .zip(1u32..)
        .map(|(&name, id)| Room::new(id, name))
        .collect();

    let lessons = LESSONS
        .iter()
        .zip(1u32..)
        .map(|(&(subject, teacher, group), id)| {
            let lesson = Lesson::new(id, subject, teacher, group);
            if id == 1 {
                lesson.with_assignment(0, 0)
            } else {
                lesson
            }
        })
        .collect();

    Timetable::new(timeslots, rooms, lessons)
}

fn time((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
