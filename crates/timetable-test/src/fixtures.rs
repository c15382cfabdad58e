//! Small named problem instances.

use chrono::Weekday;
use timetable_core::Timetable;

use crate::builder::TimetableBuilder;

/// Two lessons by one teacher, both in the first timeslot but in different
/// rooms. Scores `-1hard/-1soft`: a teacher conflict and a room change.
pub fn two_lessons_same_teacher() -> Timetable {
    TimetableBuilder::new()
        .timeslot(Weekday::Mon, (8, 30), (9, 30))
        .timeslot(Weekday::Mon, (9, 30), (10, 30))
        .room("Room A")
        .room("Room B")
        .assigned_lesson("Math", "A. Turing", "9th grade", 0, 0)
        .assigned_lesson("Physics", "A. Turing", "10th grade", 0, 1)
        .build()
}

/// Three back-to-back Monday slots, one Tuesday slot and two rooms, with
/// nothing assigned.
pub fn small_unassigned() -> Timetable {
    TimetableBuilder::new()
        .timeslot(Weekday::Mon, (8, 30), (9, 30))
        .timeslot(Weekday::Mon, (9, 30), (10, 30))
        .timeslot(Weekday::Mon, (10, 30), (11, 30))
        .timeslot(Weekday::Tue, (8, 30), (9, 30))
        .room("Room A")
        .room("Room B")
        .lesson("Math", "A. Turing", "9th grade")
        .lesson("Math", "A. Turing", "9th grade")
        .lesson("Physics", "M. Curie", "9th grade")
        .lesson("Chemistry", "M. Curie", "10th grade")
        .lesson("Biology", "C. Darwin", "10th grade")
        .lesson("History", "I. Jones", "10th grade")
        .build()
}

/// A week-sized instance with enough capacity for a feasible schedule:
/// 10 timeslots over two days, 3 rooms, 16 lessons, nothing assigned.
pub fn school_week() -> Timetable {
    let mut builder = TimetableBuilder::new();
    for day in [Weekday::Mon, Weekday::Tue] {
        for (start, end) in [
            ((8, 30), (9, 30)),
            ((9, 30), (10, 30)),
            ((10, 30), (11, 30)),
            ((13, 30), (14, 30)),
            ((14, 30), (15, 30)),
        ] {
            builder = builder.timeslot(day, start, end);
        }
    }
    builder = builder.room("Room A").room("Room B").room("Room C");

    let lessons = [
        ("Math", "A. Turing", "9th grade"),
        ("Math", "A. Turing", "9th grade"),
        ("Physics", "M. Curie", "9th grade"),
        ("Chemistry", "M. Curie", "9th grade"),
        ("Biology", "C. Darwin", "9th grade"),
        ("History", "I. Jones", "9th grade"),
        ("English", "I. Jones", "9th grade"),
        ("Spanish", "P. Cruz", "9th grade"),
        ("Math", "A. Turing", "10th grade"),
        ("Math", "A. Turing", "10th grade"),
        ("Physics", "M. Curie", "10th grade"),
        ("Chemistry", "M. Curie", "10th grade"),
        ("French", "M. Curie", "10th grade"),
        ("Geography", "C. Darwin", "10th grade"),
        ("History", "I. Jones", "10th grade"),
        ("English", "P. Cruz", "10th grade"),
    ];
    for (subject, teacher, group) in lessons {
        builder = builder.lesson(subject, teacher, group);
    }
    builder.build()
}
