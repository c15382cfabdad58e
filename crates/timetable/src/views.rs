//! Grid views of a timetable.
//!
//! Each view has one row per timeslot and one column per room, teacher or
//! student group. A presentation layer reads the cells of the latest best
//! solution; views are built from a snapshot and never touch it.

use std::collections::BTreeMap;
use std::fmt;

use timetable_core::{Lesson, Timetable};

/// What the columns of a [`TimetableView`] stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Room,
    Teacher,
    StudentGroup,
}

impl ViewKind {
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Room => "Room",
            ViewKind::Teacher => "Teacher",
            ViewKind::StudentGroup => "Student group",
        }
    }

    /// The lesson details shown in a cell; the column already names the
    /// rest.
    fn describe(self, lesson: &Lesson) -> String {
        match self {
            ViewKind::Room => format!(
                "{} {} {}",
                lesson.subject(),
                lesson.teacher(),
                lesson.student_group()
            ),
            ViewKind::Teacher => format!("{} {}", lesson.subject(), lesson.student_group()),
            ViewKind::StudentGroup => format!("{} {}", lesson.subject(), lesson.teacher()),
        }
        .trim()
        .to_owned()
    }
}

/// A timeslot-by-column grid of lesson descriptions.
///
/// Cells are keyed by `(timeslot index, column index)`. A cell holds more
/// than one entry only when the timetable has a conflict there.
///
/// ```
/// use timetable::data::generate_problem;
/// use timetable::views::TimetableView;
///
/// let timetable = generate_problem().unwrap();
/// let by_room = TimetableView::by_room(&timetable);
/// assert_eq!(by_room.columns(), ["Room A", "Room B", "Room C"]);
/// assert_eq!(by_room.cell(0, 0), ["Chemistry J.J.Sireesha 10th B grade"]);
/// assert_eq!(by_room.unassigned().len(), 19);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableView {
    kind: ViewKind,
    rows: Vec<String>,
    columns: Vec<String>,
    cells: BTreeMap<(usize, usize), Vec<String>>,
    unassigned: Vec<String>,
}

impl TimetableView {
    pub fn by_room(timetable: &Timetable) -> Self {
        Self::build(timetable, ViewKind::Room)
    }

    pub fn by_teacher(timetable: &Timetable) -> Self {
        Self::build(timetable, ViewKind::Teacher)
    }

    pub fn by_student_group(timetable: &Timetable) -> Self {
        Self::build(timetable, ViewKind::StudentGroup)
    }

    /// All three views, in room, teacher, student group order.
    pub fn all(timetable: &Timetable) -> [Self; 3] {
        [
            Self::by_room(timetable),
            Self::by_teacher(timetable),
            Self::by_student_group(timetable),
        ]
    }

    fn build(timetable: &Timetable, kind: ViewKind) -> Self {
        let rows = timetable.timeslots().iter().map(ToString::to_string).collect();
        let columns = match kind {
            ViewKind::Room => timetable
                .rooms()
                .iter()
                .map(|room| room.name().to_owned())
                .collect(),
            ViewKind::Teacher => timetable.teachers().to_vec(),
            ViewKind::StudentGroup => timetable.student_groups().to_vec(),
        };

        let mut cells: BTreeMap<(usize, usize), Vec<String>> = BTreeMap::new();
        let mut unassigned = Vec::new();
        for lesson in timetable.lessons() {
            let (Some(timeslot), Some(room)) = (lesson.timeslot(), lesson.room()) else {
                unassigned.push(format!(
                    "{} ({}, {})",
                    lesson.subject(),
                    lesson.teacher(),
                    lesson.student_group()
                ));
                continue;
            };
            let column = match kind {
                ViewKind::Room => room,
                ViewKind::Teacher => lesson.teacher_id().index(),
                ViewKind::StudentGroup => lesson.student_group_id().index(),
            };
            cells
                .entry((timeslot, column))
                .or_default()
                .push(kind.describe(lesson));
        }

        Self {
            kind,
            rows,
            columns,
            cells,
            unassigned,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Timeslot labels, one per row.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The entries at `(row, column)`; empty for a free cell.
    pub fn cell(&self, row: usize, column: usize) -> &[String] {
        self.cells
            .get(&(row, column))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cells holding more than one lesson.
    pub fn conflicts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|(_, entries)| entries.len() > 1)
            .map(|(&key, _)| key)
    }

    /// Lessons missing a timeslot or a room.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    fn cell_text(&self, row: usize, column: usize) -> String {
        self.cell(row, column).join(" + ")
    }
}

impl fmt::Display for TimetableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.chars().count())
            .chain(std::iter::once(self.kind.label().len()))
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(column, name)| {
                (0..self.rows.len())
                    .map(|row| self.cell_text(row, column).chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<label_width$}", self.kind.label())?;
        for (name, &width) in self.columns.iter().zip(&widths) {
            write!(f, " | {name:<width$}")?;
        }
        writeln!(f)?;

        for (row, label) in self.rows.iter().enumerate() {
            write!(f, "{label:<label_width$}")?;
            for (column, &width) in widths.iter().enumerate() {
                write!(f, " | {:<width$}", self.cell_text(row, column))?;
            }
            writeln!(f)?;
        }

        if !self.unassigned.is_empty() {
            writeln!(f, "Unassigned: {}", self.unassigned.join("; "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use timetable_test::TimetableBuilder;

    use super::*;

    fn clash() -> Timetable {
        TimetableBuilder::new()
            .timeslot(Weekday::Mon, (8, 30), (9, 30))
            .timeslot(Weekday::Mon, (9, 30), (10, 30))
            .room("Room A")
            .room("Room B")
            .assigned_lesson("Math", "A. Turing", "9th grade", 0, 0)
            .assigned_lesson("Physics", "M. Curie", "10th grade", 0, 0)
            .assigned_lesson("Chemistry", "M. Curie", "9th grade", 1, 1)
            .lesson("Biology", "C. Darwin", "10th grade")
            .build()
    }

    #[test]
    fn test_room_view() {
        let view = TimetableView::by_room(&clash());

        assert_eq!(view.kind(), ViewKind::Room);
        assert_eq!(view.rows().len(), 2);
        assert_eq!(
            view.cell(0, 0),
            ["Math A. Turing 9th grade", "Physics M. Curie 10th grade"]
        );
        assert_eq!(view.cell(1, 1), ["Chemistry M. Curie 9th grade"]);
        assert!(view.cell(0, 1).is_empty());
        assert_eq!(view.conflicts().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_teacher_and_group_views() {
        let timetable = clash();
        let by_teacher = TimetableView::by_teacher(&timetable);
        let by_group = TimetableView::by_student_group(&timetable);

        assert_eq!(by_teacher.columns(), ["A. Turing", "M. Curie", "C. Darwin"]);
        assert_eq!(by_teacher.cell(0, 1), ["Physics 10th grade"]);
        assert_eq!(by_teacher.cell(1, 1), ["Chemistry 9th grade"]);
        assert_eq!(by_teacher.conflicts().count(), 0);

        assert_eq!(by_group.columns(), ["9th grade", "10th grade"]);
        assert_eq!(by_group.cell(0, 0), ["Math A. Turing"]);
        assert_eq!(by_group.cell(1, 0), ["Chemistry M. Curie"]);
    }

    #[test]
    fn test_unassigned_lessons_are_listed() {
        for view in TimetableView::all(&clash()) {
            assert_eq!(view.unassigned(), ["Biology (C. Darwin, 10th grade)"]);
        }
    }

    #[test]
    fn test_display() {
        let text = TimetableView::by_room(&clash()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Room"));
        assert!(lines[0].contains("| Room A"));
        assert!(lines[1].contains("Math A. Turing 9th grade + Physics M. Curie 10th grade"));
        assert_eq!(lines[3], "Unassigned: Biology (C. Darwin, 10th grade)");
    }
}
