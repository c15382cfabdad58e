//! Lesson planning entity.

use std::fmt;

use super::{Interner, LessonId, PlanningId, StudentGroupId, SubjectId, TeacherId};

/// A lesson to schedule: one subject taught by one teacher to one student
/// group.
///
/// The timeslot and room are planning variables. They hold indices into the
/// owning [`Timetable`](super::Timetable)'s pools and are `None` while
/// unassigned. Setting them only rebinds the association; scoring is the
/// score director's business.
///
/// Teacher, student group and subject identities are assigned when the
/// lesson joins a timetable. Until then they are all zero.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lesson {
    id: LessonId,
    subject: String,
    teacher: String,
    student_group: String,
    subject_id: SubjectId,
    teacher_id: TeacherId,
    student_group_id: StudentGroupId,
    timeslot: Option<usize>,
    room: Option<usize>,
}

impl Lesson {
    /// Creates an unassigned lesson.
    pub fn new(
        id: impl Into<LessonId>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        student_group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            student_group: student_group.into(),
            subject_id: SubjectId::default(),
            teacher_id: TeacherId::default(),
            student_group_id: StudentGroupId::default(),
            timeslot: None,
            room: None,
        }
    }

    /// Pre-seeds both planning variables with pool indices.
    pub fn with_assignment(mut self, timeslot: usize, room: usize) -> Self {
        self.timeslot = Some(timeslot);
        self.room = Some(room);
        self
    }

    pub fn id(&self) -> LessonId {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    pub fn student_group(&self) -> &str {
        &self.student_group
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    pub fn student_group_id(&self) -> StudentGroupId {
        self.student_group_id
    }

    /// Index of the assigned timeslot in the timetable's timeslot pool.
    pub fn timeslot(&self) -> Option<usize> {
        self.timeslot
    }

    /// Index of the assigned room in the timetable's room pool.
    pub fn room(&self) -> Option<usize> {
        self.room
    }

    pub fn set_timeslot(&mut self, timeslot: Option<usize>) {
        self.timeslot = timeslot;
    }

    pub fn set_room(&mut self, room: Option<usize>) {
        self.room = room;
    }

    /// Returns true when both planning variables are assigned.
    pub fn is_assigned(&self) -> bool {
        self.timeslot.is_some() && self.room.is_some()
    }

    pub(crate) fn bind_identities(
        &mut self,
        subjects: &mut Interner,
        teachers: &mut Interner,
        student_groups: &mut Interner,
    ) {
        self.subject_id = SubjectId(subjects.intern(&self.subject));
        self.teacher_id = TeacherId(teachers.intern(&self.teacher));
        self.student_group_id = StudentGroupId(student_groups.intern(&self.student_group));
    }
}

impl PlanningId for Lesson {
    type Id = LessonId;

    fn planning_id(&self) -> LessonId {
        self.id
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lesson(id={}, subject={}, teacher={}, student_group={})",
            self.id, self.subject, self.teacher, self.student_group
        )
    }
}
