//! Identifier newtypes and string interning.

use std::collections::HashMap;
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub const fn value(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                $name(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Room`](super::Room).
    RoomId
);
define_id!(
    /// Identifier of a [`Timeslot`](super::Timeslot).
    TimeslotId
);
define_id!(
    /// Identifier of a [`Lesson`](super::Lesson).
    LessonId
);
define_id!(
    /// Interned teacher name. The value is the teacher's position in
    /// [`Timetable::teachers`](super::Timetable::teachers).
    TeacherId
);
define_id!(
    /// Interned student group name. The value is the group's position in
    /// [`Timetable::student_groups`](super::Timetable::student_groups).
    StudentGroupId
);
define_id!(
    /// Interned subject name. The empty subject is a subject like any other.
    SubjectId
);

/// Maps names to dense identities in order of first appearance.
///
/// # Example
///
/// ```
/// use timetable_core::domain::Interner;
///
/// let mut teachers = Interner::new();
/// assert_eq!(teachers.intern("Kirti"), 0);
/// assert_eq!(teachers.intern("Rameshwari"), 1);
/// assert_eq!(teachers.intern("Kirti"), 0);
/// assert_eq!(teachers.names(), ["Kirti", "Rameshwari"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interner {
    ids: HashMap<String, u32>,
    names: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity of `name`, allocating the next one if unseen.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// Interned names, indexed by identity.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consumes the interner, returning names indexed by identity.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
