//! Domain model for school timetabling
//!
//! - [`Room`] and [`Timeslot`]: immutable problem facts
//! - [`Lesson`]: the planning entity, with a timeslot and a room variable
//! - [`Timetable`]: the aggregate solution owning all three pools
//!
//! Lessons refer to their timeslot and room by index into the owning
//! timetable's pools. Teachers, student groups and subjects are interned
//! into small integer identities when a lesson joins a timetable.

mod identity;
mod lesson;
mod room;
mod timeslot;
mod timetable;
mod traits;
mod variable;

pub use identity::{Interner, LessonId, RoomId, StudentGroupId, SubjectId, TeacherId, TimeslotId};
pub use lesson::Lesson;
pub use room::Room;
pub use timeslot::Timeslot;
pub use timetable::Timetable;
pub use traits::{PlanningId, PlanningSolution};
pub use variable::{BasicVariable, BasicVariableSolution};
