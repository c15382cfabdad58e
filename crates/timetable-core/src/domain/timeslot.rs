//! Timeslot problem fact.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveTime, TimeDelta, Weekday};

use super::{PlanningId, TimeslotId};
use crate::error::{Result, TimetableError};

/// A weekly recurring period lessons can be scheduled in.
///
/// Times carry no date. Two timeslots are equal when their identifiers are
/// equal.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use timetable_core::Timeslot;
///
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let slot = Timeslot::new(1, Weekday::Mon, at(8, 30), at(9, 30)).unwrap();
/// assert_eq!(slot.day_of_week(), Weekday::Mon);
///
/// // A timeslot must start before it ends.
/// assert!(Timeslot::new(2, Weekday::Mon, at(9, 30), at(9, 30)).is_err());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeslot {
    id: TimeslotId,
    day_of_week: Weekday,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl Timeslot {
    /// Creates a timeslot, rejecting one whose start is not before its end.
    pub fn new(
        id: impl Into<TimeslotId>,
        day_of_week: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self> {
        let id = id.into();
        if start_time >= end_time {
            return Err(TimetableError::InvalidTimeslot {
                id: id.value(),
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id,
            day_of_week,
            start_time,
            end_time,
        })
    }

    pub fn id(&self) -> TimeslotId {
        self.id
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

impl PlanningId for Timeslot {
    type Id = TimeslotId;

    fn planning_id(&self) -> TimeslotId {
        self.id
    }
}

impl PartialEq for Timeslot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Timeslot {}

impl Hash for Timeslot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day_of_week,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
