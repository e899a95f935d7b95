//! Mentorship records and their recurring call schedules.
//!
//! A [`Schedule`] is an offset into a repeating cycle of whole weeks, already
//! normalized to a single reference clock. Fields are taken as-is: nothing here
//! checks that `day < 7` or `hour < 24`, or that any field is non-negative, since
//! that belongs to whatever loaded the records. Such values just produce unusual
//! offsets.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Weekly call slot within the recurrence cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// Zero-based week within the cycle.
    pub week: i32,
    /// Zero-based day of the week, 0 = Monday.
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl Schedule {
    pub fn new(week: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            week,
            day,
            hour,
            minute,
        }
    }

    /// Minutes from the start of the cycle to the start of the call. Negative
    /// when a field is negative.
    pub fn start_minute(&self) -> i64 {
        i64::from(self.week) * MINUTES_PER_WEEK
            + i64::from(self.day) * MINUTES_PER_DAY
            + i64::from(self.hour) * MINUTES_PER_HOUR
            + i64::from(self.minute)
    }

    /// The weekday for `day`, or `None` when the day is out of range.
    pub fn weekday(&self) -> Option<Weekday> {
        if !(0..7).contains(&self.day) {
            return None;
        }
        Some((0..self.day).fold(Weekday::Mon, |d, _| d.succ()))
    }

    /// Human-readable label, e.g. `week 1 Mon 10:00`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {} ", i64::from(self.week) + 1)?;
        match self.weekday() {
            Some(weekday) => write!(f, "{}", weekday)?,
            None => write!(f, "day {}", self.day)?,
        }
        write!(f, " {:02}:{:02}", self.hour, self.minute)
    }
}

/// One side of a mentorship. Only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
        }
    }

    /// The name if one is known, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A one-on-one mentor/mentee pairing with an optional weekly call slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentorship {
    pub id: String,
    pub mentee: Participant,
    pub mentor: Participant,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Mentorship {
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }
}

/// Parse a JSON array of mentorship records.
pub fn parse_mentorships(json: &str) -> Result<Vec<Mentorship>> {
    Ok(serde_json::from_str(json)?)
}
