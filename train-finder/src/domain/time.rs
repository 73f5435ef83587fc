//! Schedule time handling.
//!
//! Train records carry arrival and departure times as "HH:MM:SS" strings
//! with no date. This module turns them into ordered time-of-day values.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Wire format for schedule times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day, without a date.
///
/// # Examples
///
/// ```
/// use train_finder::domain::ScheduleTime;
///
/// let early = ScheduleTime::parse("06:45:00").unwrap();
/// let late = ScheduleTime::parse("07:30:00").unwrap();
/// assert!(early < late);
/// assert_eq!(late.to_string(), "07:30:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime(NaiveTime);

impl ScheduleTime {
    /// Create a schedule time from hour, minute and second.
    ///
    /// Returns `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse a time from "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::ScheduleTime;
    ///
    /// assert!(ScheduleTime::parse("00:00:00").is_ok());
    /// assert!(ScheduleTime::parse("23:59:59").is_ok());
    ///
    /// assert!(ScheduleTime::parse("7:00:00").is_err());
    /// assert!(ScheduleTime::parse("07:00").is_err());
    /// assert!(ScheduleTime::parse("24:00:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // chrono accepts single-digit fields, so pin the shape first
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        if !bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
        {
            return Err(TimeError::new("expected digits"));
        }

        // chrono reads second 60 as a leap second
        if bytes[6] > b'5' {
            return Err(TimeError::new("second must be 0-59"));
        }

        NaiveTime::parse_from_str(s, TIME_FORMAT)
            .map(Self)
            .map_err(|_| TimeError::new("time out of range"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({self})")
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}
