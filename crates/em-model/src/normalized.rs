//! Per-record values derived by normalization.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Text shown in place of a phone number that failed normalization.
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";

/// A normalized phone number, or the invalid marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumber {
    Valid(String),
    Invalid,
}

impl PhoneNumber {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Valid(digits) => digits,
            Self::Invalid => INVALID_PHONE_MESSAGE,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration timestamp with minute precision.
///
/// Only real calendar dates and clock times can be represented, so the weekday
/// is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegistrationTime(NaiveDateTime);

impl RegistrationTime {
    /// Build a timestamp from its parts; `None` if the date or time does not exist.
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        date.and_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Day of week in the proleptic Gregorian calendar, `0 = Sunday .. 6 = Saturday`.
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for RegistrationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Normalized contact and timing fields for one attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    /// Always exactly five characters.
    pub zipcode: String,
    pub phone: PhoneNumber,
    pub registered: RegistrationTime,
}
