use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

/// A wall-clock time of day with minute precision.
///
/// The textual form is the 24-hour `HH:MM` string used by clinic settings
/// and by slot responses. Parsing accepts a one or two digit hour
/// (`"8:05"`, `"08:05"`) and requires exactly two minute digits; output is
/// always zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Last representable minute of a day, `23:59`.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay { hour: 23, minute: 59 };

    pub fn new(hour: u8, minute: u8) -> SlotResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!(
                "{hour}:{minute:02} is outside 00:00-23:59"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    pub fn as_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes(i64::from(self.minutes_since_midnight()))
    }

    /// Truncates seconds and sub-second precision.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime(format!("expected HH:MM, got {s:?}"));

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(invalid());
        }
        if !all_digits(hour) || !all_digits(minute) {
            return Err(invalid());
        }

        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
