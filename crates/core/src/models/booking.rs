use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

/// An existing appointment occupying `[start, end)`.
///
/// Times are local wall-clock values; callers resolve time zones before
/// building these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BookedInterval {
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    pub fn validate(&self) -> SlotResult<()> {
        if self.start >= self.end {
            return Err(SlotError::Validation(format!(
                "booked interval {} starts at {} which is not before its end {}",
                self.id, self.start, self.end
            )));
        }
        Ok(())
    }

    /// Half-open overlap test. Touching endpoints do not overlap, so
    /// back-to-back appointments are allowed.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }

    pub fn is_ignored_by(&self, ignore_id: Option<&str>) -> bool {
        ignore_id == Some(self.id.as_str())
    }
}
