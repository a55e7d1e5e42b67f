use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SlotError, SlotResult},
    models::time_of_day::TimeOfDay,
};

/// Opening hours of a clinic on one day.
///
/// Serialized as a two-element array, `["08:00", "17:00"]`. The start is
/// always strictly before the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(TimeOfDay, TimeOfDay)", into = "(TimeOfDay, TimeOfDay)")]
pub struct WorkingWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl WorkingWindow {
    /// Window used when a caller does not supply one: `00:00`-`23:59`.
    pub const FULL_DAY: WorkingWindow = WorkingWindow {
        start: TimeOfDay::MIDNIGHT,
        end: TimeOfDay::END_OF_DAY,
    };

    pub fn new(start: TimeOfDay, end: TimeOfDay) -> SlotResult<Self> {
        if start >= end {
            return Err(SlotError::InvalidWindow(format!(
                "start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses a pair of `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> SlotResult<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn length_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl TryFrom<(TimeOfDay, TimeOfDay)> for WorkingWindow {
    type Error = SlotError;

    fn try_from((start, end): (TimeOfDay, TimeOfDay)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<WorkingWindow> for (TimeOfDay, TimeOfDay) {
    fn from(window: WorkingWindow) -> Self {
        (window.start, window.end)
    }
}

/// Weekly opening hours of a clinic, indexed Sunday=0 through Saturday=6.
///
/// Serialized as a JSON object keyed by the day index. A missing key or a
/// `null` value means the clinic is closed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u8, Option<WorkingWindow>>",
    into = "BTreeMap<u8, Option<WorkingWindow>>"
)]
pub struct WeeklySchedule {
    days: [Option<WorkingWindow>; 7],
}

impl WeeklySchedule {
    /// A schedule with every day closed.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, weekday: Weekday, window: WorkingWindow) -> Self {
        self.set(weekday, Some(window));
        self
    }

    pub fn set(&mut self, weekday: Weekday, window: Option<WorkingWindow>) {
        self.days[day_index(weekday)] = window;
    }

    pub fn get(&self, weekday: Weekday) -> Option<WorkingWindow> {
        self.days[day_index(weekday)]
    }

    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.get(weekday).is_some()
    }
}

fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

impl TryFrom<BTreeMap<u8, Option<WorkingWindow>>> for WeeklySchedule {
    type Error = SlotError;

    fn try_from(value: BTreeMap<u8, Option<WorkingWindow>>) -> Result<Self, Self::Error> {
        let mut schedule = Self::closed();
        for (day, window) in value {
            let slot = schedule.days.get_mut(usize::from(day)).ok_or_else(|| {
                SlotError::Validation(format!(
                    "weekday index {day} is outside 0 (Sunday) to 6 (Saturday)"
                ))
            })?;
            *slot = window;
        }
        Ok(schedule)
    }
}

impl From<WeeklySchedule> for BTreeMap<u8, Option<WorkingWindow>> {
    fn from(schedule: WeeklySchedule) -> Self {
        (0u8..)
            .zip(schedule.days)
            .filter_map(|(day, window)| window.map(|w| (day, Some(w))))
            .collect()
    }
}
