use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SlotError, SlotResult},
    models::{
        booking::BookedInterval,
        time_of_day::TimeOfDay,
        working_hours::{WeeklySchedule, WorkingWindow},
    },
};

/// Step between candidate start times when none is requested.
pub const DEFAULT_STEP_MINUTES: u32 = 10;

/// Parameters of a slot query for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub duration_minutes: u32,
    #[serde(default)]
    pub step_minutes: Option<u32>,
    /// Booked interval to leave out of overlap checks, used when moving an
    /// appointment that is being edited.
    #[serde(default)]
    pub ignore_id: Option<String>,
    /// Opening hours for `date`. The whole day is searched when absent.
    #[serde(default)]
    pub working_window: Option<WorkingWindow>,
}

impl SlotRequest {
    pub fn new(date: NaiveDate, duration_minutes: u32) -> Self {
        Self {
            date,
            duration_minutes,
            step_minutes: None,
            ignore_id: None,
            working_window: None,
        }
    }

    pub fn with_step(mut self, step_minutes: u32) -> Self {
        self.step_minutes = Some(step_minutes);
        self
    }

    pub fn ignoring(mut self, id: impl Into<String>) -> Self {
        self.ignore_id = Some(id.into());
        self
    }

    pub fn within(mut self, window: WorkingWindow) -> Self {
        self.working_window = Some(window);
        self
    }

    pub fn step(&self) -> u32 {
        self.step_minutes.unwrap_or(DEFAULT_STEP_MINUTES)
    }

    pub fn window(&self) -> WorkingWindow {
        self.working_window.unwrap_or(WorkingWindow::FULL_DAY)
    }

    pub fn validate(&self) -> SlotResult<()> {
        if self.duration_minutes == 0 {
            return Err(SlotError::Validation(
                "duration_minutes must be greater than zero".to_string(),
            ));
        }
        if self.step() == 0 {
            return Err(SlotError::Validation(
                "step_minutes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of planning one day against a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// `None` when the clinic is closed on `date`.
    pub window: Option<WorkingWindow>,
    pub slots: Vec<TimeOfDay>,
}

impl DayPlan {
    pub fn is_open(&self) -> bool {
        self.window.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingWindowRequest {
    pub schedule: WeeklySchedule,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingWindowResponse {
    pub date: NaiveDate,
    pub window: Option<WorkingWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlotsRequest {
    #[serde(flatten)]
    pub request: SlotRequest,
    #[serde(default)]
    pub booked: Vec<BookedInterval>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<TimeOfDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub schedule: WeeklySchedule,
    #[serde(flatten)]
    pub request: SlotRequest,
    #[serde(default)]
    pub booked: Vec<BookedInterval>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub open: bool,
    pub window: Option<WorkingWindow>,
    pub slots: Vec<TimeOfDay>,
}

impl From<DayPlan> for AvailabilityResponse {
    fn from(plan: DayPlan) -> Self {
        Self {
            date: plan.date,
            open: plan.is_open(),
            window: plan.window,
            slots: plan.slots,
        }
    }
}
