//! # Slot Planner
//!
//! Computes the free appointment start times of a day.
//!
//! Candidates are laid out on a grid starting at the opening time and
//! spaced `step_minutes` apart. Each candidate spans `duration_minutes`;
//! the walk ends at the first candidate that would run past closing time.
//! A candidate is kept when it overlaps no booked interval, using the
//! half-open rule `start < booked.end && end > booked.start`, so an
//! appointment may start exactly when another one ends.
//!
//! Booked intervals are compared as full date-times and are not filtered
//! by date. An interval from another day can only collide if it actually
//! reaches into the searched window.

use chrono::{Datelike, Duration, NaiveDate};

use crate::{
    errors::SlotResult,
    models::{
        booking::BookedInterval,
        slot::{DayPlan, SlotRequest},
        time_of_day::TimeOfDay,
        working_hours::{WeeklySchedule, WorkingWindow},
    },
};

/// Looks up the opening hours for the weekday of `date`.
///
/// Returns `None` when the clinic is closed that day.
pub fn resolve_working_window(schedule: &WeeklySchedule, date: NaiveDate) -> Option<WorkingWindow> {
    schedule.get(date.weekday())
}

/// Lists the start times at which an appointment of the requested duration
/// fits inside the working window without overlapping `booked`.
///
/// The result is in strictly ascending order and may be empty.
///
/// # Errors
///
/// * `SlotError::Validation` - zero duration, zero step, or a booked
///   interval that does not end after it starts. Nothing is returned
///   in that case.
pub fn generate_slots(request: &SlotRequest, booked: &[BookedInterval]) -> SlotResult<Vec<TimeOfDay>> {
    request.validate()?;
    validate_bookings(booked)?;

    let window = request.window();
    let window_start = request.date.and_time(window.start().as_naive_time());
    let window_end = request.date.and_time(window.end().as_naive_time());
    let duration = Duration::minutes(i64::from(request.duration_minutes));
    let step = i64::from(request.step());

    let blocking: Vec<&BookedInterval> = booked
        .iter()
        .filter(|interval| !interval.is_ignored_by(request.ignore_id.as_deref()))
        .collect();

    let mut slots = Vec::new();
    for index in 0_i64.. {
        // Past the last representable date-time nothing can fit either
        let Some(start) = window_start.checked_add_signed(Duration::minutes(index * step)) else {
            break;
        };
        if start > window_end {
            break;
        }

        let Some(end) = start.checked_add_signed(duration) else {
            break;
        };
        if end > window_end {
            break;
        }

        if blocking.iter().any(|interval| interval.overlaps(start, end)) {
            continue;
        }

        slots.push(TimeOfDay::from_naive_time(start.time()));
    }

    Ok(slots)
}

/// Resolves the day's window from `schedule` and generates its slots.
///
/// An explicit `request.working_window` takes precedence over the schedule.
/// A closed day yields a plan with no window and no slots.
pub fn plan_day(
    schedule: &WeeklySchedule,
    request: &SlotRequest,
    booked: &[BookedInterval],
) -> SlotResult<DayPlan> {
    request.validate()?;
    validate_bookings(booked)?;

    let window = request
        .working_window
        .or_else(|| resolve_working_window(schedule, request.date));

    let Some(window) = window else {
        return Ok(DayPlan {
            date: request.date,
            window: None,
            slots: Vec::new(),
        });
    };

    let request = request.clone().within(window);
    let slots = generate_slots(&request, booked)?;

    Ok(DayPlan {
        date: request.date,
        window: Some(window),
        slots,
    })
}

fn validate_bookings(booked: &[BookedInterval]) -> SlotResult<()> {
    booked.iter().try_for_each(BookedInterval::validate)
}
