//! # Slot Handlers
//!
//! Endpoints that compute free appointment start times.
//!
//! `POST /api/slots` runs the planner against an explicit working window (or
//! the whole day). `POST /api/availability` first resolves the window from a
//! weekly schedule, the way a booking form does before showing times.
//!
//! Both endpoints fill in the configured default step when a request leaves
//! `step_minutes` out.

use axum::{extract::State, Json};
use slotplanner_core::{
    models::slot::{
        AvailabilityRequest, AvailabilityResponse, GenerateSlotsRequest, GenerateSlotsResponse,
        SlotRequest,
    },
    planner,
};
use std::sync::Arc;
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

fn with_default_step(mut request: SlotRequest, state: &ApiState) -> SlotRequest {
    request.step_minutes.get_or_insert(state.default_step_minutes);
    request
}

/// Generates free start times for one date
///
/// # Endpoint
///
/// ```text
/// POST /api/slots
/// {
///   "date": "2024-05-06",
///   "duration_minutes": 30,
///   "step_minutes": 30,
///   "ignore_id": "apt-1",
///   "working_window": ["08:00", "10:00"],
///   "booked": [{"id": "apt-1", "start": "2024-05-06T08:30:00", "end": "2024-05-06T09:00:00"}]
/// }
/// ```
///
/// # Errors
///
/// * `SlotError::Validation` - zero duration or step, or an inverted booking
#[axum::debug_handler]
pub async fn generate_slots(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<GenerateSlotsRequest>,
) -> Result<Json<GenerateSlotsResponse>, AppError> {
    let request = with_default_step(payload.request, &state);

    let slots = planner::generate_slots(&request, &payload.booked)?;
    debug!(
        date = %request.date,
        booked = payload.booked.len(),
        slots = slots.len(),
        "Generated slots"
    );

    Ok(Json(GenerateSlotsResponse {
        date: request.date,
        slots,
    }))
}

/// Resolves the working window from a weekly schedule and generates slots
///
/// # Endpoint
///
/// ```text
/// POST /api/availability
/// {
///   "schedule": {"1": ["08:00", "10:00"], "2": ["13:00", "18:00"]},
///   "date": "2024-05-06",
///   "duration_minutes": 30,
///   "booked": []
/// }
/// ```
///
/// A closed day answers `open: false` with no slots.
#[axum::debug_handler]
pub async fn availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let request = with_default_step(payload.request, &state);

    let plan = planner::plan_day(&payload.schedule, &request, &payload.booked)?;
    debug!(
        date = %plan.date,
        open = plan.is_open(),
        slots = plan.slots.len(),
        "Planned day"
    );

    Ok(Json(plan.into()))
}
