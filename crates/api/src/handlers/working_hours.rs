use axum::Json;
use slotplanner_core::{
    models::slot::{WorkingWindowRequest, WorkingWindowResponse},
    planner,
};
use tracing::debug;

/// Looks up the opening hours that apply to a date
///
/// # Endpoint
///
/// ```text
/// POST /api/working-window
/// {"schedule": {"1": ["08:00", "17:00"]}, "date": "2024-05-06"}
/// ```
///
/// `window` is `null` in the response when the clinic is closed that day.
pub async fn resolve_working_window(
    Json(payload): Json<WorkingWindowRequest>,
) -> Json<WorkingWindowResponse> {
    let window = planner::resolve_working_window(&payload.schedule, payload.date);
    debug!(date = %payload.date, open = window.is_some(), "Resolved working window");

    Json(WorkingWindowResponse {
        date: payload.date,
        window,
    })
}
