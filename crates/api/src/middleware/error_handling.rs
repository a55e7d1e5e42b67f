//! # Error Handling Middleware
//!
//! Maps planner errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotplanner_core::errors::SlotError;
use tracing::warn;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `SlotError` and implements `IntoResponse`, so handlers
/// can return `Result<Json<T>, AppError>` and use `?` on planner calls.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotplanner_api::middleware::error_handling::AppError;
/// use slotplanner_core::models::time_of_day::TimeOfDay;
///
/// async fn handler(raw: String) -> Result<Json<TimeOfDay>, AppError> {
///     let time: TimeOfDay = raw.parse()?;
///     Ok(Json(time))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::InvalidTime(_) => StatusCode::BAD_REQUEST,
            SlotError::InvalidWindow(_) => StatusCode::BAD_REQUEST,
        };

        let message = self.0.to_string();
        warn!(%status, "{message}");

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Allows `?` on `SlotResult` inside handlers
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Maps a SlotError to an HTTP response
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}
