use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/working-window",
        post(handlers::working_hours::resolve_working_window),
    )
}
