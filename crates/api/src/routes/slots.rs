use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", post(handlers::slots::generate_slots))
        .route("/api/availability", post(handlers::slots::availability))
}
