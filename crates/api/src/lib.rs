//! # SlotPlanner API
//!
//! The API crate provides the web server for the SlotPlanner scheduling
//! service. It exposes the planner in `slotplanner-core` as stateless JSON
//! endpoints: every request carries the schedule and bookings it needs, and
//! nothing is stored between requests.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into planner calls
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the planner
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Step applied to slot requests that do not set `step_minutes`
    pub default_step_minutes: u32,
}

impl ApiState {
    pub fn from_config(config: &config::ApiConfig) -> Self {
        Self {
            default_step_minutes: config.default_step_minutes,
        }
    }
}

/// Builds the application router with every route and the shared state
/// attached. Layers for CORS and timeouts are added by `start_server`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Working hours lookup
        .merge(routes::working_hours::routes())
        // Slot generation endpoints
        .merge(routes::slots::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, configures routes and layers, and serves HTTP until
/// the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_config(&config));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::timeout::TimeoutLayer::new(
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        default_step_minutes = config.default_step_minutes,
        "Server listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
