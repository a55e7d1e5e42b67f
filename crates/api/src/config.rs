//! # API Configuration Module
//!
//! Loads the settings of the SlotPlanner HTTP server from environment
//! variables, with defaults for everything.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `SLOT_STEP_MINUTES`: Spacing of candidate slots when a request does not
//!   set one (default: 10)

use eyre::{eyre, Result, WrapErr};
use slotplanner_core::models::slot::DEFAULT_STEP_MINUTES;
use std::env;
use tracing::Level;

/// Configuration for the SlotPlanner API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotplanner_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Candidate spacing used when a slot request leaves `step_minutes` out
    pub default_step_minutes: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            default_step_minutes: DEFAULT_STEP_MINUTES,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The SLOT_STEP_MINUTES value is not a positive integer
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        // Network settings
        let host = env::var("API_HOST").unwrap_or(defaults.host);
        let port = match env::var("API_PORT") {
            Ok(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            Err(_) => defaults.port,
        };

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.request_timeout);

        // Planner settings
        let default_step_minutes = match env::var("SLOT_STEP_MINUTES") {
            Ok(step) => parse_step_minutes(&step)?,
            Err(_) => defaults.default_step_minutes,
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            default_step_minutes,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:8080"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_step_minutes(value: &str) -> Result<u32> {
    let step: u32 = value
        .trim()
        .parse()
        .wrap_err("Invalid SLOT_STEP_MINUTES value")?;
    if step == 0 {
        return Err(eyre!("SLOT_STEP_MINUTES must be greater than zero"));
    }
    Ok(step)
}
