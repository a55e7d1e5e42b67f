/// Mapping of planner errors to HTTP responses
pub mod error_handling;
