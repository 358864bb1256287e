/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the computations themselves
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ComputeError {
    #[error("Invalid argument: factorial is undefined for negative n = {n}")]
    #[diagnostic(
        code(compute::invalid_argument),
        help("Factorial requires n >= 0.")
    )]
    InvalidArgument { n: i64 },

    #[error("Division by zero: cannot average an empty sequence")]
    #[diagnostic(
        code(compute::divide_by_zero),
        help("Provide at least one value to average.")
    )]
    DivideByZero,

    #[error("Failed to spawn worker: {0}")]
    #[diagnostic(
        code(compute::worker_spawn),
        help("The OS refused to create a thread. Check thread limits and available memory.")
    )]
    WorkerSpawn(String),
}

impl From<std::io::Error> for ComputeError {
    fn from(err: std::io::Error) -> Self {
        ComputeError::WorkerSpawn(err.to_string())
    }
}

/// Configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid worker spec '{0}'")]
    #[diagnostic(
        code(config::invalid_worker),
        help("Workers are written as start:budget_ms pairs, e.g. 4000:500,7000:500")
    )]
    InvalidWorkerSpec(String),

    #[error("Invalid value for {var}: '{value}'")]
    #[diagnostic(
        code(config::invalid_number),
        help("Expected an integer.")
    )]
    InvalidNumber { var: String, value: String },

    #[error("Invalid JSON configuration: {0}")]
    #[diagnostic(
        code(config::invalid_json),
        help("FACTORIAL_CONFIG_JSON must deserialize into a HarnessConfig.")
    )]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
