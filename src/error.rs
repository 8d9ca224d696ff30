//! Error types for configuration loading.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//!
//! Note that the validation and composition core deliberately has no error
//! type of its own: every validator is total and reports failure as data (a
//! [`ValidationResult`](crate::validation::ValidationResult)), and every
//! composer is infallible. Only loading host configuration can actually fail.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
