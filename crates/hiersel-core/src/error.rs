//! Error types and exit codes for hiersel
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed filter document, invariant violations, etc.)
//!
//! The tree algorithms themselves are total and never produce these errors;
//! only configuration, payload construction and host I/O do.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the hiersel binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or invalid filter data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hiersel operations
#[derive(Error, Debug)]
pub enum HierselError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no target column configured for the default filter")]
    MissingTarget,

    #[error("invalid filter in {path:?}: {reason}")]
    InvalidFilter { path: PathBuf, reason: String },

    #[error("invalid replay events in {path:?}: {reason}")]
    InvalidEvents { path: PathBuf, reason: String },

    #[error("filter tree violates {count} invariant(s)")]
    InvariantViolations { count: usize },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HierselError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HierselError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HierselError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HierselError::UnknownFormat(_)
            | HierselError::UsageError(_)
            | HierselError::InvalidValue { .. } => ExitCode::Usage,

            HierselError::MissingTarget
            | HierselError::InvalidFilter { .. }
            | HierselError::InvalidEvents { .. }
            | HierselError::InvariantViolations { .. } => ExitCode::Data,

            HierselError::Json(_)
            | HierselError::Toml(_)
            | HierselError::FailedOperationWithTarget { .. }
            | HierselError::Other(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            HierselError::UnknownFormat(_) => "unknown_format",
            HierselError::UsageError(_) => "usage_error",
            HierselError::InvalidValue { .. } => "invalid_value",
            HierselError::MissingTarget => "missing_target",
            HierselError::InvalidFilter { .. } => "invalid_filter",
            HierselError::InvalidEvents { .. } => "invalid_events",
            HierselError::InvariantViolations { .. } => "invariant_violations",
            HierselError::Json(_) => "json_error",
            HierselError::Toml(_) => "toml_error",
            HierselError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            HierselError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hiersel operations
pub type Result<T> = std::result::Result<T, HierselError>;
