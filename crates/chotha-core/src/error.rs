//! Error types and exit codes for chotha
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/input error (empty input, unreadable source)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per chotha conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/input error - empty input, unreadable source (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during chotha operations
#[derive(Error, Debug)]
pub enum ChothaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("unknown compression level: {0} (expected: low, medium, high, or extreme)")]
    UnknownLevel(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported source type for {path:?} (supported: {supported})")]
    UnsupportedSource { path: PathBuf, supported: String },

    // Data/input errors (exit code 3)
    #[error("nothing to generate: input is empty or whitespace-only")]
    EmptyInput,

    #[error("failed to extract text from {path:?}: {reason}")]
    ExtractionFailed { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ChothaError {
    /// Create an error for a source file that could not be read or decoded
    pub fn extraction_failed(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ChothaError::ExtractionFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a source type the CLI does not decode itself
    pub fn unsupported_source(
        path: impl Into<PathBuf>,
        supported: impl std::fmt::Display,
    ) -> Self {
        ChothaError::UnsupportedSource {
            path: path.into(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ChothaError::UnknownFormat(_)
            | ChothaError::DuplicateFormat
            | ChothaError::UnknownLevel(_)
            | ChothaError::UsageError(_)
            | ChothaError::UnsupportedSource { .. } => ExitCode::Usage,

            ChothaError::EmptyInput | ChothaError::ExtractionFailed { .. } => ExitCode::Data,

            ChothaError::Io(_) | ChothaError::Json(_) | ChothaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in structured output
    fn error_type(&self) -> &'static str {
        match self {
            ChothaError::UnknownFormat(_) => "unknown_format",
            ChothaError::DuplicateFormat => "duplicate_format",
            ChothaError::UnknownLevel(_) => "unknown_level",
            ChothaError::UsageError(_) => "usage_error",
            ChothaError::UnsupportedSource { .. } => "unsupported_source",
            ChothaError::EmptyInput => "empty_input",
            ChothaError::ExtractionFailed { .. } => "extraction_failed",
            ChothaError::Io(_) => "io_error",
            ChothaError::Json(_) => "json_error",
            ChothaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for chotha operations
pub type Result<T> = std::result::Result<T, ChothaError>;
