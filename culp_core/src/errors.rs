//! # Error Types
//!
//! Structured error types for culp_core. The arithmetic itself never fails:
//! an invalid operation is carried as a non-finite payload inside a
//! [`Value`](crate::value::Value). These errors cover the outer surfaces
//! instead, meaning key tokens, entry editing and settings files.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::errors::{CalcError, CalcResult};
//!
//! fn validate_denominator(denom: u32) -> CalcResult<()> {
//!     if !denom.is_power_of_two() {
//!         return Err(CalcError::InvalidInput {
//!             field: "fraction_denominator".to_string(),
//!             value: denom.to_string(),
//!             reason: "Denominator must be a power of two".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for culp_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for everything around the arithmetic core.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong character, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A key token could not be recognized
    #[error("Unknown key '{token}': {reason}")]
    UnknownToken { token: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownToken error
    pub fn unknown_token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnknownToken {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownToken { .. } => "UNKNOWN_TOKEN",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("feet", "x", "Only digits 0-9 are accepted");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_token("zz", "not a key").error_code(), "UNKNOWN_TOKEN");
        assert_eq!(CalcError::file_error("open", "/tmp/x", "missing").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_token("12q", "unrecognized unit suffix");
        assert_eq!(error.to_string(), "Unknown key '12q': unrecognized unit suffix");
    }
}
