//! # Error Types
//!
//! Structured error types for convert_core. Every failure is a caller-input
//! problem (or a broken registry), so nothing here is retryable. The variants
//! carry enough context for a front end to pick its own message.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::errors::{ConvertError, ConvertResult};
//!
//! fn require_finite(value: f64) -> ConvertResult<f64> {
//!     if !value.is_finite() {
//!         return Err(ConvertError::invalid_value(value, "Value must be a finite number"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_finite(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for convert_core operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structured error type for registry lookups and conversions.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvertError {
    /// Category is not one of the fixed set
    #[error("Unknown category: '{category}'")]
    UnknownCategory { category: String },

    /// Unit name is not registered in the category
    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Value (or the computed result) is NaN or infinite
    #[error("Invalid value {value}: {reason}")]
    InvalidValue { value: String, reason: String },

    /// A settings field or other caller input is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON (de)serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Registry invariant violated (should never happen with the built-in table)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ConvertError {
    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        ConvertError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        ConvertError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(value: f64, reason: impl Into<String>) -> Self {
        ConvertError::InvalidValue {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ConvertError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ConvertError::Internal {
            message: message.into(),
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Conversions are pure, so the answer is only ever yes for I/O.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConvertError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            ConvertError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConvertError::InvalidValue { .. } => "INVALID_VALUE",
            ConvertError::InvalidInput { .. } => "INVALID_INPUT",
            ConvertError::FileError { .. } => "FILE_ERROR",
            ConvertError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ConvertError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConvertError::unknown_unit("Length", "Furlong");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: ConvertError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ConvertError::unknown_category("Pressure").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(ConvertError::invalid_value(f64::NAN, "nan").error_code(), "INVALID_VALUE");
        assert_eq!(ConvertError::internal("broken").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_engine_errors_not_recoverable() {
        assert!(!ConvertError::unknown_category("Pressure").is_recoverable());
        assert!(!ConvertError::unknown_unit("Length", "Furlong").is_recoverable());
        assert!(ConvertError::file_error("read", "x.toml", "denied").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = ConvertError::unknown_unit("Weight", "Stone");
        assert_eq!(err.to_string(), "Unknown unit 'Stone' in category Weight");

        let err = ConvertError::invalid_value(f64::INFINITY, "Value must be a finite number");
        assert_eq!(err.to_string(), "Invalid value inf: Value must be a finite number");
    }
}
