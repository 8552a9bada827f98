//! # Error Types
//!
//! Structured error types for pilecap_core. Only malformed input and
//! unresolvable standard codes are errors; failed engineering checks are
//! reported as [`DesignWarning`](crate::calculations::DesignWarning)s on a
//! complete result instead.
//!
//! ## Example
//!
//! ```rust
//! use pilecap_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_mm: f64, diameter_mm: f64) -> CalcResult<()> {
//!     if spacing_mm <= diameter_mm {
//!         return Err(CalcError::invalid_input(
//!             "pile_spacing_mm",
//!             spacing_mm.to_string(),
//!             "Pile spacing must exceed the pile diameter",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pilecap_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which reference table a grade code was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeKind {
    /// Reinforcing steel (yield strength)
    Steel,
    /// Concrete (compressive strength)
    Concrete,
}

impl std::fmt::Display for GradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeKind::Steel => write!(f, "steel"),
            GradeKind::Concrete => write!(f, "concrete"),
        }
    }
}

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by UIs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Grade code is not present in the steel or concrete standard
    #[error("Unknown {kind} grade: '{code}'")]
    UnknownGrade { kind: GradeKind, code: String },

    /// Bar diameter is not present in the bar standard
    #[error("Unknown bar diameter: {diameter_mm} mm")]
    UnknownBar { diameter_mm: u32 },

    /// A standards table could not be parsed or failed validation
    #[error("Invalid standards table: {reason}")]
    InvalidStandards { reason: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create an UnknownGrade error
    pub fn unknown_grade(kind: GradeKind, code: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            kind,
            code: code.into(),
        }
    }

    /// Create an UnknownBar error
    pub fn unknown_bar(diameter_mm: u32) -> Self {
        CalcError::UnknownBar { diameter_mm }
    }

    /// Create an InvalidStandards error
    pub fn invalid_standards(reason: impl Into<String>) -> Self {
        CalcError::InvalidStandards {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from an unresolvable standard code
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, CalcError::UnknownGrade { .. } | CalcError::UnknownBar { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::UnknownBar { .. } => "UNKNOWN_BAR",
            CalcError::InvalidStandards { .. } => "INVALID_STANDARDS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(e: toml::de::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_grade(GradeKind::Steel, "SD60");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownGrade\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_bar(18).error_code(), "UNKNOWN_BAR");
        assert_eq!(
            CalcError::unknown_grade(GradeKind::Concrete, "C99").error_code(),
            "UNKNOWN_GRADE"
        );
        assert_eq!(CalcError::invalid_standards("empty").error_code(), "INVALID_STANDARDS");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CalcError::unknown_grade(GradeKind::Concrete, "C99").to_string(),
            "Unknown concrete grade: 'C99'"
        );
        assert_eq!(CalcError::unknown_bar(18).to_string(), "Unknown bar diameter: 18 mm");
    }

    #[test]
    fn test_lookup_failure_classification() {
        assert!(CalcError::unknown_bar(18).is_lookup_failure());
        assert!(!CalcError::invalid_input("cover_mm", "-1", "negative").is_lookup_failure());
    }
}
