//! Error types for Talaria.
//!
//! This module provides the [`TalariaError`] type, which is the standard error
//! type used throughout the Talaria routing toolkit.
//!
//! All failures surface at declaration/compile time: a route table is either
//! built in full or the offending declaration is rejected with one of these
//! errors. Request-time dispatch never returns a `TalariaError`; it
//! communicates exclusively through the middleware flow signal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`TalariaError`].
pub type TalariaResult<T> = Result<T, TalariaError>;

/// Categories of errors for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Declaration validation errors (malformed notation, invalid phase token).
    Validation,
    /// Wiring errors (inconsistent compiled state handed to a constructor).
    Configuration,
}

/// Standard error type for Talaria.
///
/// `TalariaError` provides structured errors with:
/// - Error categorization
/// - The offending middleware notation, when one is involved
/// - Constructor helpers for each variant
///
/// # Example
///
/// ```
/// use talaria_core::{TalariaError, ErrorCategory};
///
/// fn check_phase(token: &str) -> Result<(), TalariaError> {
///     if token != "before" && token != "after" {
///         return Err(TalariaError::validation(format!(
///             "only before and after are accepted phases, got '{token}'"
///         )));
///     }
///     Ok(())
/// }
///
/// let err = check_phase("sideways").unwrap_err();
/// assert_eq!(err.category(), ErrorCategory::Validation);
/// ```
#[derive(Error, Debug)]
pub enum TalariaError {
    /// A declaration failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message.
        message: String,
        /// The middleware notation that failed to parse, if any.
        notation: Option<String>,
    },

    /// Compiled state was wired together inconsistently.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human-readable error message.
        message: String,
    },
}

impl TalariaError {
    /// Creates a validation error with a message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            notation: None,
        }
    }

    /// Creates a validation error pointing at an offending notation string.
    #[must_use]
    pub fn validation_for_notation(
        message: impl Into<String>,
        notation: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            notation: Some(notation.into()),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Returns the offending notation string, if this error carries one.
    #[must_use]
    pub fn notation(&self) -> Option<&str> {
        match self {
            Self::Validation { notation, .. } => notation.as_deref(),
            Self::Configuration { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = TalariaError::validation("phase token not recognized");
        assert_eq!(error.category(), ErrorCategory::Validation);
        assert!(error.notation().is_none());
        assert!(error.to_string().contains("phase token not recognized"));
    }

    #[test]
    fn test_validation_error_with_notation() {
        let error = TalariaError::validation_for_notation("invalid phase", "x@sideways");
        assert_eq!(error.category(), ErrorCategory::Validation);
        assert_eq!(error.notation(), Some("x@sideways"));
    }

    #[test]
    fn test_configuration_error() {
        let error = TalariaError::configuration("collection requires at least one binding");
        assert_eq!(error.category(), ErrorCategory::Configuration);
        assert!(error.notation().is_none());
        assert!(error
            .to_string()
            .starts_with("Configuration error: collection requires"));
    }

    #[test]
    fn test_category_serialization() {
        let json =
            serde_json::to_string(&ErrorCategory::Validation).expect("serialization should work");
        assert_eq!(json, "\"validation\"");
        let json = serde_json::to_string(&ErrorCategory::Configuration)
            .expect("serialization should work");
        assert_eq!(json, "\"configuration\"");
    }
}
