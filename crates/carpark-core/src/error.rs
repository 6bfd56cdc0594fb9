//! Unified error handling for Carpark Core.
//!
//! This module provides a unified error type that wraps domain errors and
//! setup failures, with user-actionable suggestions.

use thiserror::Error;

use crate::domain::LotError;

/// Root error type for Carpark Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarparkError {
    /// Errors from the lot itself (rule violations, lookups).
    #[error(transparent)]
    Lot(#[from] LotError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CarparkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Lot(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check lot.vehicle_types in your config file".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Lot(e) => match e.category() {
                crate::domain::ErrorCategory::Precondition => ErrorCategory::Precondition,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Capacity => ErrorCategory::Capacity,
                crate::domain::ErrorCategory::Informational => ErrorCategory::Informational,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// The wrapped lot error, if this is one.
    pub fn as_lot(&self) -> Option<&LotError> {
        match self {
            Self::Lot(e) => Some(e),
            Self::Configuration { .. } => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Validation,
    Capacity,
    Informational,
    NotFound,
    Configuration,
}

/// Convenient result type alias.
pub type CarparkResult<T> = Result<T, CarparkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lot_errors_display_unchanged() {
        let err: CarparkError = LotError::Full.into();
        assert_eq!(err.to_string(), "Sorry, parking lot is full");
        assert_eq!(err.category(), ErrorCategory::Capacity);
    }

    #[test]
    fn configuration_error_has_suggestions() {
        let err = CarparkError::Configuration {
            message: "no vehicle types".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.as_lot().is_none());
        assert!(!err.suggestions().is_empty());
    }
}
