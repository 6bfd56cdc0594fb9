use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the dispatcher renders them after logging)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LotError {
    // ========================================================================
    // Precondition
    // ========================================================================
    #[error("Parking lot has not been created yet.")]
    NotCreated,

    // ========================================================================
    // Validation
    // ========================================================================
    #[error("Invalid vehicle type '{kind}'. Only {} are allowed.", allowed.join(" and "))]
    InvalidType { kind: String, allowed: Vec<String> },

    #[error("Invalid slot number {slot}. Please provide a slot between 1 and {capacity}.")]
    OutOfRange { slot: i64, capacity: usize },

    // ========================================================================
    // Capacity
    // ========================================================================
    #[error("Sorry, parking lot is full")]
    Full,

    // ========================================================================
    // Informational
    // ========================================================================
    #[error("Slot number {slot} is already empty.")]
    AlreadyEmpty { slot: usize },

    // ========================================================================
    // Not Found
    // ========================================================================
    #[error("Not found")]
    NotFound { registration: String },
}

impl LotError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotCreated => vec![
                "Create the lot first: create_parking_lot [CAPACITY]".into(),
                "Or set lot.initial_capacity in the config file".into(),
            ],
            Self::InvalidType { allowed, .. } => vec![
                format!("Allowed types: {}", allowed.join(", ")),
                "Types are matched case-insensitively".into(),
            ],
            Self::OutOfRange { capacity, .. } => {
                vec![format!("Slot numbers run from 1 to {capacity}")]
            }
            Self::Full => vec![
                "Free a slot with: leave [SLOT_NUMBER]".into(),
                "Check occupancy with: status".into(),
            ],
            Self::NotFound { registration } => vec![
                format!("No parked vehicle has registration '{registration}'"),
                "Check occupancy with: status".into(),
            ],
            Self::AlreadyEmpty { .. } => vec![],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotCreated => ErrorCategory::Precondition,
            Self::InvalidType { .. } | Self::OutOfRange { .. } => ErrorCategory::Validation,
            Self::Full => ErrorCategory::Capacity,
            Self::AlreadyEmpty { .. } => ErrorCategory::Informational,
            Self::NotFound { .. } => ErrorCategory::NotFound,
        }
    }

    /// Stable snake_case identifier, used as the `error` field in JSON replies.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotCreated => "not_created",
            Self::InvalidType { .. } => "invalid_type",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Full => "full",
            Self::AlreadyEmpty { .. } => "already_empty",
            Self::NotFound { .. } => "not_found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Validation,
    Capacity,
    Informational,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_type_lists_allowed_types() {
        let err = LotError::InvalidType {
            kind: "Truk".into(),
            allowed: vec!["Mobil".into(), "Motor".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid vehicle type 'Truk'. Only Mobil and Motor are allowed."
        );
    }

    #[test]
    fn out_of_range_mentions_bounds() {
        let err = LotError::OutOfRange {
            slot: 7,
            capacity: 6,
        };
        assert!(err.to_string().contains("between 1 and 6"));
    }

    #[test]
    fn already_empty_is_informational() {
        let err = LotError::AlreadyEmpty { slot: 2 };
        assert_eq!(err.category(), ErrorCategory::Informational);
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn not_created_suggests_create() {
        assert!(
            LotError::NotCreated
                .suggestions()
                .iter()
                .any(|s| s.contains("create_parking_lot"))
        );
    }
}
