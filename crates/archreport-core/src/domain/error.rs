// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside transitions and service results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid adapter role '{0}'")]
    InvalidRole(String),

    #[error("invalid drop policy '{0}'")]
    InvalidDropPolicy(String),

    #[error("invalid error-handling style '{0}'")]
    InvalidErrorHandling(String),

    #[error("invalid resource category '{0}'")]
    InvalidCategory(String),

    #[error("invalid class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    #[error("invalid adapter catalog: {0}")]
    InvalidCatalog(String),

    #[error("duplicate adapter id '{id}' in catalog")]
    DuplicateAdapter { id: String },

    #[error("bookmark title must not be empty")]
    EmptyBookmarkTitle,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown port '{0}'")]
    UnknownPort(String),

    #[error("unknown adapter '{0}'")]
    UnknownAdapter(String),

    #[error("unknown report section '{0}'")]
    UnknownSection(String),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    // ========================================================================
    // Invariant Violations
    // ========================================================================
    #[error("studio invariant violated: {0}")]
    InvariantViolated(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPort(port) => vec![
                format!("'{}' is not one of the six hexagon ports", port),
                "Valid ports: port-1, port-2, port-3, port-4, port-5, port-6".into(),
            ],
            Self::UnknownAdapter(id) => vec![
                format!("No adapter with id '{}' in the catalog", id),
                "Try: archreport studio adapters".into(),
            ],
            Self::InvalidDropPolicy(_) => vec![
                "Supported drop policies:".into(),
                "  • displace  - previous occupant returns to the catalog".into(),
                "  • reject    - drops onto occupied ports are refused".into(),
                "  • overwrite - previous occupant leaves the session".into(),
            ],
            Self::InvalidClassName { .. } => vec![
                "Class names must be Ruby constants".into(),
                "Start with an uppercase letter, then letters or digits".into(),
                "Example: CreateSubscription".into(),
            ],
            Self::UnknownSection(_) => vec!["Try: archreport report list".into()],
            Self::UnknownPattern(_) => vec!["Try: archreport patterns list".into()],
            Self::UnknownResource(_) => vec!["Try: archreport resources".into()],
            Self::InvalidCatalog(msg) | Self::InvariantViolated(msg) => vec![
                "Check your adapter catalog file".into(),
                format!("Details: {}", msg),
            ],
            _ => vec!["See --help for accepted values".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPort(_)
            | Self::UnknownAdapter(_)
            | Self::UnknownSection(_)
            | Self::UnknownPattern(_)
            | Self::UnknownResource(_) => ErrorCategory::NotFound,
            Self::InvariantViolated(_) => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
