//! Failures of the gateways the services talk to.
//!
//! Rule violations live in [`DomainError`](crate::domain::DomainError);
//! everything here means a store or file misbehaved.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The bookmark store could not be reached, read or written.
    #[error("Bookmark store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("Bookmark store lock poisoned")]
    StoreLockError,

    /// The bookmark document exists but is not valid JSON.
    #[error("Bookmark data could not be decoded: {reason}")]
    Serialization { reason: String },

    #[error("Cannot read adapter catalog {path}: {reason}")]
    CatalogUnreadable { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreUnavailable { reason } => vec![
                format!("Store failure: {reason}"),
                "Check bookmarks.path in your config".into(),
                "Or use the in-memory backend: ARCHREPORT_BOOKMARKS__BACKEND=memory".into(),
            ],
            Self::StoreLockError => vec!["Another thread panicked while saving; try again".into()],
            Self::Serialization { .. } => vec![
                "The bookmark file may be corrupted".into(),
                "Move it aside and try again".into(),
            ],
            Self::CatalogUnreadable { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Or drop --catalog to use the built-in adapters".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreUnavailable { .. } | Self::StoreLockError | Self::Serialization { .. } => {
                ErrorCategory::Internal
            }
            Self::CatalogUnreadable { .. } => ErrorCategory::NotFound,
        }
    }

    /// A later attempt may succeed without the user changing anything.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. } | Self::StoreLockError)
    }
}
