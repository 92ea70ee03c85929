//! The error every public core operation returns.
//!
//! [`ReportError`] is a thin union of the two layers. Both layers classify
//! themselves with the same [`ErrorCategory`], so callers can pick an exit
//! code or a style without matching on individual variants.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ReportError {
    /// A rule of the studio, the content registries or the generator.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A gateway (bookmark store, catalog file) failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ReportError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// See [`ApplicationError::is_transient`]. Domain errors never are.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Domain(_) => false,
            Self::Application(e) => e.is_transient(),
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
