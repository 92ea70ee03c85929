//! Use cases built on the domain: studio sessions, content browsing,
//! snippet generation and bookmarking.
//!
//! Services hold no rules of their own. They call into [`crate::domain`]
//! and reach storage only through [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::BookmarkStore;
pub use services::{
    BookmarkService, ContentService, GeneratorService, SectionSummary, StudioService,
};
