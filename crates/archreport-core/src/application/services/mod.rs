//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "save this arrangement" or "bookmark a section".

pub mod bookmark_service;
pub mod content_service;
pub mod generator_service;
pub mod studio_service;

pub use bookmark_service::BookmarkService;
pub use content_service::{ContentService, SectionSummary};
pub use generator_service::GeneratorService;
pub use studio_service::StudioService;
