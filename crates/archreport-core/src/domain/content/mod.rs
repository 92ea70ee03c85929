//! Static report content.
//!
//! Everything here is compiled in; lookups by id return `'static`
//! references and unknown ids map to the matching `DomainError::Unknown*`.

pub mod patterns;
pub mod resources;
pub mod sections;

pub use patterns::{CodeSample, Pattern};
pub use resources::{Resource, ResourceBody};
pub use sections::ReportSection;
