//! Core domain layer for archreport.
//!
//! Pure logic: the studio assignment engine, pointer geometry, the
//! inspector projection, report content and the snippet generator. All
//! storage concerns go through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Owned state**: The studio is a value, driven by events
//! - **Total transitions**: Invalid studio events are reported, never fail
//! - **Minimal crates**: std, thiserror, serde, tracing

// Public API - what the world sees
pub mod content;
pub mod entities;
pub mod error;
pub mod generator;
pub mod inspector;
pub mod pointer;
pub mod studio;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    ARRANGEMENT_BOOKMARK_TITLE, Adapter, AdapterCatalog, AdapterDef, Annotation, Arrangement,
    ArrangementEntry, BUILTIN_ADAPTERS, Bookmark, BookmarkDraft, Port, PortSet,
};

pub use content::{CodeSample, Pattern, ReportSection, Resource, ResourceBody};
pub use error::{DomainError, ErrorCategory};
pub use generator::{GeneratedService, ServiceOptions};
pub use inspector::InspectorView;
pub use pointer::{
    DragController, DragSource, DropTarget, HexagonLayout, Point, PointerTracker, PortTarget, Rect,
};
pub use studio::{Displacement, IgnoreReason, StudioEvent, StudioState, Transition, reduce};
pub use validation::DomainValidator;

pub use value_objects::{
    AdapterId, AdapterRole, DropPolicy, ErrorHandling, PortId, ResourceCategory,
};
