//! Domain and application layers behind the architecture report.
//!
//! - [`domain`] holds the pure parts: the studio assignment engine and its
//!   pointer geometry, the inspector projection, report content and the
//!   service object generator. Nothing in it performs I/O.
//! - [`application`] wraps the domain in services and declares the one
//!   driven port, [`BookmarkStore`](application::BookmarkStore), which
//!   `archreport-adapters` implements.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use archreport_core::prelude::*;
//!
//! # fn run(store: Box<dyn BookmarkStore>) -> ReportResult<()> {
//! let bookmarks = Arc::new(BookmarkService::new(store));
//! let mut studio = StudioService::new(AdapterCatalog::builtin(), DropPolicy::default(), bookmarks);
//!
//! studio.dispatch(StudioEvent::BeginDrag(AdapterId::new("adapter-3")));
//! studio.dispatch(StudioEvent::EndDrag(Some(PortId::Port4)));
//!
//! let saved = studio.save_arrangement()?;
//! println!("saved {}", saved.id);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need in one import.
pub mod prelude {
    pub use crate::application::{
        BookmarkService, ContentService, GeneratorService, StudioService, ports::BookmarkStore,
    };
    pub use crate::domain::{
        AdapterCatalog, AdapterId, Arrangement, Bookmark, BookmarkDraft, DropPolicy,
        HexagonLayout, InspectorView, PortId, ServiceOptions, StudioEvent, StudioState,
        Transition,
    };
    pub use crate::error::{ReportError, ReportResult};
}
