//! Driven ports, implemented in `archreport-adapters`.

use crate::domain::{Bookmark, BookmarkDraft};
use crate::error::ReportResult;

/// Port for bookmark persistence.
///
/// Implemented by:
/// - `archreport_adapters::bookmark_store::InMemoryBookmarkStore` (session only)
/// - `archreport_adapters::bookmark_store::JsonFileBookmarkStore` (on disk)
///
/// - The store assigns `id` and `ts`; callers submit a [`BookmarkDraft`]
/// - `list` returns bookmarks in creation order
/// - No update or delete: bookmarks are append-only
#[cfg_attr(test, mockall::automock)]
pub trait BookmarkStore: Send + Sync {
    /// Persist a new bookmark and return it as stored.
    fn create(&self, draft: BookmarkDraft) -> ReportResult<Bookmark>;

    /// All stored bookmarks.
    fn list(&self) -> ReportResult<Vec<Bookmark>>;
}
