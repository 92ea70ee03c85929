//! In-memory bookmark store.

use std::sync::{Arc, RwLock};

use tracing::debug;

use archreport_core::{
    application::{ApplicationError, ports::BookmarkStore},
    domain::{Bookmark, BookmarkDraft, DomainValidator as validator},
    error::{ReportError, ReportResult},
};

/// Thread-safe, process-local bookmark store.
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryBookmarkStore {
    inner: Arc<RwLock<Vec<Bookmark>>>,
}

impl InMemoryBookmarkStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `bookmarks`.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bookmarks)),
        }
    }

    /// Get the number of bookmarks.
    pub fn len(&self) -> usize {
        self.inner.read().map(|v| v.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookmarkStore for InMemoryBookmarkStore {
    fn create(&self, draft: BookmarkDraft) -> ReportResult<Bookmark> {
        // Validate before insertion
        validator::validate_bookmark(&draft).map_err(ReportError::Domain)?;

        let bookmark = super::stamp(draft);
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.push(bookmark.clone());

        debug!(id = %bookmark.id, total = inner.len(), "Bookmark stored in memory");
        Ok(bookmark)
    }

    fn list(&self) -> ReportResult<Vec<Bookmark>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archreport_core::domain::DomainError;
    use serde_json::json;

    #[test]
    fn create_assigns_id_and_timestamp() {
        let store = InMemoryBookmarkStore::new();
        let saved = store
            .create(BookmarkDraft::new("linting").with_data(json!({ "title": "Linting" })))
            .unwrap();

        assert!(!saved.id.is_empty());
        assert!(saved.ts > 0);
        assert_eq!(store.list().unwrap(), vec![saved]);
    }

    #[test]
    fn ids_are_unique_and_order_is_kept() {
        let store = InMemoryBookmarkStore::new();
        let a = store.create(BookmarkDraft::new("a")).unwrap();
        let b = store.create(BookmarkDraft::new("b")).unwrap();

        assert_ne!(a.id, b.id);
        let titles: Vec<_> = store.list().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn clones_share_storage() {
        let store = InMemoryBookmarkStore::new();
        let other = store.clone();
        store.create(BookmarkDraft::new("shared")).unwrap();
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn rejects_empty_title() {
        let store = InMemoryBookmarkStore::new();
        assert!(matches!(
            store.create(BookmarkDraft::new("")),
            Err(ReportError::Domain(DomainError::EmptyBookmarkTitle))
        ));
        assert!(store.is_empty());
    }
}
