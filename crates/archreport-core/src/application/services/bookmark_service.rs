//! Bookmark Service - the persistence gateway.
//!
//! Fronts a [`BookmarkStore`] with a cached listing. The cache is dropped
//! after every successful write, so the next read goes back to the store.

use std::collections::HashSet;
use std::sync::RwLock;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::BookmarkStore},
    domain::{Bookmark, BookmarkDraft, DomainValidator},
    error::{ReportError, ReportResult},
};

/// Service for bookmark operations.
pub struct BookmarkService {
    store: Box<dyn BookmarkStore>,
    cache: RwLock<Option<Vec<Bookmark>>>,
}

impl BookmarkService {
    /// Create a new bookmark service.
    pub fn new(store: Box<dyn BookmarkStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    /// Store a bookmark. No retry on failure.
    #[instrument(skip_all, fields(title = %draft.title))]
    pub fn create(&self, draft: BookmarkDraft) -> ReportResult<Bookmark> {
        DomainValidator::validate_bookmark(&draft)?;

        match self.store.create(draft) {
            Ok(bookmark) => {
                self.invalidate()?;
                info!(id = %bookmark.id, "Bookmark saved");
                Ok(bookmark)
            }
            Err(e) => {
                warn!(error = %e, "Failed to save bookmark");
                Err(e)
            }
        }
    }

    /// All bookmarks, served from cache when warm.
    pub fn list(&self) -> ReportResult<Vec<Bookmark>> {
        if let Some(cached) = self
            .cache
            .read()
            .map_err(|_| ReportError::Application(ApplicationError::StoreLockError))?
            .as_ref()
        {
            debug!(count = cached.len(), "Bookmark cache hit");
            return Ok(cached.clone());
        }

        let fresh = self.store.list()?;
        *self
            .cache
            .write()
            .map_err(|_| ReportError::Application(ApplicationError::StoreLockError))? =
            Some(fresh.clone());
        Ok(fresh)
    }

    /// Titles of every stored bookmark. Section and pattern bookmarks are
    /// titled with the item id, so this doubles as the bookmarked-id set.
    pub fn bookmarked_titles(&self) -> ReportResult<HashSet<String>> {
        Ok(self.list()?.into_iter().map(|b| b.title).collect())
    }

    pub fn is_bookmarked(&self, title: &str) -> ReportResult<bool> {
        Ok(self.list()?.iter().any(|b| b.title == title))
    }

    fn invalidate(&self) -> ReportResult<()> {
        *self
            .cache
            .write()
            .map_err(|_| ReportError::Application(ApplicationError::StoreLockError))? = None;
        Ok(())
    }
}
