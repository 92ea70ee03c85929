//! JSON-file bookmark store.
//!
//! The file holds a single document, `{ "items": [Bookmark, ...] }`, in
//! creation order. It is created on the first write; a missing file reads as
//! an empty list.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use archreport_core::{
    application::{ApplicationError, ports::BookmarkStore},
    domain::{Bookmark, BookmarkDraft, DomainValidator as validator},
    error::{ReportError, ReportResult},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkDocument {
    #[serde(default)]
    items: Vec<Bookmark>,
}

/// Bookmark store persisted as a JSON document on disk.
///
/// Writes go to a sibling temp file that is then renamed over the target.
#[derive(Clone)]
pub struct JsonFileBookmarkStore {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl JsonFileBookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> ReportResult<BookmarkDocument> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BookmarkDocument::default()),
            Err(e) => return Err(unavailable(&self.path, "read", e)),
        };

        if raw.trim().is_empty() {
            return Ok(BookmarkDocument::default());
        }

        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::Serialization {
                reason: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn write_document(&self, doc: &BookmarkDocument) -> ReportResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(parent, "create directory", e))?;
        }

        let json = serde_json::to_string_pretty(doc).map_err(|e| ApplicationError::Serialization {
            reason: e.to_string(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| unavailable(&tmp, "write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, "replace", e))?;
        Ok(())
    }
}

impl BookmarkStore for JsonFileBookmarkStore {
    #[instrument(skip_all, fields(path = %self.path.display(), title = %draft.title))]
    fn create(&self, draft: BookmarkDraft) -> ReportResult<Bookmark> {
        validator::validate_bookmark(&draft).map_err(ReportError::Domain)?;

        let _guard = self
            .lock
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut doc = self.read_document()?;
        let bookmark = super::stamp(draft);
        doc.items.push(bookmark.clone());
        self.write_document(&doc)?;

        debug!(id = %bookmark.id, total = doc.items.len(), "Bookmark written");
        Ok(bookmark)
    }

    fn list(&self) -> ReportResult<Vec<Bookmark>> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(self.read_document()?.items)
    }
}

fn unavailable(path: &Path, operation: &str, e: io::Error) -> ReportError {
    ApplicationError::StoreUnavailable {
        reason: format!("failed to {} {}: {}", operation, path.display(), e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileBookmarkStore {
        JsonFileBookmarkStore::new(dir.path().join("data").join("bookmarks.json"))
    }

    #[test]
    fn missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let saved = store
            .create(
                BookmarkDraft::new("Hexagonal Architecture Arrangement")
                    .with_data(json!({ "arrangement": [{ "port": "port-1", "adapter": null }] })),
            )
            .unwrap();

        // A second store on the same path sees the write.
        let reopened = JsonFileBookmarkStore::new(store.path());
        assert_eq!(reopened.list().unwrap(), vec![saved]);
    }

    #[test]
    fn file_has_items_envelope() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .create(BookmarkDraft::new("testing").with_note("compare with minitest"))
            .unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let items = raw["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "testing");
        assert_eq!(items[0]["note"], "compare with minitest");
        assert!(items[0]["ts"].is_i64());
        assert!(items[0].get("url").is_none());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(
            store.list(),
            Err(ReportError::Application(ApplicationError::Serialization { .. }))
        ));
    }
}
