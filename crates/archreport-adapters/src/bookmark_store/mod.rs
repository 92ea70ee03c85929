//! Bookmark store adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileBookmarkStore;
pub use memory::InMemoryBookmarkStore;

use archreport_core::domain::{Bookmark, BookmarkDraft};
use chrono::Utc;
use uuid::Uuid;

/// Assign a fresh id and the current time.
fn stamp(draft: BookmarkDraft) -> Bookmark {
    draft.into_bookmark(Uuid::new_v4().to_string(), Utc::now().timestamp_millis())
}
