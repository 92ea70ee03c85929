use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;

/// A note attached to a bookmarked report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub section_id: String,
    pub note: String,
    pub ts: i64,
}

/// A stored bookmark, as returned by the bookmark store.
///
/// `title` carries the bookmarked item's id for sections and patterns, or a
/// free-form label for studio arrangements and generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Creation time, epoch milliseconds.
    pub ts: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}

/// What a caller submits; the store assigns `id` and `ts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BookmarkDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: None,
            url: None,
            data: None,
        }
    }

    /// Attach a note; blank notes are dropped.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.trim().is_empty()).then_some(note);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyBookmarkTitle);
        }
        Ok(())
    }

    /// Materialize into a stored bookmark.
    pub fn into_bookmark(self, id: impl Into<String>, ts: i64) -> Bookmark {
        Bookmark {
            id: id.into(),
            title: self.title,
            url: self.url,
            note: self.note,
            data: self.data,
            ts,
            annotations: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_note_is_dropped() {
        let draft = BookmarkDraft::new("service-objects").with_note("   ");
        assert!(draft.note.is_none());
    }

    #[test]
    fn empty_title_fails_validation() {
        assert_eq!(
            BookmarkDraft::new("  ").validate(),
            Err(DomainError::EmptyBookmarkTitle)
        );
    }

    #[test]
    fn bookmark_omits_absent_fields() {
        let bookmark = BookmarkDraft::new("linting")
            .with_data(json!({ "title": "5.3 Linting" }))
            .into_bookmark("b-1", 42);
        let value = serde_json::to_value(&bookmark).unwrap();

        assert_eq!(value["ts"], 42);
        assert!(value.get("note").is_none());
        assert!(value.get("annotations").is_none());
    }
}
