//! Content Service - report sections, patterns and resources.
//!
//! Read access to the compiled-in content plus the two bookmark actions the
//! report and the pattern explorer offer.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::{
    application::services::BookmarkService,
    domain::{
        Bookmark, Pattern, ReportSection, Resource, ResourceCategory,
        content::{patterns, resources, sections},
    },
    error::ReportResult,
};

/// Section summary shown on report cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub read_time_minutes: usize,
    pub bookmarked: bool,
}

/// Service for content queries.
pub struct ContentService {
    bookmarks: Arc<BookmarkService>,
}

impl ContentService {
    pub fn new(bookmarks: Arc<BookmarkService>) -> Self {
        Self { bookmarks }
    }

    // ── Sections ─────────────────────────────────────────────────────────────

    /// Sections matching `query` (all of them for a blank query), each
    /// flagged with its bookmark state.
    pub fn sections(&self, query: &str) -> ReportResult<Vec<SectionSummary>> {
        let bookmarked = self.bookmarks.bookmarked_titles()?;
        Ok(sections::search(query)
            .into_iter()
            .map(|s| SectionSummary {
                id: s.id,
                title: s.title,
                excerpt: s.excerpt,
                read_time_minutes: s.read_time_minutes(),
                bookmarked: bookmarked.contains(s.id),
            })
            .collect())
    }

    /// `(id, title)` of every section in report order.
    pub fn table_of_contents(&self) -> Vec<(&'static str, &'static str)> {
        sections::table_of_contents()
    }

    pub fn section(&self, id: &str) -> ReportResult<&'static ReportSection> {
        Ok(sections::find(id)?)
    }

    #[instrument(skip(self))]
    pub fn bookmark_section(&self, id: &str, note: Option<&str>) -> ReportResult<Bookmark> {
        let section = sections::find(id)?;
        self.bookmarks.create(section.bookmark_draft(note))
    }

    // ── Patterns ─────────────────────────────────────────────────────────────

    pub fn patterns(&self) -> &'static [Pattern] {
        patterns::all()
    }

    pub fn pattern(&self, id: &str) -> ReportResult<&'static Pattern> {
        Ok(patterns::find(id)?)
    }

    #[instrument(skip(self))]
    pub fn bookmark_pattern(&self, id: &str) -> ReportResult<Bookmark> {
        let pattern = patterns::find(id)?;
        self.bookmarks.create(pattern.bookmark_draft())
    }

    // ── Resources ────────────────────────────────────────────────────────────

    pub fn resources(&self, category: Option<ResourceCategory>) -> Vec<&'static Resource> {
        match category {
            Some(c) => resources::by_category(c),
            None => resources::all().iter().collect(),
        }
    }

    pub fn resource(&self, id: &str) -> ReportResult<&'static Resource> {
        Ok(resources::find(id)?)
    }

    pub fn is_bookmarked(&self, id: &str) -> ReportResult<bool> {
        self.bookmarks.is_bookmarked(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBookmarkStore;
    use crate::domain::{BookmarkDraft, DomainError};
    use crate::error::ReportError;

    fn service(store: MockBookmarkStore) -> ContentService {
        ContentService::new(Arc::new(BookmarkService::new(Box::new(store))))
    }

    #[test]
    fn summaries_flag_bookmarked_sections() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_list()
            .returning(|| Ok(vec![BookmarkDraft::new("testing").into_bookmark("b-1", 1)]));

        let content = service(store);
        let summaries = content.sections("").unwrap();

        assert_eq!(summaries.len(), 8);
        let flagged: Vec<_> = summaries.iter().filter(|s| s.bookmarked).map(|s| s.id).collect();
        assert_eq!(flagged, ["testing"]);
    }

    #[test]
    fn bookmark_section_sends_note_and_title() {
        let mut store = MockBookmarkStore::new();
        store
            .expect_create()
            .withf(|d| {
                d.title == "service-objects"
                    && d.note.as_deref() == Some("share with team")
                    && d.data.as_ref().is_some_and(|v| {
                        v["title"] == "5.1 Service Objects (The Callable Pattern)"
                    })
            })
            .times(1)
            .returning(|d| Ok(d.into_bookmark("b-2", 2)));

        let content = service(store);
        let saved = content
            .bookmark_section("service-objects", Some("share with team"))
            .unwrap();
        assert_eq!(saved.id, "b-2");
    }

    #[test]
    fn unknown_ids_fail_before_the_store() {
        let mut store = MockBookmarkStore::new();
        store.expect_create().never();

        let content = service(store);
        assert!(matches!(
            content.bookmark_pattern("mvc"),
            Err(ReportError::Domain(DomainError::UnknownPattern(_)))
        ));
        assert!(content.section("nope").is_err());
    }

    #[test]
    fn resources_filter_by_category() {
        let content = service(MockBookmarkStore::new());
        assert_eq!(content.resources(None).len(), 6);
        assert_eq!(content.resources(Some(ResourceCategory::Tooling)).len(), 2);
    }
}
