//! Studio Service - one drag-and-drop session.
//!
//! Owns the [`StudioState`] and forwards saves to the bookmark gateway.
//! Saving never touches the session state, whether it succeeds or not.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::services::BookmarkService,
    domain::{
        ARRANGEMENT_BOOKMARK_TITLE, AdapterCatalog, AdapterId, Arrangement, Bookmark,
        BookmarkDraft, DropPolicy, InspectorView, PortId, StudioEvent, StudioState, Transition,
    },
    error::ReportResult,
};

/// Service for a studio session.
pub struct StudioService {
    state: StudioState,
    bookmarks: Arc<BookmarkService>,
}

impl StudioService {
    pub fn new(catalog: AdapterCatalog, policy: DropPolicy, bookmarks: Arc<BookmarkService>) -> Self {
        Self {
            state: StudioState::new(catalog, policy),
            bookmarks,
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    /// Apply one event to the session.
    pub fn dispatch(&mut self, event: StudioEvent) -> Transition {
        self.state.apply(event)
    }

    /// Pick up `adapter` and drop it on `port` in one go.
    ///
    /// Stops after the pick when it does not succeed, so a drag already in
    /// progress is left alone.
    pub fn drop_adapter(&mut self, adapter: AdapterId, port: Option<PortId>) -> Vec<Transition> {
        let begin = self.dispatch(StudioEvent::BeginDrag(adapter));
        if !matches!(begin, Transition::Picked { .. }) {
            return vec![begin];
        }
        vec![
            begin,
            self.dispatch(StudioEvent::UpdateHover(port)),
            self.dispatch(StudioEvent::EndDrag(port)),
        ]
    }

    pub fn reset(&mut self) -> Transition {
        self.dispatch(StudioEvent::Reset)
    }

    pub fn arrangement(&self) -> Arrangement {
        self.state.arrangement()
    }

    pub fn inspector(&self) -> InspectorView {
        InspectorView::from_state(&self.state)
    }

    /// Snapshot the ports and store them as a bookmark.
    #[instrument(skip_all, fields(occupied = self.state.ports().occupied_count()))]
    pub fn save_arrangement(&self) -> ReportResult<Bookmark> {
        let draft = BookmarkDraft::new(ARRANGEMENT_BOOKMARK_TITLE)
            .with_data(self.arrangement().to_bookmark_data());

        match self.bookmarks.create(draft) {
            Ok(bookmark) => {
                info!(id = %bookmark.id, "Arrangement saved");
                Ok(bookmark)
            }
            Err(e) => {
                warn!(error = %e, "Arrangement not saved");
                Err(e)
            }
        }
    }
}
