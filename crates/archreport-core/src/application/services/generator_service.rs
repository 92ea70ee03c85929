//! Generator Service - render and save service object snippets.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::services::BookmarkService,
    domain::{Bookmark, GeneratedService, ServiceOptions, generator},
    error::ReportResult,
};

pub struct GeneratorService {
    bookmarks: Arc<BookmarkService>,
}

impl GeneratorService {
    pub fn new(bookmarks: Arc<BookmarkService>) -> Self {
        Self { bookmarks }
    }

    #[instrument(skip_all, fields(class = %options.class_name))]
    pub fn generate(&self, options: &ServiceOptions) -> ReportResult<GeneratedService> {
        let generated = generator::generate(options)?;
        debug!(lines = generated.code.lines().count(), "Service object rendered");
        Ok(generated)
    }

    /// Store the snippet as a `"Service Object: <Class>"` bookmark.
    pub fn save(&self, generated: &GeneratedService) -> ReportResult<Bookmark> {
        self.bookmarks.create(generated.bookmark_draft())
    }
}
