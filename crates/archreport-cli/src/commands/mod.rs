//! Command handlers.
//!
//! Each handler translates parsed arguments into service calls and renders
//! the result. Adapters are wired here, once per invocation.

pub mod bookmarks;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod patterns;
pub mod report;
pub mod resources;
pub mod studio;

use std::{path::Path, sync::Arc};

use tracing::debug;

use archreport_adapters::{CatalogLoader, InMemoryBookmarkStore, JsonFileBookmarkStore};
use archreport_core::{
    application::{BookmarkService, ports::BookmarkStore},
    domain::AdapterCatalog,
};

use crate::{
    cli::GlobalArgs,
    config::{AppConfig, BookmarkBackend},
    error::CliResult,
};

/// Wire the bookmark gateway selected by flags and config.
///
/// `--bookmarks FILE` forces the file backend.
pub fn bookmark_service(global: &GlobalArgs, config: &AppConfig) -> Arc<BookmarkService> {
    let store: Box<dyn BookmarkStore> = match (&global.bookmarks, config.bookmarks.backend) {
        (Some(path), _) => Box::new(JsonFileBookmarkStore::new(path)),
        (None, BookmarkBackend::File) => {
            Box::new(JsonFileBookmarkStore::new(config.bookmarks_path()))
        }
        (None, BookmarkBackend::Memory) => Box::new(InMemoryBookmarkStore::new()),
    };
    debug!(backend = ?config.bookmarks.backend, "Bookmark store ready");
    Arc::new(BookmarkService::new(store))
}

/// The built-in catalog, or one loaded from `path`.
pub fn load_catalog(path: Option<&Path>) -> CliResult<AdapterCatalog> {
    match path {
        Some(path) => Ok(CatalogLoader::new(path).load()?),
        None => Ok(AdapterCatalog::builtin()),
    }
}
