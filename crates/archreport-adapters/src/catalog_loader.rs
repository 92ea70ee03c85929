//! TOML adapter-catalog loader.
//!
//! Reads a custom studio catalog from disk so sessions can start from
//! something other than the five built-in adapters.
//!
//! # `catalog.toml` format
//!
//! ```toml
//! [[adapters]]
//! id             = "adapter-1"
//! title          = "HTTP Controller"
//! description    = "Receives web requests and calls a use case."
//! role           = "driving"            # driving | driven (primary | secondary)
//! details        = "Controllers translate HTTP params..."   # optional
//! example_layout = "app/\n└── controllers/"                # optional
//! ```
//!
//! Order in the file is the catalog's seed order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use archreport_core::{
    application::ApplicationError,
    domain::{Adapter, AdapterCatalog, AdapterId, AdapterRole, DomainError},
    error::{ReportError, ReportResult},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogManifest {
    #[serde(default)]
    pub adapters: Vec<AdapterEntry>,
}

/// One `[[adapters]]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct AdapterEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Parsed with [`AdapterRole::from_str`](std::str::FromStr).
    pub role: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub example_layout: String,
}

impl AdapterEntry {
    fn into_adapter(self) -> Result<Adapter, DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidCatalog("adapter id must not be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidCatalog(format!(
                "adapter '{}' has an empty title",
                self.id
            )));
        }

        Ok(Adapter {
            id: AdapterId::new(self.id),
            title: self.title,
            description: self.description,
            role: self.role.parse::<AdapterRole>()?,
            details: self.details,
            example_layout: self.example_layout,
        })
    }
}

impl CatalogManifest {
    /// Parse TOML text into a manifest.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        toml::from_str(raw).map_err(|e| DomainError::InvalidCatalog(format!("invalid TOML: {e}")))
    }

    /// Validate every entry and build the catalog.
    pub fn into_catalog(self) -> Result<AdapterCatalog, DomainError> {
        let adapters = self
            .adapters
            .into_iter()
            .map(AdapterEntry::into_adapter)
            .collect::<Result<Vec<_>, _>>()?;
        AdapterCatalog::new(adapters)
    }
}

/// Loads adapter catalogs from TOML files.
///
/// # Example
///
/// ```no_run
/// use archreport_adapters::CatalogLoader;
///
/// let catalog = CatalogLoader::new("./catalog.toml").load()?;
/// println!("Loaded {} adapters", catalog.len());
/// # Ok::<(), archreport_core::error::ReportError>(())
/// ```
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the catalog.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::CatalogUnreadable`] if the file cannot be read.
    /// - [`DomainError::InvalidCatalog`] / [`DomainError::DuplicateAdapter`] /
    ///   [`DomainError::InvalidRole`] for bad content, including an empty
    ///   adapter list.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ReportResult<AdapterCatalog> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ReportError::from(ApplicationError::CatalogUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            })
        })?;

        let catalog = CatalogManifest::parse(&raw)?.into_catalog()?;
        debug!(adapters = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ── helpers ───────────────────────────────────────────────────────────

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const TWO_ADAPTERS: &str = r#"
[[adapters]]
id = "grpc"
title = "gRPC Endpoint"
description = "Binary RPC entry point."
role = "primary"

[[adapters]]
id = "s3"
title = "Object Storage"
description = "Blob persistence."
role = "driven"
example_layout = "app/infrastructure/storage"
"#;

    // ── tests ─────────────────────────────────────────────────────────────

    #[test]
    fn loads_adapters_in_file_order() {
        let file = write_catalog(TWO_ADAPTERS);
        let catalog = CatalogLoader::new(file.path()).load().unwrap();

        let ids: Vec<_> = catalog.available().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["grpc", "s3"]);
        assert_eq!(catalog.available()[0].role, AdapterRole::Driving);
        assert!(catalog.available()[0].details.is_empty());
    }

    #[test]
    fn empty_file_is_invalid() {
        let file = write_catalog("");
        let err = CatalogLoader::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            ReportError::Domain(DomainError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let file = write_catalog(
            r#"
[[adapters]]
id = "grpc"
title = "gRPC Endpoint"
description = ""
role = "driving"

[[adapters]]
id = "grpc"
title = "gRPC Endpoint (v2)"
description = ""
role = "driving"
"#,
        );
        let err = CatalogLoader::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            ReportError::Domain(DomainError::DuplicateAdapter { .. })
        ));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let file = write_catalog(
            "[[adapters]]\nid = \"x\"\ntitle = \"X\"\ndescription = \"\"\nrole = \"sideways\"\n",
        );
        let err = CatalogLoader::new(file.path()).load().unwrap_err();
        assert!(matches!(err, ReportError::Domain(DomainError::InvalidRole(_))));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogLoader::new(dir.path().join("nope.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Application(ApplicationError::CatalogUnreadable { .. })
        ));
    }
}
