//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ARCHREPORT_<SECTION>__<KEY>`, e.g.
//!    `ARCHREPORT_STUDIO__DROP_POLICY=reject`
//! 3. Config file: `--config FILE` (must exist) or the platform path
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use archreport_core::domain::{DropPolicy, generator::DEFAULT_CLASS_NAME};

const ENV_PREFIX: &str = "ARCHREPORT";
const LOCAL_CONFIG: &str = ".archreport.toml";
const BOOKMARK_FILE: &str = "bookmarks.json";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bookmarks: BookmarkConfig,
    pub studio: StudioConfig,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Which store the bookmark gateway talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkBackend {
    /// JSON file at `bookmarks.path`.
    #[default]
    File,
    /// Lost when the process exits.
    Memory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    pub backend: BookmarkBackend,
    /// Defaults to `bookmarks.json` in the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub drop_policy: DropPolicy,
    /// TOML adapter catalog; the built-in catalog when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub class_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human`, `plain` or `json`; anything else means auto-detect.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs (without colour) to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist.  Otherwise the platform path and `./.archreport.toml` are read
    /// if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder
                .add_source(
                    File::from(Self::config_path().as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(Path::new(LOCAL_CONFIG))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.archreport.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Path of the local (per-directory) configuration file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG)
    }

    /// Bookmark file to use when the file backend is selected.
    pub fn bookmarks_path(&self) -> PathBuf {
        self.bookmarks.path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|d| d.data_dir().join(BOOKMARK_FILE))
                .unwrap_or_else(|| PathBuf::from(BOOKMARK_FILE))
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "archreport", "archreport")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bookmarks.backend, BookmarkBackend::File);
        assert_eq!(cfg.studio.drop_policy, DropPolicy::Displace);
        assert_eq!(cfg.generator.class_name, "CreateSubscription");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[studio]\ndrop_policy = \"reject\"\n\n[generator]\nclass_name = \"RenewPlan\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.studio.drop_policy, DropPolicy::Reject);
        assert_eq!(cfg.generator.class_name, "RenewPlan");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.bookmarks.backend, BookmarkBackend::File);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn bookmarks_path_prefers_configured_value() {
        let mut cfg = AppConfig::default();
        cfg.bookmarks.path = Some(PathBuf::from("/tmp/marks.json"));
        assert_eq!(cfg.bookmarks_path(), PathBuf::from("/tmp/marks.json"));
    }

    #[test]
    fn default_bookmarks_path_is_json() {
        let p = AppConfig::default().bookmarks_path();
        assert_eq!(p.file_name().and_then(|n| n.to_str()), Some("bookmarks.json"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
