//! CLI errors, their suggestions and the exit code each one maps to.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use archreport_core::error::{ErrorCategory as CoreCategory, ReportError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input that parsed but makes no sense.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// A configuration file or key could not be read, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("{0}")]
    Core(#[from] ReportError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document for `--output-format json` could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// How an error is reported and which exit code it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// 2 user error, 3 not found, 4 configuration, 1 anything else.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Show the active values: archreport config list".into(),
                "Create a default file: archreport init".into(),
            ],
            Self::Core(core) => {
                let mut tips = core.suggestions();
                if core.is_transient() {
                    tips.push("Nothing was changed; run the command again".into());
                }
                tips
            }
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Serialization { .. } => vec!["Try again with --output-format plain".into()],
            Self::FeatureNotAvailable { feature } => vec![format!(
                "Reinstall with the feature enabled: cargo install archreport-cli --features {feature}"
            )],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } | Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// The stderr report: message, causes when `verbose`, then suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |s| s.red().bold().to_string()),
            paint(&self.to_string(), |s| s.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {}\n",
                    paint("caused by:", |s| s.dimmed().to_string()),
                    err
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |s| s.yellow().bold().to_string())
            ));
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |s| s.dimmed().to_string())
            ));
        }
        out
    }

    /// Record the error on the tracing subscriber, at a level matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(error = %self, "command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// Attach a message to a foreign error while converting it.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e}", f().into()),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archreport_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    fn core(err: impl Into<ReportError>) -> CliError {
        CliError::from(err.into())
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = core(DomainError::UnknownSection("mvc".into()));
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("archreport report list"))
        );
    }

    #[test]
    fn feature_suggestion_names_the_feature() {
        let err = CliError::FeatureNotAvailable {
            feature: "interactive",
        };
        assert!(err.suggestions()[0].contains("--features interactive"));
    }

    #[test]
    fn exit_codes_follow_category() {
        let invalid = core(DomainError::InvalidClassName {
            name: "lower".into(),
            reason: "must start with an uppercase letter".into(),
        });
        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(core(DomainError::UnknownPattern("x".into())).exit_code(), 3);
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        let store = core(ApplicationError::StoreUnavailable {
            reason: "disk full".into(),
        });
        assert_eq!(store.exit_code(), 1);
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let s = core(DomainError::UnknownResource("nope".into())).render(false, false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_lists_causes() {
        let err: CliResult<()> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing")).with_cli_context(|| "reading");
        let s = err.unwrap_err().render(true, false);
        assert!(s.contains("caused by: missing"));
        assert!(!s.contains("--verbose"));
    }
}
