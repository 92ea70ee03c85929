//! Everything commands write to stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = resolve_format(args.output_format, &config.output.format, || {
            io::stdout().is_terminal()
        });
        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    fn styled(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.color { style(text) } else { text.to_owned() }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    /// `✓ msg` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.styled(&format!("\u{2713} {msg}"), |s| s.green().to_string()))
    }

    /// `⚠ msg` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.styled(&format!("\u{26a0} {msg}"), |s| s.yellow().to_string()))
    }

    /// `ℹ msg` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.styled(&format!("\u{2139} {msg}"), |s| s.blue().to_string()))
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(&self.styled(text, |s| s.cyan().bold().to_string()))
    }

    /// Secondary text such as excerpts and ids.
    pub fn muted(&self, text: &str) -> io::Result<()> {
        self.emit(&self.styled(text, |s| s.dimmed().to_string()))
    }

    /// Multi-line text, each line indented by `indent` spaces.
    pub fn block(&self, text: &str, indent: usize) -> io::Result<()> {
        let pad = " ".repeat(indent);
        text.lines().try_for_each(|line| self.emit(&format!("{pad}{line}")))
    }

    /// Pretty JSON on stdout. Written even with `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let doc = serde_json::to_string_pretty(value).map_err(|source| CliError::Serialization {
            message: "failed to encode JSON output".into(),
            source,
        })?;
        self.term.write_line(&doc)?;
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// The flag wins, then `output.format` from config, then terminal detection.
fn resolve_format(flag: OutputFormat, configured: &str, is_tty: impl FnOnce() -> bool) -> OutputFormat {
    let requested = match flag {
        OutputFormat::Auto => match configured.to_ascii_lowercase().as_str() {
            "human" => OutputFormat::Human,
            "plain" => OutputFormat::Plain,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Auto,
        },
        explicit => explicit,
    };
    match requested {
        OutputFormat::Auto if is_tty() => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}
