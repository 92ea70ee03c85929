//! Tracing setup for the binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. `RUST_LOG` wins when set. Otherwise `-q` means error,
//! no flag means warn, and each `-v` steps through info, debug and trace.

use std::{io::IsTerminal as _, path::Path};

use anyhow::Context as _;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["archreport", "archreport_core", "archreport_adapters"];

/// Install the stderr subscriber, plus a plain-text file layer for `log_file`.
///
/// Hold the returned guard until exit so buffered file lines are flushed.
pub fn init_logging(
    args: &GlobalArgs,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args));

    let stderr_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let mut guard = None;
    let file_layer = match log_file {
        Some(path) => {
            let (writer, g) = file_writer(path)?;
            guard = Some(g);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a tracing subscriber is already installed")?;

    Ok(guard)
}

fn default_filter(args: &GlobalArgs) -> EnvFilter {
    let level = level_for(args);
    let directives: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    EnvFilter::new(directives.join(","))
}

fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Non-blocking appender on `path`, creating its directory first.
fn file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let name = path
        .file_name()
        .with_context(|| format!("log file '{}' has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory '{}'", dir.display()))?;

    Ok(tracing_appender::non_blocking(
        tracing_appender::rolling::never(dir, name),
    ))
}
