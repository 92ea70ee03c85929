//! `archreport bookmarks`: list stored bookmarks.

use chrono::{DateTime, Utc};

use archreport_core::application::BookmarkService;

use crate::{
    cli::BookmarkCommands,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: BookmarkCommands, bookmarks: &BookmarkService, output: OutputManager) -> CliResult<()> {
    match cmd {
        BookmarkCommands::List => {
            let items = bookmarks.list()?;

            if output.is_json() {
                return output.json(&serde_json::json!({ "items": items }));
            }

            if items.is_empty() {
                output.info("No bookmarks yet.")?;
                return Ok(());
            }

            output.header(&format!("Bookmarks ({})", items.len()))?;
            for b in &items {
                output.print(&format!("  {}  {}", format_ts(b.ts), b.title))?;
                if let Some(note) = &b.note {
                    output.muted(&format!("      note: {note}"))?;
                }
                output.muted(&format!("      id: {}", b.id))?;
            }
        }
    }
    Ok(())
}

/// Epoch milliseconds as `YYYY-MM-DD HH:MM` UTC.
fn format_ts(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}
