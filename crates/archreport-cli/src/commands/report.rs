//! `archreport report`: list, read, search and bookmark report sections.

use archreport_core::{application::ContentService, application::SectionSummary};

use crate::{cli::ReportCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: ReportCommands, content: &ContentService, output: OutputManager) -> CliResult<()> {
    match cmd {
        ReportCommands::List => print_summaries(&content.sections("")?, &output, None),

        ReportCommands::Toc => {
            let toc = content.table_of_contents();
            if output.is_json() {
                let rows: Vec<_> = toc
                    .iter()
                    .map(|(id, title)| serde_json::json!({ "id": id, "title": title }))
                    .collect();
                return output.json(&rows);
            }
            for (id, title) in toc {
                output.print(&format!("{id:<28} {title}"))?;
            }
            Ok(())
        }

        ReportCommands::Search { query } => {
            print_summaries(&content.sections(&query)?, &output, Some(&query))
        }

        ReportCommands::Show { id } => {
            let section = content.section(&id)?;
            if output.is_json() {
                return output.json(section);
            }

            output.header(section.title)?;
            output.muted(&format!("{} min read", section.read_time_minutes()))?;
            output.print("")?;
            output.print(section.excerpt)?;
            if let Some(body) = section.full_content {
                output.print("")?;
                output.block(body, 0)?;
            }
            if let Some(code) = section.code_sample {
                output.print("")?;
                output.block(code, 4)?;
            }
            if content.is_bookmarked(section.id)? {
                output.print("")?;
                output.info("Bookmarked")?;
            }
            Ok(())
        }

        ReportCommands::Bookmark { id, note } => {
            let saved = content.bookmark_section(&id, note.as_deref())?;
            if output.is_json() {
                return output.json(&saved);
            }
            output.success(&format!("Bookmarked '{}'", saved.title))?;
            Ok(())
        }
    }
}

fn print_summaries(
    sections: &[SectionSummary],
    output: &OutputManager,
    query: Option<&str>,
) -> CliResult<()> {
    if output.is_json() {
        return output.json(sections);
    }

    if sections.is_empty() {
        output.warning(&format!(
            "No sections match '{}'",
            query.unwrap_or_default()
        ))?;
        return Ok(());
    }

    output.header("Report Sections:")?;
    for s in sections {
        let mark = if s.bookmarked { "\u{2605}" } else { " " }; // ★
        output.print(&format!(
            "  {mark} {:<22} {}  ({} min)",
            s.id, s.title, s.read_time_minutes
        ))?;
        output.muted(&format!("      {}", s.excerpt))?;
    }
    Ok(())
}
