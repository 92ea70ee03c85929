//! `archreport patterns`: the pattern timeline.

use archreport_core::application::ContentService;

use crate::{cli::PatternCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: PatternCommands, content: &ContentService, output: OutputManager) -> CliResult<()> {
    match cmd {
        PatternCommands::List => {
            let patterns = content.patterns();
            if output.is_json() {
                return output.json(patterns);
            }
            output.header("Pattern Timeline:")?;
            for p in patterns {
                let mark = if content.is_bookmarked(p.id)? { "\u{2605}" } else { " " };
                output.print(&format!("  {mark} {:<20} {:<28} {}", p.id, p.title, p.era))?;
            }
        }

        PatternCommands::Show { id } => {
            let pattern = content.pattern(&id)?;
            if output.is_json() {
                return output.json(pattern);
            }
            output.header(&format!("{} ({})", pattern.title, pattern.era))?;
            output.print(pattern.description)?;
            output.print("")?;
            output.block(pattern.content, 0)?;
            for sample in pattern.code_samples {
                output.print("")?;
                output.info(sample.label)?;
                output.block(sample.code, 4)?;
            }
        }

        PatternCommands::Bookmark { id } => {
            let saved = content.bookmark_pattern(&id)?;
            if output.is_json() {
                return output.json(&saved);
            }
            output.success(&format!("Bookmarked '{}'", saved.title))?;
        }
    }
    Ok(())
}
