//! `archreport`: browse the architecture report, arrange adapters around
//! the hexagon and generate service objects from the terminal.
//!
//! Exit codes: 0 success, 1 internal failure, 2 bad input, 3 unknown id or
//! missing file, 4 configuration problem.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use archreport_core::application::{ContentService, GeneratorService};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Also reached for --help and --version, with exit code 0.
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // Loaded before logging so `logging.file` applies.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let _log_guard = match init_logging(&cli.global, config.logging.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };
    debug!(?cli.global, "arguments parsed");

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color();

    match run(cli, config, output) {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let bookmarks = commands::bookmark_service(&cli.global, &config);

    match cli.command {
        Commands::Studio(cmd) => commands::studio::execute(cmd, &config, bookmarks, output),
        Commands::Report(cmd) => {
            commands::report::execute(cmd, &ContentService::new(bookmarks), output)
        }
        Commands::Patterns(cmd) => {
            commands::patterns::execute(cmd, &ContentService::new(bookmarks), output)
        }
        Commands::Resources(args) => {
            commands::resources::execute(args, &ContentService::new(bookmarks), output)
        }
        Commands::Generate(args) => {
            commands::generate::execute(args, &config, &GeneratorService::new(bookmarks), output)
        }
        Commands::Bookmarks(cmd) => commands::bookmarks::execute(cmd, &bookmarks, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Log `err`, describe it on stderr and pick the exit code.
fn report(err: &CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    let color = color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_ids_exit_with_not_found() {
        use archreport_core::domain::DomainError;
        let err = CliError::from(archreport_core::error::ReportError::from(
            DomainError::UnknownSection("mvc".into()),
        ));
        assert_eq!(err.exit_code(), 3);
    }
}
