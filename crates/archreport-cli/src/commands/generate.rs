//! `archreport generate`: render a service object skeleton.

use tracing::instrument;

use archreport_core::{application::GeneratorService, domain::ServiceOptions};

use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    config: &AppConfig,
    generator: &GeneratorService,
    output: OutputManager,
) -> CliResult<()> {
    let options = build_options(&args, config);
    let generated = generator.generate(&options)?;

    let saved = if args.save {
        Some(generator.save(&generated)?)
    } else {
        None
    };

    if output.is_json() {
        return output.json(&serde_json::json!({
            "path": generated.path,
            "code": generated.code,
            "options": generated.options,
            "saved": saved,
        }));
    }

    // Unadorned so it can be piped into a file.
    output.block(&generated.code, 0)?;

    if let Some(bookmark) = saved {
        output.success(&format!("Saved '{}'", bookmark.title))?;
    }
    Ok(())
}

fn build_options(args: &GenerateArgs, config: &AppConfig) -> ServiceOptions {
    ServiceOptions {
        class_name: args
            .class_name
            .clone()
            .unwrap_or_else(|| config.generator.class_name.clone()),
        error_handling: args.error_handling.into(),
        use_transaction: !args.no_transaction,
        send_email: !args.no_email,
    }
}
