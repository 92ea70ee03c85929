//! `archreport resources`: the resource library.

use archreport_core::{
    application::ContentService,
    domain::{Resource, ResourceBody, ResourceCategory},
};

use crate::{
    cli::{ResourceCommands, ResourcesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ResourcesArgs, content: &ContentService, output: OutputManager) -> CliResult<()> {
    match args.command {
        Some(ResourceCommands::Show { id }) => show(content.resource(&id)?, &output),
        None => list(content, args.category.map(Into::into), &output),
    }
}

fn list(
    content: &ContentService,
    category: Option<ResourceCategory>,
    output: &OutputManager,
) -> CliResult<()> {
    let resources = content.resources(category);
    if output.is_json() {
        return output.json(&resources);
    }

    // Group by tab, in tab order.
    for tab in ResourceCategory::ALL {
        let in_tab: Vec<_> = resources.iter().filter(|r| r.category == tab).collect();
        if in_tab.is_empty() {
            continue;
        }
        output.header(&format!("{}:", tab.label()))?;
        for r in in_tab {
            output.print(&format!("  {:<28} {}", r.id, r.title))?;
            output.muted(&format!("      {}", r.description))?;
        }
    }
    Ok(())
}

fn show(resource: &Resource, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(resource);
    }
    output.header(resource.title)?;
    output.muted(resource.category.label())?;
    output.print(resource.description)?;
    output.print("")?;
    match resource.body {
        ResourceBody::Content(text) => output.block(text, 0)?,
        ResourceBody::Link(route) => output.info(&format!("See {route}"))?,
    }
    Ok(())
}
