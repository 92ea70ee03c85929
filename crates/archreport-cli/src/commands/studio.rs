//! `archreport studio`: the hexagon studio from the terminal.
//!
//! `play` replays `--drop` gestures (or prompts for them with
//! `--interactive`) through a [`StudioService`], then prints what happened
//! to each gesture, the final arrangement and the inspector panel.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use archreport_core::{
    application::{BookmarkService, StudioService},
    domain::{
        Adapter, BUILTIN_ADAPTERS, Bookmark, Displacement, DropPolicy, HexagonLayout,
        IgnoreReason, InspectorView, Point, PortId, StudioEvent, Transition,
    },
};

use crate::{
    cli::{LayoutArgs, PlayArgs, StudioCommands},
    commands::load_catalog,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: StudioCommands,
    config: &AppConfig,
    bookmarks: Arc<BookmarkService>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        StudioCommands::Adapters { catalog } => {
            let catalog = load_catalog(catalog.as_deref().or(config.studio.catalog.as_deref()))?;
            list_adapters(catalog.available(), &output)
        }
        StudioCommands::Play(args) => play(args, config, bookmarks, &output),
        StudioCommands::Layout(args) => layout(args, &output),
    }
}

// ── adapters ──────────────────────────────────────────────────────────────────

fn list_adapters(adapters: &[Adapter], output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(adapters);
    }
    output.header("Adapters:")?;
    for a in adapters {
        output.print(&format!("  {:<12} {:<22} [{}]", a.id, a.title, a.role))?;
        output.muted(&format!("      {}", a.description))?;
    }
    Ok(())
}

// ── play ──────────────────────────────────────────────────────────────────────

/// JSON shape of a finished `play` session.
#[derive(Serialize)]
struct SessionReport<'a> {
    policy: DropPolicy,
    transitions: &'a [Transition],
    arrangement: archreport_core::domain::Arrangement,
    available: Vec<&'a str>,
    orphaned: Vec<&'a str>,
    holding: Option<&'a str>,
    inspector: InspectorView,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<&'a Bookmark>,
}

#[instrument(skip_all, fields(drops = args.drops.len(), save = args.save))]
fn play(
    args: PlayArgs,
    config: &AppConfig,
    bookmarks: Arc<BookmarkService>,
    output: &OutputManager,
) -> CliResult<()> {
    let catalog = load_catalog(
        args.catalog
            .as_deref()
            .or(config.studio.catalog.as_deref()),
    )?;
    let policy = args
        .policy
        .map(DropPolicy::from)
        .unwrap_or(config.studio.drop_policy);

    let mut studio = StudioService::new(catalog, policy, bookmarks);

    let transitions = if args.interactive {
        interactive::run(&mut studio, output)?
    } else {
        let mut transitions = Vec::new();
        for drop in args.drops {
            transitions.extend(studio.drop_adapter(drop.adapter, drop.port));
        }
        if let Some(adapter) = args.pick {
            transitions.push(studio.dispatch(StudioEvent::BeginDrag(adapter)));
            if let Some(port) = args.hover {
                transitions.push(studio.dispatch(StudioEvent::UpdateHover(Some(port))));
            }
        }
        transitions
    };

    let commits = transitions.iter().filter(|t| t.is_commit()).count();
    info!(commits, "Studio session finished");

    // Saving never alters the session, so print it first either way.
    let saved = if args.save {
        Some(studio.save_arrangement())
    } else {
        None
    };

    let state = studio.state();
    if output.is_json() {
        let saved = saved.transpose()?;
        return output.json(&SessionReport {
            policy,
            transitions: &transitions,
            arrangement: studio.arrangement(),
            available: state.catalog().available().iter().map(|a| a.id.as_str()).collect(),
            orphaned: state.orphaned().iter().map(|a| a.id.as_str()).collect(),
            holding: state.active().map(|a| a.id.as_str()),
            inspector: studio.inspector(),
            saved: saved.as_ref(),
        });
    }

    if !args.interactive {
        output.header(&format!("Session (policy: {policy})"))?;
        for t in &transitions {
            print_transition(t, output)?;
        }
        output.print("")?;
    }

    print_hexagon(&studio, output)?;
    output.print("")?;
    print_inspector(&studio.inspector(), output)?;

    if let Some(result) = saved {
        output.print("")?;
        let bookmark = result?;
        output.success(&format!("Saved '{}' ({})", bookmark.title, bookmark.id))?;
    }
    Ok(())
}

fn print_transition(t: &Transition, output: &OutputManager) -> CliResult<()> {
    match t {
        Transition::Committed { .. } => output.success(&describe(t))?,
        Transition::Rejected { .. } | Transition::Ignored { .. } => output.warning(&describe(t))?,
        Transition::Hovered { .. } => output.muted(&format!("  {}", describe(t)))?,
        _ => output.info(&describe(t))?,
    }
    Ok(())
}

/// One-line description of a transition.
pub fn describe(t: &Transition) -> String {
    match t {
        Transition::Picked { adapter } => format!("picked up {adapter}"),
        Transition::Hovered { port: Some(port) } => format!("hovering {port}"),
        Transition::Hovered { port: None } => "hovering outside the hexagon".into(),
        Transition::Committed {
            port,
            adapter,
            displaced,
        } => match displaced {
            None => format!("placed {adapter} in {port}"),
            Some(Displacement::Returned(prev)) => {
                format!("placed {adapter} in {port}; {prev} returned to the catalog")
            }
            Some(Displacement::Orphaned(prev)) => {
                format!("placed {adapter} in {port}; {prev} was overwritten")
            }
        },
        Transition::Cancelled { adapter } => {
            format!("dropped {adapter} outside the hexagon; nothing changed")
        }
        Transition::Rejected {
            port,
            adapter,
            occupant,
        } => format!("{port} is taken by {occupant}; {adapter} stays in the catalog"),
        Transition::Reset { returned } => format!("reset; {returned} adapter(s) back in the catalog"),
        Transition::Ignored { reason } => match reason {
            IgnoreReason::DragInProgress(id) => format!("ignored: already holding {id}"),
            IgnoreReason::NotAvailable(id) => format!("ignored: {id} is not in the catalog"),
            IgnoreReason::NoActiveDrag => "ignored: nothing is being dragged".into(),
        },
    }
}

fn print_hexagon(studio: &StudioService, output: &OutputManager) -> CliResult<()> {
    let state = studio.state();
    output.header("Hexagon:")?;
    for entry in studio.arrangement().entries() {
        let marker = if state.hovered() == Some(entry.port) { ">" } else { " " };
        output.print(&format!(
            " {marker} {}  {}",
            entry.port,
            entry.adapter.as_deref().unwrap_or("(empty)")
        ))?;
    }

    let available: Vec<_> = state
        .catalog()
        .available()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    output.print(&format!(
        "   catalog: {}",
        if available.is_empty() { "(empty)".to_string() } else { available.join(", ") }
    ))?;

    if !state.orphaned().is_empty() {
        let orphaned: Vec<_> = state.orphaned().iter().map(|a| a.id.as_str()).collect();
        output.warning(&format!("overwritten: {}", orphaned.join(", ")))?;
    }
    if let Some(active) = state.active() {
        output.info(&format!("holding {}", active.id))?;
    }
    Ok(())
}

fn print_inspector(view: &InspectorView, output: &OutputManager) -> CliResult<()> {
    match view {
        InspectorView::Empty {
            title,
            prompt,
            body,
        } => {
            output.header(title)?;
            output.muted(&format!("  {prompt}"))?;
            output.muted(&format!("  {body}"))?;
        }
        InspectorView::Details {
            title,
            description,
            role,
            details,
            example_layout,
            can_save,
        } => {
            output.header(&format!("{title} [{role}]"))?;
            output.print(&format!("  {description}"))?;
            if !details.is_empty() {
                output.print("")?;
                output.block(details, 2)?;
            }
            if !example_layout.is_empty() {
                output.print("")?;
                output.block(example_layout, 4)?;
            }
            if *can_save {
                output.muted("  (use --save to store this arrangement)")?;
            }
        }
    }
    Ok(())
}

// ── layout ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct LayoutReport<'a> {
    layout: &'a HexagonLayout,
    center: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    at: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit: Option<Option<PortId>>,
}

fn layout(args: LayoutArgs, output: &OutputManager) -> CliResult<()> {
    let layout = HexagonLayout::new(args.width, args.height);
    let hit = args.at.map(|point| hit_test(&layout, point));

    if output.is_json() {
        return output.json(&LayoutReport {
            layout: &layout,
            center: layout.center(),
            at: args.at,
            hit,
        });
    }

    output.header(&format!("Hexagon {}x{}", layout.width, layout.height))?;
    for target in layout.targets() {
        let b = target.bounds;
        output.print(&format!(
            "  {}  x {:>6.1}..{:<6.1} y {:>6.1}..{:<6.1}",
            target.port,
            b.x,
            b.x + b.width,
            b.y,
            b.y + b.height
        ))?;
    }

    if let (Some(point), Some(hit)) = (args.at, hit) {
        output.print("")?;
        match hit {
            Some(port) => output.success(&format!("({}, {}) is over {port}", point.x, point.y))?,
            None => output.info(&format!("({}, {}) is over no port", point.x, point.y))?,
        }
    }
    Ok(())
}

/// Port under `point`. Ports accept every adapter, so any payload will do.
fn hit_test(layout: &HexagonLayout, point: Point) -> Option<PortId> {
    let payload = BUILTIN_ADAPTERS[0].to_adapter();
    layout.tracker().hit_test(point, &payload)
}

// ── interactive ───────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{FuzzySelect, Select, theme::ColorfulTheme};

    use archreport_core::{
        application::StudioService,
        domain::{AdapterId, PortId, Transition},
    };

    use super::{describe, print_hexagon, print_transition};
    use crate::{
        error::{CliError, CliResult},
        output::OutputManager,
    };

    /// Prompt for drops until the user picks "Done" or presses Esc.
    pub fn run(studio: &mut StudioService, output: &OutputManager) -> CliResult<Vec<Transition>> {
        let theme = ColorfulTheme::default();
        let mut transitions = Vec::new();

        loop {
            let ids: Vec<AdapterId> = studio
                .state()
                .catalog()
                .available()
                .iter()
                .map(|a| a.id.clone())
                .collect();
            let mut items: Vec<String> = studio
                .state()
                .catalog()
                .available()
                .iter()
                .map(|a| format!("{} ({})", a.title, a.id))
                .collect();
            items.push("Reset".into());
            items.push("Done".into());

            let choice = FuzzySelect::with_theme(&theme)
                .with_prompt("Adapter to drag")
                .items(&items)
                .default(0)
                .interact_opt()
                .map_err(prompt_failed)?;

            let Some(choice) = choice else { break };
            if choice == ids.len() {
                let t = studio.reset();
                print_transition(&t, output)?;
                transitions.push(t);
                continue;
            }
            if choice > ids.len() {
                break;
            }

            let port = pick_port(&theme, studio)?;
            for t in studio.drop_adapter(ids[choice].clone(), port) {
                if !matches!(t, Transition::Hovered { .. }) {
                    print_transition(&t, output)?;
                }
                tracing::debug!(transition = %describe(&t), "Interactive drop");
                transitions.push(t);
            }
            print_hexagon(studio, output)?;
        }

        Ok(transitions)
    }

    fn pick_port(theme: &ColorfulTheme, studio: &StudioService) -> CliResult<Option<PortId>> {
        let arrangement = studio.arrangement();
        let mut items: Vec<String> = PortId::ALL
            .iter()
            .map(|&p| format!("{p}  {}", arrangement.adapter_at(p).unwrap_or("(empty)")))
            .collect();
        items.push("Outside the hexagon".into());

        let choice = Select::with_theme(theme)
            .with_prompt("Drop on")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_failed)?;

        Ok(choice.and_then(|i| PortId::ALL.get(i).copied()))
    }

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::InvalidInput {
            message: "interactive prompt failed".into(),
            source: Some(Box::new(e)),
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod interactive {
    use archreport_core::{application::StudioService, domain::Transition};

    use crate::{
        error::{CliError, CliResult},
        output::OutputManager,
    };

    pub fn run(_studio: &mut StudioService, _output: &OutputManager) -> CliResult<Vec<Transition>> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archreport_core::domain::AdapterId;

    fn id(s: &str) -> AdapterId {
        AdapterId::new(s)
    }

    #[test]
    fn describes_displacement() {
        let t = Transition::Committed {
            port: PortId::Port2,
            adapter: id("adapter-2"),
            displaced: Some(Displacement::Returned(id("adapter-1"))),
        };
        assert_eq!(
            describe(&t),
            "placed adapter-2 in port-2; adapter-1 returned to the catalog"
        );
    }

    #[test]
    fn describes_rejection() {
        let t = Transition::Rejected {
            port: PortId::Port2,
            adapter: id("adapter-2"),
            occupant: id("adapter-1"),
        };
        assert_eq!(
            describe(&t),
            "port-2 is taken by adapter-1; adapter-2 stays in the catalog"
        );
    }

    #[test]
    fn describes_ignored_events() {
        let t = Transition::Ignored {
            reason: IgnoreReason::NoActiveDrag,
        };
        assert_eq!(describe(&t), "ignored: nothing is being dragged");
    }

    #[test]
    fn anchor_hits_its_port_and_center_hits_none() {
        let layout = HexagonLayout::default();
        for port in PortId::ALL {
            assert_eq!(hit_test(&layout, layout.anchor(port)), Some(port));
        }
        assert_eq!(hit_test(&layout, layout.center()), None);
    }
}
