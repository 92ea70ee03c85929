//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use archreport_core::domain::{
    AdapterId, DropPolicy, ErrorHandling, Point, PortId, ResourceCategory,
    pointer::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archreport",
    bin_name = "archreport",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Architecture patterns report, hexagon studio and service object generator",
    long_about = "archreport serves the architecture patterns report from the terminal: \
                  read and bookmark sections, arrange adapters around the hexagon, \
                  and generate service object skeletons.",
    after_help = "EXAMPLES:\n\
        \x20 archreport report list\n\
        \x20 archreport studio play --drop adapter-3=port-4 --save\n\
        \x20 archreport generate --class-name CancelSubscription --error-handling exceptions\n\
        \x20 archreport completions bash > /usr/share/bash-completion/completions/archreport",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Arrange adapters around the hexagon.
    #[command(
        subcommand,
        about = "Hexagon studio",
        after_help = "EXAMPLES:\n\
            \x20 archreport studio adapters\n\
            \x20 archreport studio play --drop adapter-1=port-2 --drop adapter-2=port-2 --policy reject\n\
            \x20 archreport studio layout --at 160,40"
    )]
    Studio(StudioCommands),

    /// Read and bookmark report sections.
    #[command(
        subcommand,
        visible_alias = "r",
        about = "Report sections",
        after_help = "EXAMPLES:\n\
            \x20 archreport report list\n\
            \x20 archreport report search linting\n\
            \x20 archreport report bookmark service-objects --note \"compare with interactors\""
    )]
    Report(ReportCommands),

    /// Browse the pattern timeline.
    #[command(subcommand, about = "Pattern timeline")]
    Patterns(PatternCommands),

    /// Browse the resource library.
    #[command(
        about = "Resource library",
        after_help = "EXAMPLES:\n\
            \x20 archreport resources\n\
            \x20 archreport resources --category tooling\n\
            \x20 archreport resources show rspec-tool"
    )]
    Resources(ResourcesArgs),

    /// Generate a service object skeleton.
    #[command(
        visible_alias = "gen",
        about = "Generate a service object",
        after_help = "EXAMPLES:\n\
            \x20 archreport generate\n\
            \x20 archreport generate --class-name RenewPlan --no-email\n\
            \x20 archreport generate --error-handling exceptions --save"
    )]
    Generate(GenerateArgs),

    /// Inspect stored bookmarks.
    #[command(subcommand, about = "Stored bookmarks")]
    Bookmarks(BookmarkCommands),

    /// Initialise an archreport configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 archreport init           # platform config location\n\
            \x20 archreport init --local   # ./.archreport.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archreport completions bash > ~/.local/share/bash-completion/completions/archreport\n\
            \x20 archreport completions zsh  > ~/.zfunc/_archreport\n\
            \x20 archreport completions fish > ~/.config/fish/completions/archreport.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the archreport configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 archreport config get studio.drop_policy\n\
            \x20 archreport config list\n\
            \x20 archreport config path"
    )]
    Config(ConfigCommands),
}

// ── studio ────────────────────────────────────────────────────────────────────

/// Subcommands for `archreport studio`.
#[derive(Debug, Subcommand)]
pub enum StudioCommands {
    /// List the adapters available for dragging.
    Adapters {
        /// Load the catalog from a TOML file instead of the built-in one.
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Run a studio session and print the resulting arrangement.
    Play(PlayArgs),

    /// Print port drop zones and hit-test a point.
    Layout(LayoutArgs),
}

/// Arguments for `archreport studio play`.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Drag an adapter onto a port. Repeatable; applied in order.
    ///
    /// `adapter-3=port-4` drops onto a port, `adapter-3=` or
    /// `adapter-3=none` drops outside the hexagon.
    #[arg(
        short = 'd',
        long = "drop",
        value_name = "ADAPTER=PORT",
        value_parser = parse_drop,
        help = "Drag ADAPTER onto PORT (repeatable)"
    )]
    pub drops: Vec<DropSpec>,

    /// After the drops, pick this adapter up and keep holding it.
    #[arg(long = "pick", value_name = "ADAPTER")]
    pub pick: Option<AdapterId>,

    /// While holding the picked adapter, hover over this port.
    #[arg(
        long = "hover",
        value_name = "PORT",
        requires = "pick",
        value_parser = parse_port
    )]
    pub hover: Option<PortId>,

    /// What happens when dropping onto an occupied port.
    #[arg(long = "policy", value_enum, help = "Occupied-port policy (default from config)")]
    pub policy: Option<PolicyArg>,

    /// Save the final arrangement as a bookmark.
    #[arg(short = 's', long = "save", help = "Save the arrangement as a bookmark")]
    pub save: bool,

    /// Load the catalog from a TOML file instead of the built-in one.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Pick adapters and ports from prompts instead of `--drop`.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["drops", "pick"],
        help = "Choose drops interactively"
    )]
    pub interactive: bool,
}

/// One `--drop` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSpec {
    pub adapter: AdapterId,
    /// `None` drops outside every port.
    pub port: Option<PortId>,
}

fn parse_drop(raw: &str) -> Result<DropSpec, String> {
    let (adapter, port) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ADAPTER=PORT, got '{raw}'"))?;

    let adapter = adapter.trim();
    if adapter.is_empty() {
        return Err(format!("missing adapter id in '{raw}'"));
    }

    let port = match port.trim() {
        "" | "none" | "outside" => None,
        p => Some(parse_port(p)?),
    };

    Ok(DropSpec {
        adapter: AdapterId::new(adapter),
        port,
    })
}

fn parse_port(raw: &str) -> Result<PortId, String> {
    raw.parse::<PortId>().map_err(|e| e.to_string())
}

/// Arguments for `archreport studio layout`.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Hexagon container width.
    #[arg(long = "width", value_name = "PX", default_value_t = DEFAULT_WIDTH)]
    pub width: f32,

    /// Hexagon container height.
    #[arg(long = "height", value_name = "PX", default_value_t = DEFAULT_HEIGHT)]
    pub height: f32,

    /// Report which port a pointer at X,Y would hover.
    #[arg(long = "at", value_name = "X,Y", value_parser = parse_point)]
    pub at: Option<Point>,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{raw}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad Y: {e}"))?;
    Ok(Point::new(x, y))
}

// ── report / patterns / resources ─────────────────────────────────────────────

/// Subcommands for `archreport report`.
#[derive(Debug, Subcommand)]
pub enum ReportCommands {
    /// List every section with read time and bookmark state.
    #[command(visible_alias = "ls")]
    List,
    /// Section ids and titles only, in report order.
    Toc,
    /// Print one section.
    Show {
        /// Section id, e.g. `service-objects`.
        id: String,
    },
    /// Find sections whose title or excerpt contains QUERY.
    Search {
        /// Case-insensitive text to look for.
        query: String,
    },
    /// Bookmark a section.
    Bookmark {
        /// Section id.
        id: String,
        /// Free-form note stored with the bookmark.
        #[arg(short = 'n', long = "note")]
        note: Option<String>,
    },
}

/// Subcommands for `archreport patterns`.
#[derive(Debug, Subcommand)]
pub enum PatternCommands {
    /// List patterns in timeline order.
    #[command(visible_alias = "ls")]
    List,
    /// Print one pattern with its code samples.
    Show { id: String },
    /// Bookmark a pattern.
    Bookmark { id: String },
}

/// Arguments for `archreport resources`.
#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct ResourcesArgs {
    /// Only show one library tab.
    #[arg(short = 'c', long = "category", value_enum)]
    pub category: Option<CategoryArg>,

    #[command(subcommand)]
    pub command: Option<ResourceCommands>,
}

#[derive(Debug, Subcommand)]
pub enum ResourceCommands {
    /// Print one resource.
    Show { id: String },
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `archreport generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Ruby class name (default from config).
    #[arg(short = 'n', long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// How the generated service reports failure.
    #[arg(
        short = 'e',
        long = "error-handling",
        value_enum,
        default_value = "result-monad"
    )]
    pub error_handling: ErrorHandlingArg,

    /// Omit the `ActiveRecord::Base.transaction` block.
    #[arg(long = "no-transaction")]
    pub no_transaction: bool,

    /// Omit the mailer call.
    #[arg(long = "no-email")]
    pub no_email: bool,

    /// Save the snippet as a bookmark.
    #[arg(short = 's', long = "save")]
    pub save: bool,
}

// ── bookmarks ─────────────────────────────────────────────────────────────────

/// Subcommands for `archreport bookmarks`.
#[derive(Debug, Subcommand)]
pub enum BookmarkCommands {
    /// List stored bookmarks, oldest first.
    #[command(visible_alias = "ls")]
    List,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `archreport init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.archreport.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archreport completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `archreport config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `studio.drop_policy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// `--policy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PolicyArg {
    Displace,
    Reject,
    Overwrite,
}

impl From<PolicyArg> for DropPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Displace => Self::Displace,
            PolicyArg::Reject => Self::Reject,
            PolicyArg::Overwrite => Self::Overwrite,
        }
    }
}

/// `--error-handling` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ErrorHandlingArg {
    #[value(alias = "result")]
    ResultMonad,
    #[value(alias = "raise")]
    Exceptions,
}

impl From<ErrorHandlingArg> for ErrorHandling {
    fn from(arg: ErrorHandlingArg) -> Self {
        match arg {
            ErrorHandlingArg::ResultMonad => Self::ResultMonad,
            ErrorHandlingArg::Exceptions => Self::Exceptions,
        }
    }
}

/// `--category` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CategoryArg {
    CaseStudies,
    #[value(alias = "tools")]
    Tooling,
    Cheatsheets,
}

impl From<CategoryArg> for ResourceCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::CaseStudies => Self::CaseStudies,
            CategoryArg::Tooling => Self::Tooling,
            CategoryArg::Cheatsheets => Self::Cheatsheets,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
