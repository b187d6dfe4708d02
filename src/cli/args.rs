//! CLI argument definitions
//!
//! All Clap derive structs for `stepcards` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::settings::{CONTENT_DIR_ENV, DEFAULT_CONTENT_DIR};
use crate::shortcode::Shortcode;

// ============================================================================
// Root CLI
// ============================================================================

/// Timeline stepper and research card shortcodes for static sites.
#[derive(Parser, Debug)]
#[command(name = "stepcards", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output, including warnings.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "STEPCARDS_COLOR")]
    pub color: ColorChoice,

    /// Log line format on stderr.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// Directory that relative data paths fall back to.
    #[arg(long, global = true, default_value = DEFAULT_CONTENT_DIR, env = CONTENT_DIR_ENV)]
    pub content_dir: PathBuf,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one shortcode invocation to stdout.
    Render(RenderArgs),

    /// Expand every shortcode in a document.
    Expand(ExpandArgs),

    /// Load and normalize a data file, reporting problems.
    Check(CheckArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Shortcode to invoke.
    pub shortcode: ShortcodeChoice,

    /// Data file (defaults to the shortcode's conventional path).
    #[arg(short, long)]
    pub path: Option<String>,

    /// Omit the behavior/style block.
    #[arg(long)]
    pub no_assets: bool,
}

/// Arguments for `expand`.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Input document; reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the behavior/style block.
    #[arg(long)]
    pub no_assets: bool,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Shortcode whose data file is checked.
    pub shortcode: ShortcodeChoice,

    /// Data file (defaults to the shortcode's conventional path).
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Shortcode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShortcodeChoice {
    /// Career timeline stepper.
    Trajectory,
    /// Research topic cards.
    Research,
}

impl From<ShortcodeChoice> for Shortcode {
    fn from(choice: ShortcodeChoice) -> Self {
        match choice {
            ShortcodeChoice::Trajectory => Self::Trajectory,
            ShortcodeChoice::Research => Self::Research,
        }
    }
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}
