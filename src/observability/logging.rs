//! Logging initialization for `stepcards`.
//!
//! Everything is logged to stderr through `tracing`. Stdout stays reserved
//! for rendered HTML, so `stepcards render > page.html` never mixes the two.
//! `STEPCARDS_LOG_LEVEL` overrides the `-v` flags with a full filter
//! directive (e.g. `stepcards=debug`).

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ColorChoice, LogFormat};

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "STEPCARDS_LOG_LEVEL";

/// Maps a verbosity level to a tracing directive string.
///
/// Level 0 keeps only warnings, which is where data file problems surface.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter, preferring `STEPCARDS_LOG_LEVEL` when it parses.
fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Whether ANSI colors should be written to stderr.
fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()` so a second call (e.g. from tests) is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = build_filter(verbosity);
    // Module paths only help once debug output is on.
    let show_target = verbosity >= 2;

    match format {
        LogFormat::Human => {
            let ansi = use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .without_time()
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
