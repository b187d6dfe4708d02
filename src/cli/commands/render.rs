//! `render` command handler.
//!
//! Invokes a single shortcode and prints its blocks to stdout. A missing or
//! broken data file still exits 0 with empty output, matching how the
//! shortcode behaves inside a page build.

use std::io::Write;

use crate::cli::args::RenderArgs;
use crate::config::settings::Settings;
use crate::error::StepcardsError;
use crate::render::session::RenderSession;
use crate::shortcode::{Kwargs, Shortcode};

/// Execute the render command.
///
/// # Errors
///
/// Returns an error only if writing to stdout fails.
pub fn run(args: &RenderArgs, mut settings: Settings) -> Result<(), StepcardsError> {
    settings.inject_assets = !args.no_assets;
    let mut session = RenderSession::new(settings);

    let mut kwargs = Kwargs::new();
    if let Some(ref path) = args.path {
        kwargs.insert("path".to_string(), path.clone());
    }

    let blocks = Shortcode::from(args.shortcode).invoke(&mut session, &kwargs);

    let mut stdout = std::io::stdout().lock();
    for block in &blocks {
        writeln!(stdout, "{block}")?;
    }
    stdout.flush()?;
    Ok(())
}
