//! `expand` command handler.
//!
//! Reads a document, expands every shortcode with one shared render session
//! and writes the result.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::args::ExpandArgs;
use crate::config::settings::Settings;
use crate::error::StepcardsError;
use crate::render::session::RenderSession;
use crate::shortcode::expand_document;

/// Execute the expand command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written. Data file problems inside shortcodes are only logged.
pub fn run(args: &ExpandArgs, mut settings: Settings) -> Result<(), StepcardsError> {
    settings.inject_assets = !args.no_assets;
    let mut session = RenderSession::new(settings);

    let input = read_input(args.input.as_deref())?;
    let output = expand_document(&mut session, &input);

    if let Some(ref path) = args.output {
        fs::write(path, &output).map_err(|e| {
            StepcardsError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {e}", path.display()),
            ))
        })?;
        tracing::info!(path = %path.display(), "wrote expanded document");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, StepcardsError> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|e| {
            StepcardsError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", p.display()),
            ))
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
