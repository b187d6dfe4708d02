//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod expand;
pub mod render;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::StepcardsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), StepcardsError> {
    let settings = Settings::with_content_dir(cli.content_dir);

    match cli.command {
        Commands::Render(args) => render::run(&args, settings),
        Commands::Expand(args) => expand::run(&args, settings),
        Commands::Check(args) => check::run(&args, settings),
        Commands::Version(args) => Ok(version::run(&args)?),
    }
}
