//! `check` command handler.
//!
//! Loads and normalizes one data file without rendering, then reports the
//! resolved path, record count and warnings.

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::settings::Settings;
use crate::error::StepcardsError;
use crate::render::session::RenderSession;
use crate::shortcode::{CheckReport, Kwargs, Shortcode};

/// Execute the check command.
///
/// # Errors
///
/// Returns `StepcardsError::CheckFailed` if loading produced warnings.
pub fn run(args: &CheckArgs, settings: Settings) -> Result<(), StepcardsError> {
    let session = RenderSession::new(settings);

    let mut kwargs = Kwargs::new();
    if let Some(ref path) = args.path {
        kwargs.insert("path".to_string(), path.clone());
    }

    let report = Shortcode::from(args.shortcode).check(&session, &kwargs);

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.warnings.is_empty() {
        Ok(())
    } else {
        Err(StepcardsError::CheckFailed {
            shortcode: report.shortcode.to_string(),
            count: report.warnings.len(),
        })
    }
}

fn print_human(report: &CheckReport) {
    println!("shortcode: {}", report.shortcode);
    println!("requested: {}", report.requested);
    println!(
        "source:    {}",
        report.source.as_deref().unwrap_or("(not found)")
    );
    println!("records:   {}", report.records);
    for warning in &report.warnings {
        println!("WARNING: {warning}");
    }
}
