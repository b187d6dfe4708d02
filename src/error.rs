//! Error types for `stepcards`
//!
//! Shortcode invocations never surface errors to their caller: load failures
//! are turned into warnings and an empty render. The types here cover the
//! loader's internal failure modes and the CLI's own I/O.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `stepcards` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (including `check` finding warnings)
    pub const ERROR: i32 = 1;

    /// I/O error (input document unreadable, output unwritable)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown shortcode)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for CLI operations.
#[derive(Debug, Error)]
pub enum StepcardsError {
    /// Unknown shortcode name on the command line
    #[error("unknown shortcode '{0}' (expected one of: trajectory, research)")]
    UnknownShortcode(String),

    /// `check` found problems in the data file
    #[error("{count} warning(s) while checking {shortcode}")]
    CheckFailed {
        /// Shortcode that was checked
        shortcode: String,
        /// Number of warnings produced
        count: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StepcardsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CheckFailed { .. } | Self::Json(_) => ExitCode::ERROR,
            Self::UnknownShortcode(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Loader Errors
// ============================================================================

/// Failure modes of the content loader.
///
/// Each variant becomes exactly one warning line when a shortcode degrades
/// to an empty render.
#[derive(Debug, Error)]
pub enum LoadError {
    /// None of the candidate paths could be opened
    #[error("data file not found (tried: {})", display_paths(.tried))]
    NotFound {
        /// Every candidate path that was attempted, in order
        tried: Vec<PathBuf>,
    },

    /// The file exists but could not be read as UTF-8 text
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// Path to the data file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// The document parsed to nothing
    #[error("data file is empty: {path}")]
    Empty {
        /// Path to the data file
        path: PathBuf,
    },

    /// The document holds no list of records
    #[error("no list of records in {path} (expected a top-level list or a '{key}'/'items' key)")]
    NoRecords {
        /// Path to the data file
        path: PathBuf,
        /// Component key that was looked up in a mapping document
        key: String,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
