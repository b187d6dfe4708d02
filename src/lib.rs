//! `stepcards` - timeline stepper and research card shortcodes
//!
//! Turns YAML data files into accessible, navigable HTML fragments for a
//! static site build. Each shortcode loads its data file with path
//! fallback, normalizes and escapes the records, sorts them, and renders
//! `tablist`/`tabpanel` markup. A behavior and style block is appended once
//! per [`render::session::RenderSession`].

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod observability;
pub mod render;
pub mod shortcode;

pub use error::{ExitCode, StepcardsError};
pub use render::session::RenderSession;
pub use shortcode::{HtmlBlock, Kwargs, Shortcode, expand_document};
