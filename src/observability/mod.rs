//! Observability module
//!
//! Logging for shortcode rendering. Warnings about missing or malformed data
//! files are the main signal; everything else is debug detail.

pub mod logging;

pub use logging::init_logging;
