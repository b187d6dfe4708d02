//! Configuration module
//!
//! Data file loading, the raw record schemas, and build settings.

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{ContentLoader, LoadResult, LoadWarning, parse_records};
pub use settings::Settings;
