//! Record normalization
//!
//! Converts raw YAML records into the typed, escaped model used by the
//! renderers.

pub mod research;
pub mod text;
pub mod timeline;

pub use research::{ResearchTopic, normalize_topics};
pub use text::{EscapedText, HtmlFragment, escape_html, extract_year, slugify};
pub use timeline::{TimelineEntry, normalize_entries};
