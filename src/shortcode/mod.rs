//! Shortcode invocation surface.
//!
//! A shortcode is a named operation taking keyword arguments and returning
//! zero or more HTML blocks to splice into the surrounding document. Load
//! failures are logged as a single warning and produce no blocks.

pub mod document;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::config::loader::{ContentLoader, LoadWarning};
use crate::content::research::normalize_topics;
use crate::content::timeline::normalize_entries;
use crate::error::StepcardsError;
use crate::render::cards::render_cards;
use crate::render::session::RenderSession;
use crate::render::stepper::render_stepper;

pub use document::expand_document;

/// Keyword arguments of one invocation.
pub type Kwargs = BTreeMap<String, String>;

/// The named shortcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcode {
    /// Career timeline stepper.
    Trajectory,
    /// Research topic card carousel.
    Research,
}

/// One block of HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock(pub String);

impl HtmlBlock {
    /// Returns the markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full outcome of an invocation: the blocks plus anything that was logged.
#[derive(Debug, Default)]
pub struct Invocation {
    /// Blocks to splice, markup first, then assets if injected.
    pub blocks: Vec<HtmlBlock>,

    /// Warnings emitted while loading.
    pub warnings: Vec<LoadWarning>,

    /// Data file that was read.
    pub source: Option<PathBuf>,

    /// Number of records rendered.
    pub records: usize,
}

/// Summary produced by `stepcards check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Shortcode name.
    pub shortcode: &'static str,

    /// Path that was requested.
    pub requested: String,

    /// Path that was read, if any.
    pub source: Option<String>,

    /// Number of normalized records.
    pub records: usize,

    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Shortcode {
    /// Every shortcode, in documentation order.
    pub const ALL: [Self; 2] = [Self::Trajectory, Self::Research];

    /// Shortcode name as written in documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trajectory => "trajectory",
            Self::Research => "research",
        }
    }

    /// Data path used when no `path` argument is given.
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Trajectory => "data/trajectory.yml",
            Self::Research => "data/research.yml",
        }
    }

    /// Base for element ids in the rendered markup.
    const fn id_base(self) -> &'static str {
        match self {
            Self::Trajectory => "stepper",
            Self::Research => "research",
        }
    }

    /// Invoke the shortcode and return its blocks.
    #[must_use]
    pub fn invoke(self, session: &mut RenderSession, kwargs: &Kwargs) -> Vec<HtmlBlock> {
        self.invoke_with_report(session, kwargs).blocks
    }

    /// Invoke the shortcode, returning blocks along with load diagnostics.
    ///
    /// Each load warning is logged once at WARN level, tagged with the
    /// shortcode name.
    pub fn invoke_with_report(self, session: &mut RenderSession, kwargs: &Kwargs) -> Invocation {
        for key in kwargs.keys().filter(|k| k.as_str() != "path") {
            tracing::debug!(component = self.name(), argument = %key, "ignoring unknown argument");
        }

        let path = self.requested_path(kwargs);
        let loaded = ContentLoader::new(session.settings()).load(Path::new(path), self.name());
        for warning in &loaded.warnings {
            tracing::warn!(
                component = self.name(),
                location = warning.location.as_deref().unwrap_or_default(),
                "[{}] {}",
                self.name(),
                warning.message
            );
        }

        let (markup, records) = match self {
            Self::Trajectory => {
                let entries = normalize_entries(&loaded.records);
                if entries.is_empty() {
                    (String::new(), 0)
                } else {
                    let prefix = session.next_id_prefix(self.id_base());
                    (render_stepper(&entries, &prefix), entries.len())
                }
            }
            Self::Research => {
                let topics = normalize_topics(&loaded.records);
                if topics.is_empty() {
                    (String::new(), 0)
                } else {
                    let prefix = session.next_id_prefix(self.id_base());
                    (render_cards(&topics, &prefix), topics.len())
                }
            }
        };

        let mut blocks = Vec::new();
        if !markup.is_empty() {
            blocks.push(HtmlBlock(markup));
            if let Some(assets) = session.take_assets() {
                blocks.push(HtmlBlock(assets));
            }
        }

        tracing::debug!(
            component = self.name(),
            records,
            blocks = blocks.len(),
            "rendered shortcode"
        );

        Invocation {
            blocks,
            warnings: loaded.warnings,
            source: loaded.source,
            records,
        }
    }

    /// Load and normalize without rendering or touching any session state.
    #[must_use]
    pub fn check(self, session: &RenderSession, kwargs: &Kwargs) -> CheckReport {
        let requested = self.requested_path(kwargs);
        let loaded =
            ContentLoader::new(session.settings()).load(Path::new(requested), self.name());
        let records = match self {
            Self::Trajectory => normalize_entries(&loaded.records).len(),
            Self::Research => normalize_topics(&loaded.records).len(),
        };

        CheckReport {
            shortcode: self.name(),
            requested: requested.to_string(),
            source: loaded.source.map(|p| p.display().to_string()),
            records,
            warnings: loaded.warnings.into_iter().map(|w| w.message).collect(),
        }
    }

    fn requested_path(self, kwargs: &Kwargs) -> &str {
        kwargs
            .get("path")
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.default_path())
    }
}

impl FromStr for Shortcode {
    type Err = StepcardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sc| sc.name() == s)
            .ok_or_else(|| StepcardsError::UnknownShortcode(s.to_string()))
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
