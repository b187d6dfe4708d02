//! Text primitives shared by the normalizers: HTML escaping, slugification
//! and year extraction.
//!
//! Escaped output is carried in [`EscapedText`], which can only be built by
//! [`escape_html`]. Renderers accept nothing else, so a string is escaped
//! exactly once on its way from YAML to markup.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// First run of exactly four ASCII digits; letters may touch it on either
/// side, longer digit runs never match.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("valid regex"));

/// Text that has been HTML-escaped once and is safe to emit verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EscapedText(String);

impl EscapedText {
    /// Returns the escaped markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the escaped text is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fragment of trusted HTML produced by the Markdown converter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    /// Wraps converter output. Callers must only pass generated markup.
    pub(crate) const fn from_generated(html: String) -> Self {
        Self(html)
    }

    /// Returns the markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> EscapedText {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    EscapedText(out)
}

/// Slugify free text into a DOM-safe identifier.
///
/// # Rules
/// 1. Lowercase ASCII letters
/// 2. Replace every run of non-alphanumeric characters with one `-`
/// 3. Trim leading/trailing `-`
/// 4. If the result is empty, use `step-{index}`
#[must_use]
pub fn slugify(text: &str, index: usize) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        format!("step-{index}")
    } else {
        slug
    }
}

/// Extract the first four-digit year from a period string.
///
/// Returns an empty string when no year is present.
#[must_use]
pub fn extract_year(period: &str) -> String {
    YEAR_RE
        .captures(period)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}
