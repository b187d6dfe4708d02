//! Expansion of shortcode invocations inside a page.
//!
//! Recognises `{{< name key="value" ... >}}`. Known names are replaced by
//! their blocks joined with newlines; unknown names are left as written so
//! other filters in the pipeline can handle them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::render::session::RenderSession;
use crate::shortcode::{HtmlBlock, Kwargs, Shortcode};

/// `{{< name args >}}`
static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{<\s*([A-Za-z][\w-]*)((?:\s+[^>]*?)?)\s*>\}\}").expect("valid regex")
});

/// `key="value"`, `key='value'` or `key=value`
static KWARG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|(\S+))"#).expect("valid regex")
});

/// Parse the argument part of an invocation. Positional arguments are
/// dropped; a repeated key keeps its last value.
#[must_use]
pub fn parse_kwargs(args: &str) -> Kwargs {
    KWARG_RE
        .captures_iter(args)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            (caps[1].to_string(), value.to_string())
        })
        .collect()
}

/// Expand every known shortcode in `text` using one shared session.
#[must_use]
pub fn expand_document(session: &mut RenderSession, text: &str) -> String {
    SHORTCODE_RE
        .replace_all(text, |caps: &Captures| {
            let Ok(shortcode) = caps[1].parse::<Shortcode>() else {
                tracing::debug!(name = &caps[1], "leaving unknown shortcode untouched");
                return caps[0].to_string();
            };
            let kwargs = parse_kwargs(&caps[2]);
            shortcode
                .invoke(session, &kwargs)
                .iter()
                .map(HtmlBlock::as_str)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .into_owned()
}
