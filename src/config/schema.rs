//! Raw record schemas for the YAML data files.
//!
//! Every field is an optional untyped [`Value`] so that a wrong type in one
//! field never rejects the record. The normalizers in [`crate::content`]
//! turn these into the typed, escaped model in a single pass.

use serde::Deserialize;
use serde_yaml::Value;

/// One raw career timeline entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTimelineEntry {
    /// Identifier, slugified into the DOM id.
    pub id: Option<Value>,

    /// Sort key; parsed leniently.
    pub order: Option<Value>,

    /// Short label shown on the step control.
    pub label: Option<Value>,

    /// Institution or location.
    pub place: Option<Value>,

    /// Free-text period, e.g. `2019 – 2021`.
    pub period: Option<Value>,

    /// Panel heading.
    pub heading: Option<Value>,

    /// Panel summary paragraph.
    pub summary: Option<Value>,

    /// Bullet points; only a YAML sequence is honoured.
    pub bullets: Option<Value>,
}

/// One raw research topic card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawResearchTopic {
    /// Card title.
    pub title: Option<Value>,

    /// Text on the indicator control.
    pub indicator_label: Option<Value>,

    /// Highlight line under the title.
    pub highlight: Option<Value>,

    /// Figure image path.
    pub figure: Option<Value>,

    /// Figure alt text.
    pub figure_alt: Option<Value>,

    /// Markdown paragraphs; only a YAML sequence is honoured.
    pub body: Option<Value>,

    /// Action buttons; only a YAML sequence is honoured.
    pub buttons: Option<Value>,
}

/// One raw call-to-action button on a topic card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawButton {
    /// Button text.
    pub label: Option<Value>,

    /// Link target.
    pub href: Option<Value>,

    /// CSS classes, as a string or a list of strings.
    pub classes: Option<Value>,
}

/// Read a scalar field as trimmed text.
///
/// Strings, numbers and booleans are accepted; mappings, sequences, null and
/// blank strings yield `None`.
#[must_use]
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Tagged(tagged) => return scalar_text(Some(&tagged.value)),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a field as a number.
///
/// Accepts YAML numbers and numeric strings; non-finite values are rejected.
#[must_use]
pub fn lenient_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Tagged(tagged) => return lenient_number(Some(&tagged.value)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Return the items of a field only if it is a proper YAML sequence.
#[must_use]
pub fn sequence_items(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Sequence(items)) => items,
        _ => &[],
    }
}
