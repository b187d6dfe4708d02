//! Career timeline entries: normalization and ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_yaml::Value;

use crate::config::schema::{RawTimelineEntry, lenient_number, scalar_text, sequence_items};
use crate::content::text::{EscapedText, escape_html, extract_year, slugify};

/// A normalized timeline step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    /// Unique DOM-safe slug.
    pub id: String,

    /// Sort key.
    pub order: f64,

    /// Control label.
    pub label: Option<EscapedText>,

    /// Institution or location.
    pub place: Option<EscapedText>,

    /// Period as written.
    pub period: Option<EscapedText>,

    /// Four-digit start year taken from the period, or empty.
    pub year: String,

    /// Panel heading.
    pub heading: Option<EscapedText>,

    /// Panel summary.
    pub summary: Option<EscapedText>,

    /// Bullet points.
    pub bullets: Vec<EscapedText>,
}

impl TimelineEntry {
    /// Normalize one raw record.
    ///
    /// `position` is the 1-based position in the source list; it backs the
    /// fallback slug and the fallback order.
    #[must_use]
    pub fn from_raw(raw: &RawTimelineEntry, position: usize) -> Self {
        let id = scalar_text(raw.id.as_ref())
            .map_or_else(|| format!("step-{position}"), |id| slugify(&id, position));

        #[allow(clippy::cast_precision_loss)]
        let order = lenient_number(raw.order.as_ref()).unwrap_or(position as f64);

        let period_text = scalar_text(raw.period.as_ref());
        let year = period_text.as_deref().map(extract_year).unwrap_or_default();

        Self {
            id,
            order,
            label: escaped_field(raw.label.as_ref()),
            place: escaped_field(raw.place.as_ref()),
            period: period_text.as_deref().map(escape_html),
            year,
            heading: escaped_field(raw.heading.as_ref()),
            summary: escaped_field(raw.summary.as_ref()),
            bullets: sequence_items(raw.bullets.as_ref())
                .iter()
                .filter_map(|item| escaped_field(Some(item)))
                .collect(),
        }
    }

    /// Text used to break order ties.
    fn sort_label(&self) -> &str {
        self.label.as_ref().map_or("", EscapedText::as_str)
    }
}

/// Normalize raw records into sorted timeline entries.
///
/// Records that fail to deserialize into the raw schema are skipped. Slugs
/// are made unique within the list before sorting.
#[must_use]
pub fn normalize_entries(records: &[Value]) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            match serde_yaml::from_value::<RawTimelineEntry>(record.clone()) {
                Ok(raw) => Some(TimelineEntry::from_raw(&raw, i + 1)),
                Err(e) => {
                    tracing::debug!(position = i + 1, error = %e, "skipping timeline record");
                    None
                }
            }
        })
        .collect();

    dedupe_ids(&mut entries);
    sort_entries(&mut entries);
    entries
}

/// Sort by ascending order, then ascending escaped label.
pub fn sort_entries(entries: &mut [TimelineEntry]) {
    entries.sort_by(|a, b| compare_entries(a, b));
}

fn compare_entries(a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
    a.order
        .total_cmp(&b.order)
        .then_with(|| a.sort_label().cmp(b.sort_label()))
}

/// Append `-2`, `-3`, ... to repeated slugs, in source order.
fn dedupe_ids(entries: &mut [TimelineEntry]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for entry in entries.iter_mut() {
        let count = seen.entry(entry.id.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            let mut n = *count;
            let mut candidate = format!("{}-{n}", entry.id);
            while seen.contains_key(&candidate) {
                n += 1;
                candidate = format!("{}-{n}", entry.id);
            }
            seen.insert(candidate.clone(), 1);
            entry.id = candidate;
        }
    }
}

fn escaped_field(value: Option<&Value>) -> Option<EscapedText> {
    scalar_text(value).as_deref().map(escape_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(yaml: &str) -> Vec<Value> {
        match serde_yaml::from_str::<Value>(yaml).unwrap() {
            Value::Sequence(items) => items,
            other => panic!("expected list, got {other:?}"),
        }
    }

    fn labels(entries: &[TimelineEntry]) -> Vec<&str> {
        entries.iter().map(TimelineEntry::sort_label).collect()
    }

    #[test]
    fn test_sort_by_order_then_label() {
        let entries = normalize_entries(&records(
            "- {order: 2, label: B}\n- {order: 1, label: A}\n- {order: 1, label: C}\n",
        ));
        assert_eq!(labels(&entries), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_unparsable_order_defaults_to_position() {
        let entries = normalize_entries(&records(
            "- {order: soon, label: First}\n- {order: 1.5, label: Second}\n- {label: Third}\n",
        ));
        assert_eq!(entries[0].order, 1.0);
        assert_eq!(labels(&entries), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_string_order_parsed() {
        let entries = normalize_entries(&records("- {order: ' 10 ', label: A}\n"));
        assert_eq!(entries[0].order, 10.0);
    }

    #[test]
    fn test_empty_id_uses_position() {
        let entries = normalize_entries(&records(
            "- {id: a, order: 1}\n- {id: b, order: 2}\n- {id: '', order: 3}\n",
        ));
        assert_eq!(entries[2].id, "step-3");
    }

    #[test]
    fn test_punctuation_id_uses_position() {
        let entry = TimelineEntry::from_raw(
            &RawTimelineEntry {
                id: Some(Value::String("***".to_string())),
                ..RawTimelineEntry::default()
            },
            4,
        );
        assert_eq!(entry.id, "step-4");
    }

    #[test]
    fn test_id_slugified() {
        let entries = normalize_entries(&records("- {id: 'PhD @ Oxford'}\n"));
        assert_eq!(entries[0].id, "phd-oxford");
    }

    #[test]
    fn test_duplicate_ids_made_unique() {
        let entries = normalize_entries(&records(
            "- {id: postdoc, order: 1}\n- {id: Postdoc, order: 2}\n- {id: postdoc-2, order: 3}\n",
        ));
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["postdoc", "postdoc-2", "postdoc-2-2"]);
    }

    #[test]
    fn test_text_fields_escaped_once() {
        let entries = normalize_entries(&records(
            "- label: \"R&D <lab>\"\n  summary: \"It's \\\"great\\\"\"\n",
        ));
        let entry = &entries[0];
        assert_eq!(entry.label.as_ref().unwrap().as_str(), "R&amp;D &lt;lab&gt;");
        assert_eq!(
            entry.summary.as_ref().unwrap().as_str(),
            "It&#39;s &quot;great&quot;"
        );
    }

    #[test]
    fn test_blank_fields_are_none() {
        let entries = normalize_entries(&records("- {label: A, place: '  ', heading: ~}\n"));
        let entry = &entries[0];
        assert!(entry.place.is_none());
        assert!(entry.heading.is_none());
        assert!(entry.summary.is_none());
    }

    #[test]
    fn test_year_extracted_from_period() {
        let entries = normalize_entries(&records(
            "- {label: A, period: '2019 – 2021'}\n- {label: B, period: ongoing}\n",
        ));
        assert_eq!(entries[0].year, "2019");
        assert_eq!(entries[1].year, "");
    }

    #[test]
    fn test_bullets_only_from_lists() {
        let entries = normalize_entries(&records(
            "- {label: A, bullets: [one, '', 'two & three', {nested: x}]}\n- {label: B, bullets: not a list}\n",
        ));
        let bullets: Vec<&str> = entries[0].bullets.iter().map(EscapedText::as_str).collect();
        assert_eq!(bullets, vec!["one", "two &amp; three"]);
        assert!(entries[1].bullets.is_empty());
    }

    #[test]
    fn test_sort_is_deterministic_for_equal_keys() {
        let mut a = normalize_entries(&records(
            "- {order: 1, label: X}\n- {order: 1, label: X}\n",
        ));
        let ids_before: Vec<String> = a.iter().map(|e| e.id.clone()).collect();
        sort_entries(&mut a);
        let ids_after: Vec<String> = a.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids_before, ids_after);
    }
}
