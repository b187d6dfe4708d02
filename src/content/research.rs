//! Research topic cards: normalization and Markdown body rendering.

use pulldown_cmark::{Options, Parser, html};
use serde_yaml::Value;

use crate::config::schema::{RawButton, RawResearchTopic, scalar_text, sequence_items};
use crate::content::text::{EscapedText, HtmlFragment, escape_html};

/// Classes applied to a button that does not name its own.
pub const DEFAULT_BUTTON_CLASSES: &str = "btn btn-outline-primary";

/// A normalized topic card.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchTopic {
    /// Card title; `Topic {n}` when absent.
    pub title: EscapedText,

    /// Indicator control text; the title when absent.
    pub indicator_label: EscapedText,

    /// Highlight line.
    pub highlight: Option<EscapedText>,

    /// Figure image.
    pub figure: Option<Figure>,

    /// Body paragraphs rendered from Markdown.
    pub body: Vec<HtmlFragment>,

    /// Call-to-action buttons.
    pub buttons: Vec<TopicButton>,
}

/// Figure image with alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    /// Image path.
    pub src: EscapedText,

    /// Alt text; the card title when absent.
    pub alt: EscapedText,
}

/// A call-to-action link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicButton {
    /// Button text.
    pub label: EscapedText,

    /// Link target.
    pub href: EscapedText,

    /// CSS classes.
    pub classes: EscapedText,
}

impl ResearchTopic {
    /// Normalize one raw record at 1-based `position`.
    #[must_use]
    pub fn from_raw(raw: &RawResearchTopic, position: usize) -> Self {
        let title = escape_html(
            &scalar_text(raw.title.as_ref()).unwrap_or_else(|| format!("Topic {position}")),
        );
        let indicator_label = scalar_text(raw.indicator_label.as_ref())
            .as_deref()
            .map_or_else(|| title.clone(), escape_html);

        let figure = scalar_text(raw.figure.as_ref()).map(|src| Figure {
            src: escape_html(&src),
            alt: scalar_text(raw.figure_alt.as_ref())
                .as_deref()
                .map_or_else(|| title.clone(), escape_html),
        });

        Self {
            indicator_label,
            highlight: scalar_text(raw.highlight.as_ref()).as_deref().map(escape_html),
            figure,
            body: sequence_items(raw.body.as_ref())
                .iter()
                .filter_map(|p| scalar_text(Some(p)))
                .map(|p| markdown_to_html(&p))
                .collect(),
            buttons: sequence_items(raw.buttons.as_ref())
                .iter()
                .filter_map(TopicButton::from_value)
                .collect(),
            title,
        }
    }
}

impl TopicButton {
    /// Build a button from a raw list item; `None` unless both label and
    /// href are present.
    fn from_value(value: &Value) -> Option<Self> {
        let raw: RawButton = serde_yaml::from_value(value.clone()).ok()?;
        let label = scalar_text(raw.label.as_ref())?;
        let href = scalar_text(raw.href.as_ref())?;
        let classes = button_classes(raw.classes.as_ref())
            .unwrap_or_else(|| DEFAULT_BUTTON_CLASSES.to_string());

        Some(Self {
            label: escape_html(&label),
            href: escape_html(&href),
            classes: escape_html(&classes),
        })
    }
}

/// Classes given as a string or a list of strings, joined by spaces.
fn button_classes(value: Option<&Value>) -> Option<String> {
    if let Some(Value::Sequence(items)) = value {
        let joined = items
            .iter()
            .filter_map(|item| scalar_text(Some(item)))
            .collect::<Vec<_>>()
            .join(" ");
        return (!joined.is_empty()).then_some(joined);
    }
    scalar_text(value)
}

/// Render one Markdown paragraph to HTML.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> HtmlFragment {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    HtmlFragment::from_generated(out.trim_end().to_string())
}

/// Normalize raw records into topic cards, keeping source order.
#[must_use]
pub fn normalize_topics(records: &[Value]) -> Vec<ResearchTopic> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            match serde_yaml::from_value::<RawResearchTopic>(record.clone()) {
                Ok(raw) => Some(ResearchTopic::from_raw(&raw, i + 1)),
                Err(e) => {
                    tracing::debug!(position = i + 1, error = %e, "skipping research record");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(yaml: &str) -> Vec<ResearchTopic> {
        match serde_yaml::from_str::<Value>(yaml).unwrap() {
            Value::Sequence(items) => normalize_topics(&items),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_title_placeholder_and_indicator_default() {
        let cards = topics("- {highlight: x}\n- {title: Second}\n");
        assert_eq!(cards[0].title.as_str(), "Topic 1");
        assert_eq!(cards[0].indicator_label.as_str(), "Topic 1");
        assert_eq!(cards[1].indicator_label.as_str(), "Second");
    }

    #[test]
    fn test_indicator_label_escaped() {
        let cards = topics("- {title: A, indicator_label: 'Q&A'}\n");
        assert_eq!(cards[0].indicator_label.as_str(), "Q&amp;A");
    }

    #[test]
    fn test_figure_alt_defaults_to_title() {
        let cards = topics(
            "- {title: 'Fish <3', figure: img/fish.png}\n- {title: B, figure: b.png, figure_alt: Bees}\n- {title: C, figure_alt: orphan}\n",
        );
        let fig = cards[0].figure.as_ref().unwrap();
        assert_eq!(fig.src.as_str(), "img/fish.png");
        assert_eq!(fig.alt.as_str(), "Fish &lt;3");
        assert_eq!(cards[1].figure.as_ref().unwrap().alt.as_str(), "Bees");
        assert!(cards[2].figure.is_none());
    }

    #[test]
    fn test_body_markdown_rendered() {
        let cards = topics("- title: A\n  body:\n    - 'We study **coral** reefs.'\n    - ''\n    - '[Paper](https://example.org/p?a=1&b=2)'\n");
        let body: Vec<&str> = cards[0].body.iter().map(HtmlFragment::as_str).collect();
        assert_eq!(
            body,
            vec![
                "<p>We study <strong>coral</strong> reefs.</p>",
                "<p><a href=\"https://example.org/p?a=1&amp;b=2\">Paper</a></p>",
            ]
        );
    }

    #[test]
    fn test_body_string_is_ignored() {
        let cards = topics("- {title: A, body: 'not a list'}\n");
        assert!(cards[0].body.is_empty());
    }

    #[test]
    fn test_buttons_require_label_and_href() {
        let cards = topics(
            "- title: A\n  buttons:\n    - {label: Paper, href: /p.pdf}\n    - {label: Orphan}\n    - {href: /x}\n    - plain\n",
        );
        assert_eq!(cards[0].buttons.len(), 1);
        let button = &cards[0].buttons[0];
        assert_eq!(button.label.as_str(), "Paper");
        assert_eq!(button.href.as_str(), "/p.pdf");
        assert_eq!(button.classes.as_str(), DEFAULT_BUTTON_CLASSES);
    }

    #[test]
    fn test_button_classes_string_or_list() {
        let cards = topics(
            "- title: A\n  buttons:\n    - {label: One, href: /1, classes: btn-primary}\n    - {label: Two, href: /2, classes: [btn, btn-sm]}\n",
        );
        assert_eq!(cards[0].buttons[0].classes.as_str(), "btn-primary");
        assert_eq!(cards[0].buttons[1].classes.as_str(), "btn btn-sm");
    }

    #[test]
    fn test_markdown_inline_html_passes_through() {
        assert_eq!(
            markdown_to_html("a <em>b</em>").as_str(),
            "<p>a <em>b</em></p>"
        );
    }
}
