//! Research card carousel markup.
//!
//! Indicator buttons form a `tablist`; each card is a `tabpanel` with
//! previous/next links naming the neighbouring card's title. Neighbours wrap
//! around at both ends.

use crate::content::research::ResearchTopic;
use crate::render::navigation::{ActiveIndex, NavigationMode};

/// Render topic cards in order. Returns an empty string for no topics.
#[must_use]
pub fn render_cards(topics: &[ResearchTopic], prefix: &str) -> String {
    let Some(state) = ActiveIndex::new(topics.len(), NavigationMode::Wrap) else {
        return String::new();
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "<div class=\"research-carousel\" id=\"{prefix}\" data-research data-active-index=\"{}\">",
        state.index()
    ));

    lines.push(
        "<div class=\"research-indicators\" role=\"tablist\" aria-label=\"Research topics\">"
            .to_string(),
    );
    for (i, topic) in topics.iter().enumerate() {
        let active = state.is_active(i);
        lines.push(format!(
            "<button type=\"button\" class=\"research-indicator{}\" role=\"tab\" id=\"{prefix}-tab-{n}\" aria-controls=\"{prefix}-card-{n}\" aria-selected=\"{active}\" tabindex=\"{}\" data-index=\"{i}\" data-target=\"{prefix}-card-{n}\">{}</button>",
            if active { " is-active" } else { "" },
            if active { 0 } else { -1 },
            topic.indicator_label,
            n = i + 1,
        ));
    }
    lines.push("</div>".to_string());

    for (i, topic) in topics.iter().enumerate() {
        render_card(&mut lines, topics, topic, i, &state, prefix);
    }

    lines.push("</div>".to_string());
    lines.join("\n")
}

fn render_card(
    lines: &mut Vec<String>,
    topics: &[ResearchTopic],
    topic: &ResearchTopic,
    i: usize,
    state: &ActiveIndex,
    prefix: &str,
) {
    let active = state.is_active(i);
    lines.push(format!(
        "<article class=\"research-card{}\" role=\"tabpanel\" id=\"{prefix}-card-{n}\" aria-labelledby=\"{prefix}-tab-{n}\" aria-hidden=\"{}\" data-index=\"{i}\"{}>",
        if active { " is-active" } else { "" },
        !active,
        if active { "" } else { " hidden" },
        n = i + 1,
    ));

    lines.push("<header class=\"research-card-header\">".to_string());
    lines.push(format!("<h3 class=\"research-title\">{}</h3>", topic.title));
    if let Some(ref highlight) = topic.highlight {
        lines.push(format!("<p class=\"research-highlight\">{highlight}</p>"));
    }
    lines.push("</header>".to_string());

    if let Some(ref figure) = topic.figure {
        lines.push(format!(
            "<figure class=\"research-figure\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
            figure.src, figure.alt
        ));
    }

    if !topic.body.is_empty() {
        lines.push("<div class=\"research-body\">".to_string());
        for paragraph in &topic.body {
            lines.push(paragraph.to_string());
        }
        lines.push("</div>".to_string());
    }

    if !topic.buttons.is_empty() {
        lines.push("<div class=\"research-actions\">".to_string());
        for button in &topic.buttons {
            lines.push(format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                button.classes, button.href, button.label
            ));
        }
        lines.push("</div>".to_string());
    }

    if topics.len() > 1 {
        let prev = ActiveIndex::wrapped_prev(i, topics.len());
        let next = ActiveIndex::wrapped_next(i, topics.len());
        lines.push("<nav class=\"research-nav\" aria-label=\"Topic navigation\">".to_string());
        lines.push(format!(
            "<button type=\"button\" class=\"research-prev\" data-nav-index=\"{prev}\" aria-controls=\"{prefix}-card-{}\">&larr; {}</button>",
            prev + 1,
            topics[prev].title
        ));
        lines.push(format!(
            "<button type=\"button\" class=\"research-next\" data-nav-index=\"{next}\" aria-controls=\"{prefix}-card-{}\">{} &rarr;</button>",
            next + 1,
            topics[next].title
        ));
        lines.push("</nav>".to_string());
    }

    lines.push("</article>".to_string());
}
