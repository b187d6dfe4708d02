//! Timeline stepper markup.
//!
//! Produces a `tablist` of step buttons over a progress bar, followed by one
//! `tabpanel` per entry. The first entry is active; every other panel is
//! hidden. Absent fields skip their line entirely.

use crate::content::timeline::TimelineEntry;
use crate::render::navigation::{ActiveIndex, NavigationMode};

/// Render sorted timeline entries. Returns an empty string for no entries.
#[must_use]
pub fn render_stepper(entries: &[TimelineEntry], prefix: &str) -> String {
    let Some(state) = ActiveIndex::new(entries.len(), NavigationMode::Clamp) else {
        return String::new();
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "<div class=\"stepper\" id=\"{prefix}\" data-stepper data-active-index=\"{}\">",
        state.index()
    ));
    lines.push(
        "<div class=\"stepper-track\" role=\"tablist\" aria-label=\"Timeline\" aria-orientation=\"horizontal\">"
            .to_string(),
    );
    lines.push(format!(
        "<div class=\"stepper-progress\" aria-hidden=\"true\"><span class=\"stepper-progress-bar\" style=\"width: {}%\"></span></div>",
        progress_percent(&state)
    ));
    for (i, entry) in entries.iter().enumerate() {
        render_step(&mut lines, entry, i, &state, prefix);
    }
    lines.push("</div>".to_string());

    lines.push("<div class=\"stepper-panels\">".to_string());
    for (i, entry) in entries.iter().enumerate() {
        render_panel(&mut lines, entry, i, &state, prefix);
    }
    lines.push("</div>".to_string());
    lines.push("</div>".to_string());

    lines.join("\n")
}

fn render_step(
    lines: &mut Vec<String>,
    entry: &TimelineEntry,
    i: usize,
    state: &ActiveIndex,
    prefix: &str,
) {
    let active = state.is_active(i);
    let aria_label = if entry.label.is_none() {
        format!(" aria-label=\"Step {}\"", i + 1)
    } else {
        String::new()
    };

    lines.push(format!(
        "<button type=\"button\" class=\"stepper-step{}\" role=\"tab\" id=\"{prefix}-tab-{id}\" aria-controls=\"{prefix}-panel-{id}\" aria-selected=\"{active}\" tabindex=\"{}\" data-index=\"{i}\" data-target=\"{prefix}-panel-{id}\"{aria_label}>",
        if active { " is-active" } else { "" },
        if active { 0 } else { -1 },
        id = entry.id,
    ));
    if !entry.year.is_empty() {
        lines.push(format!("<span class=\"stepper-year\">{}</span>", entry.year));
    }
    if let Some(ref label) = entry.label {
        lines.push(format!("<span class=\"stepper-label\">{label}</span>"));
    }
    lines.push("</button>".to_string());
}

fn render_panel(
    lines: &mut Vec<String>,
    entry: &TimelineEntry,
    i: usize,
    state: &ActiveIndex,
    prefix: &str,
) {
    let active = state.is_active(i);
    lines.push(format!(
        "<section class=\"stepper-panel{}\" role=\"tabpanel\" id=\"{prefix}-panel-{id}\" aria-labelledby=\"{prefix}-tab-{id}\" aria-hidden=\"{}\" data-index=\"{i}\"{}>",
        if active { " is-active" } else { "" },
        !active,
        if active { "" } else { " hidden" },
        id = entry.id,
    ));

    if let Some(ref heading) = entry.heading {
        lines.push(format!("<h3 class=\"stepper-heading\">{heading}</h3>"));
    }

    if entry.place.is_some() || entry.period.is_some() {
        let mut meta = String::from("<p class=\"stepper-meta\">");
        if let Some(ref place) = entry.place {
            meta.push_str(&format!("<span class=\"stepper-place\">{place}</span>"));
        }
        if let Some(ref period) = entry.period {
            meta.push_str(&format!("<span class=\"stepper-period\">{period}</span>"));
        }
        meta.push_str("</p>");
        lines.push(meta);
    }

    if let Some(ref summary) = entry.summary {
        lines.push(format!("<p class=\"stepper-summary\">{summary}</p>"));
    }

    if !entry.bullets.is_empty() {
        lines.push("<ul class=\"stepper-bullets\">".to_string());
        for bullet in &entry.bullets {
            lines.push(format!("<li>{bullet}</li>"));
        }
        lines.push("</ul>".to_string());
    }

    lines.push("</section>".to_string());
}

/// Progress as a whole-number percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_percent(state: &ActiveIndex) -> u32 {
    (state.progress() * 100.0).round() as u32
}
