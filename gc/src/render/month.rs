//! Month-grouped plain text calendar

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::underline;
use crate::timeline::Timeline;

/// Render a timeline grouped under `Month YYYY` headings
///
/// Each new day gets a `D (Dow):` label; further events on the same day are
/// aligned under the first description without repeating the label. The
/// timeline is already sorted, so a heading is written whenever the month or
/// year differs from the previous event's. Empty timelines render nothing.
pub fn render_month(timeline: &Timeline) -> String {
    debug!(view = %timeline.view(), events = timeline.len(), "render_month: called");
    if timeline.is_empty() {
        return String::new();
    }

    let mut out = underline(timeline.view().title(), '*');
    let mut previous: Option<NaiveDate> = None;
    let mut indent = String::new();

    for event in timeline {
        let date = event.date;
        let new_month = previous.is_none_or(|p| (p.year(), p.month()) != (date.year(), date.month()));
        if new_month {
            out.push('\n');
            out.push_str(&underline(&date.format("%B %Y").to_string(), '='));
        }

        if previous == Some(date) {
            out.push_str(&format!("{}{}\n", indent, event.description));
        } else {
            let label = format!("   {}: ", date.format("%e (%a)"));
            indent = " ".repeat(label.chars().count());
            out.push_str(&format!("\n{}{}\n", label, event.description));
        }
        previous = Some(date);
    }

    out
}
