//! Run one garden through derivation, aggregation and rendering
//!
//! Plants are handled strictly in input order. The first invalid plant stops
//! the run before anything is rendered.

use eyre::{Context, Result};
use tracing::{debug, info};

use crate::config::{Config, View};
use crate::domain::{Plant, PlantSpec};
use crate::render::{IcsRenderer, render_month, render_plant};
use crate::timeline::{CalendarView, Calendars};

/// How calendar views are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Ical,
}

/// What to produce for a garden
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Write the per-plant report as plants are processed
    pub by_plant: bool,
    /// Timelines to build
    pub calendars: Vec<CalendarView>,
    pub format: OutputFormat,
    pub prodid: String,
    pub uid_domain: String,
}

impl PlanOptions {
    pub fn new(views: &[View], format: OutputFormat, config: &Config) -> Self {
        Self {
            by_plant: views.contains(&View::ByPlant),
            calendars: views.iter().filter_map(|v| v.calendar()).collect(),
            format,
            prodid: config.prodid.clone(),
            uid_domain: config.uid_domain.clone(),
        }
    }
}

/// Derive every plant and render the requested views
pub fn plan(specs: Vec<PlantSpec>, options: &PlanOptions) -> Result<String> {
    debug!(plants = specs.len(), ?options, "plan: called");
    let mut out = String::new();
    let mut calendars = Calendars::new(options.calendars.iter().copied());

    for (index, spec) in specs.into_iter().enumerate() {
        let plant = Plant::new(spec).context(format!("Invalid plant record {}", index + 1))?;
        if options.by_plant {
            separate(&mut out);
            out.push_str(&render_plant(&plant));
        }
        calendars.add_plant(&plant);
    }

    let renderer = IcsRenderer::new(options.prodid.clone(), options.uid_domain.clone());
    for timeline in CalendarView::ALL.into_iter().filter_map(|view| calendars.get(view)) {
        if timeline.is_empty() {
            info!(view = %timeline.view(), "No events, skipping view");
            continue;
        }
        match options.format {
            OutputFormat::Text => {
                separate(&mut out);
                out.push_str(&render_month(timeline));
            }
            OutputFormat::Ical => {
                let ics = renderer
                    .render(timeline)
                    .context(format!("Failed to render {} calendar", timeline.view()))?;
                out.push_str(&ics);
            }
        }
        info!(view = %timeline.view(), events = timeline.len(), "Rendered view");
    }

    Ok(out)
}

/// Blank line between consecutive text sections
fn separate(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}
