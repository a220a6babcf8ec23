//! iCalendar (RFC 5545) renderer
//!
//! Every event becomes an all-day `VEVENT`: DTSTART is the event date and
//! DTEND the following day, since the end of an all-day event is exclusive.
//! Components are assembled as `ical` properties and serialized by its
//! generator, which writes CRLF line endings and folds long lines.

use chrono::{DateTime, NaiveDate, Utc};
use ical::generator::Emitter;
use ical::parser::ical::component::{IcalCalendar, IcalEvent};
use ical::property::Property;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::timeline::Timeline;

const DATE_FORMAT: &str = "%Y%m%d";
const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Errors that can occur while rendering a calendar
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Event '{summary}' on {date} has no following day to end on")]
    NoEndDate { summary: String, date: NaiveDate },
}

/// Renders timelines as VCALENDAR documents
#[derive(Debug, Clone)]
pub struct IcsRenderer {
    prodid: String,
    uid_domain: String,
    stamp: DateTime<Utc>,
}

impl IcsRenderer {
    /// Create a renderer stamping every event with the current time
    pub fn new(prodid: impl Into<String>, uid_domain: impl Into<String>) -> Self {
        Self {
            prodid: prodid.into(),
            uid_domain: uid_domain.into(),
            stamp: Utc::now(),
        }
    }

    /// Use a fixed DTSTAMP instead of the construction time
    pub fn with_stamp(mut self, stamp: DateTime<Utc>) -> Self {
        self.stamp = stamp;
        self
    }

    /// Render one timeline as a VCALENDAR; empty timelines render nothing
    pub fn render(&self, timeline: &Timeline) -> Result<String, RenderError> {
        debug!(view = %timeline.view(), events = timeline.len(), "IcsRenderer::render: called");
        if timeline.is_empty() {
            return Ok(String::new());
        }

        let stamp = self.stamp.format(STAMP_FORMAT).to_string();
        let mut calendar = IcalCalendar::new();
        calendar.properties.push(property("VERSION", "2.0"));
        calendar.properties.push(property("PRODID", &self.prodid));

        for event in timeline {
            let end = event.end_date().ok_or_else(|| RenderError::NoEndDate {
                summary: event.summary.clone(),
                date: event.date,
            })?;

            let mut vevent = IcalEvent::new();
            vevent.properties = vec![
                property("UID", &format!("{}@{}", Uuid::now_v7(), self.uid_domain)),
                property("DTSTAMP", &stamp),
                date_property("DTSTART", event.date),
                date_property("DTEND", end),
                property("SUMMARY", &escape_text(&event.summary)),
                property("DESCRIPTION", &escape_text(&event.description)),
            ];
            calendar.events.push(vevent);
        }

        Ok(calendar.generate())
    }
}

fn property(name: &str, value: &str) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(value.to_string()),
    }
}

fn date_property(name: &str, date: NaiveDate) -> Property {
    Property {
        name: name.to_string(),
        params: Some(vec![("VALUE".to_string(), vec!["DATE".to_string()])]),
        value: Some(date.format(DATE_FORMAT).to_string()),
    }
}

/// Escape a TEXT property value
///
/// `ical` properties carry the raw content-line value, so TEXT escaping
/// happens before a value is handed over.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
