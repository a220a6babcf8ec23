//! CalendarEvent domain type

use chrono::NaiveDate;

/// A dated entry in a calendar view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Day the event falls on (no time of day)
    pub date: NaiveDate,
    /// Short label, e.g. "Harden off: Tomato"
    pub summary: String,
    /// Longer label, e.g. "Tomato -- Start hardening off seedlings"
    pub description: String,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date,
            summary: summary.into(),
            description: description.into(),
        }
    }

    /// Exclusive end date of the event as an all-day entry
    ///
    /// Returns None only for the last representable date.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.date.succ_opt()
    }
}
