//! Chronological event timelines
//!
//! A `Timeline` keeps one calendar view's events ascending by date. Events on
//! the same date stay in insertion order: a new event is placed after every
//! event dated on or before it, never in front of an equal one.
//!
//! `Calendars` owns one timeline per requested view and feeds each plant to
//! all of them as it is processed.

use tracing::debug;

use crate::domain::{CalendarEvent, Plant};

mod view;

pub use view::CalendarView;

/// Date-ordered, tie-stable sequence of events for a single view
#[derive(Debug, Clone)]
pub struct Timeline {
    view: CalendarView,
    events: Vec<CalendarEvent>,
}

impl Timeline {
    pub fn new(view: CalendarView) -> Self {
        Self {
            view,
            events: Vec::new(),
        }
    }

    /// Insert one event, keeping dates ascending and ties in arrival order
    pub fn insert(&mut self, event: CalendarEvent) {
        // Upper bound: first event strictly later than the new one
        let index = self.events.partition_point(|e| e.date <= event.date);
        self.events.insert(index, event);
    }

    /// Insert this view's events for a plant
    pub fn add_plant(&mut self, plant: &Plant) {
        let events = self.view.events_for(plant);
        debug!(view = %self.view, name = plant.name(), count = events.len(), "Timeline::add_plant: inserting");
        for event in events {
            self.insert(event);
        }
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a CalendarEvent;
    type IntoIter = std::slice::Iter<'a, CalendarEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One timeline per requested view, in rendering order
#[derive(Debug, Clone, Default)]
pub struct Calendars {
    timelines: Vec<Timeline>,
}

impl Calendars {
    /// Create empty timelines for the given views (duplicates collapse)
    pub fn new(views: impl IntoIterator<Item = CalendarView>) -> Self {
        let mut views: Vec<CalendarView> = views.into_iter().collect();
        views.sort();
        views.dedup();
        debug!(?views, "Calendars::new: called");
        Self {
            timelines: views.into_iter().map(Timeline::new).collect(),
        }
    }

    /// Feed one processed plant to every timeline
    pub fn add_plant(&mut self, plant: &Plant) {
        for timeline in &mut self.timelines {
            timeline.add_plant(plant);
        }
    }

    /// The timeline for a view, if that view was requested
    pub fn get(&self, view: CalendarView) -> Option<&Timeline> {
        self.timelines.iter().find(|t| t.view() == view)
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}
