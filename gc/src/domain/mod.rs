//! Domain types for gardencal
//!
//! Core domain types: PlantSpec, Plant, Schedule, CalendarEvent.
//!
//! A `PlantSpec` is the raw per-plant configuration as read from the plant
//! file. Deriving it produces a `Plant`, which always carries its `Schedule`;
//! there is no way to observe a plant whose milestone dates have not been
//! computed.

mod error;
mod event;
mod plant;
mod schedule;

pub use error::PlantError;
pub use event::CalendarEvent;
pub use plant::{Plant, PlantSpec, plural};
pub use schedule::{Milestone, Schedule};
