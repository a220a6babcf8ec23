//! gardencal - garden planting calendar
//!
//! Derives each plant's milestone dates (seeding, sprouting, separating,
//! hardening off, transplanting, thinning, harvest) from a handful of
//! agricultural parameters, merges them across plants into date-ordered
//! timelines and renders those as plain text or iCalendar.
//!
//! # Modules
//!
//! - [`domain`] - plant records, schedule derivation, calendar events
//! - [`timeline`] - ordered per-view event timelines
//! - [`render`] - month-grouped text, ICS and per-plant renderers
//! - [`input`] - plant file readers
//! - [`planner`] - one run from plant specs to rendered output
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```ignore
//! use gardencal::{Config, OutputFormat, PlanOptions, View, load_plants, plan};
//!
//! let specs = load_plants(Path::new("garden.txt"))?;
//! let options = PlanOptions::new(&[View::ByMonth], OutputFormat::Ical, &Config::default());
//! print!("{}", plan(specs, &options)?);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod planner;
pub mod render;
pub mod timeline;

pub use config::{Config, View};
pub use domain::{CalendarEvent, Milestone, Plant, PlantError, PlantSpec, Schedule};
pub use input::{InputError, load_plants, parse_text, parse_yaml};
pub use planner::{OutputFormat, PlanOptions, plan};
pub use render::{IcsRenderer, RenderError, render_month, render_plant};
pub use timeline::{CalendarView, Calendars, Timeline};
