//! Plant record types
//!
//! `PlantSpec` holds one plant's inputs exactly as configured. `Plant` is the
//! validated spec paired with its derived `Schedule`. Both are read-only once
//! built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::PlantError;
use super::schedule::Schedule;

/// Relative distance from an integer below which a seed quotient counts as exact
const SEED_QUOTIENT_TOLERANCE: f64 = 1e-9;

/// Raw per-plant configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlantSpec {
    /// Display name, embedded in every generated event
    pub name: String,

    /// Number of plants we want to end up harvesting
    #[serde(default)]
    pub plants_to_harvest: u32,

    /// Weeks grown under a lamp before transplanting (0 = direct sow outdoors)
    #[serde(default)]
    pub weeks_indoors: u32,

    /// Weeks after seeding to separate or re-pot seedlings (0 = never)
    #[serde(default)]
    pub weeks_until_indoor_separation: u32,

    /// Transplant date for indoor starts, sowing date for direct sown plants
    pub outdoor_planting_date: NaiveDate,

    /// Weeks after direct sowing to thin seedlings (0 = never)
    #[serde(default)]
    pub weeks_until_outdoor_separation: u32,

    /// Days from the seed going into soil until harvest
    pub days_to_harvest: u32,

    /// Fraction of seeds expected to germinate, in (0, 1]
    pub germination_rate: f64,

    pub min_days_to_sprout: u32,

    /// Defaults to the midpoint of the sprouting window
    #[serde(default)]
    pub avg_days_to_sprout: Option<u32>,

    pub max_days_to_sprout: u32,

    /// Whether harvesting pulls the whole plant (carrots) or not (tomatoes)
    #[serde(default)]
    pub harvest_removes_plant: bool,
}

impl PlantSpec {
    /// Whether the plant is started indoors rather than sown directly outside
    pub fn starts_indoors(&self) -> bool {
        self.weeks_indoors > 0
    }

    /// Average days to sprout, floor((min + max) / 2) unless configured
    pub fn avg_days_to_sprout(&self) -> u32 {
        self.avg_days_to_sprout.unwrap_or_else(|| {
            ((u64::from(self.min_days_to_sprout) + u64::from(self.max_days_to_sprout)) / 2) as u32
        })
    }

    /// Seeds to plant so that enough survive germination
    ///
    /// seeds planted * germination rate = plants harvested, rounded up. A
    /// quotient that is an integer up to float noise (21 / 0.7) is not bumped
    /// to the next seed.
    pub fn seeds_needed(&self) -> u64 {
        let quotient = self.seed_quotient();
        let nearest = quotient.round();
        let seeds = if (quotient - nearest).abs() <= nearest * SEED_QUOTIENT_TOLERANCE {
            nearest
        } else {
            quotient.ceil()
        };
        seeds as u64
    }

    fn seed_quotient(&self) -> f64 {
        f64::from(self.plants_to_harvest) / self.germination_rate
    }

    /// Check the inputs are usable for schedule derivation
    pub fn validate(&self) -> Result<(), PlantError> {
        debug!(name = %self.name, "PlantSpec::validate: called");
        if self.name.trim().is_empty() {
            return Err(PlantError::EmptyName);
        }

        if !(self.germination_rate > 0.0 && self.germination_rate <= 1.0) {
            return Err(PlantError::GerminationRate {
                name: self.name.clone(),
                rate: self.germination_rate,
            });
        }

        let seeds = self.seed_quotient().ceil();
        if seeds >= u64::MAX as f64 {
            return Err(PlantError::SeedCount {
                name: self.name.clone(),
                plants: self.plants_to_harvest,
                rate: self.germination_rate,
            });
        }

        if self.min_days_to_sprout > self.max_days_to_sprout {
            return Err(PlantError::SproutWindow {
                name: self.name.clone(),
                min: self.min_days_to_sprout,
                max: self.max_days_to_sprout,
            });
        }

        let avg = self.avg_days_to_sprout();
        if avg < self.min_days_to_sprout || avg > self.max_days_to_sprout {
            return Err(PlantError::SproutAverage {
                name: self.name.clone(),
                avg,
                min: self.min_days_to_sprout,
                max: self.max_days_to_sprout,
            });
        }

        Ok(())
    }
}

/// A validated plant together with its derived milestone dates
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    spec: PlantSpec,
    schedule: Schedule,
}

impl Plant {
    /// Validate the spec and derive its schedule
    pub fn new(spec: PlantSpec) -> Result<Self, PlantError> {
        debug!(name = %spec.name, "Plant::new: called");
        spec.validate()?;
        let schedule = Schedule::derive(&spec)?;
        Ok(Self { spec, schedule })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &PlantSpec {
        &self.spec
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

/// Pick the singular or plural form of a noun for a count
///
/// Exactly one is singular; zero and anything above one are plural.
pub fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
