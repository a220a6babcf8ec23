//! Schedule derivation
//!
//! Turns a plant's inputs into its milestone dates. Plants started indoors
//! count back from the outdoor planting date; direct sown plants count forward
//! from it. Sprouting and harvest dates are then measured from the day the
//! seed went into soil.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::error::PlantError;
use super::plant::PlantSpec;

const DAYS_PER_WEEK: u64 = 7;

/// Days before transplanting that seedlings start spending days outside
const HARDENING_OFF_LEAD_DAYS: u64 = 3;

/// A single actionable gardening step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Milestone {
    Seeding,
    Sprouting,
    LastChanceSprouting,
    IndoorSeparation,
    HardeningOff,
    OutdoorPlanting,
    OutdoorSeparation,
    Harvest,
}

impl std::fmt::Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeding => write!(f, "seeding"),
            Self::Sprouting => write!(f, "sprouting"),
            Self::LastChanceSprouting => write!(f, "last chance sprouting"),
            Self::IndoorSeparation => write!(f, "indoor separation"),
            Self::HardeningOff => write!(f, "hardening off"),
            Self::OutdoorPlanting => write!(f, "outdoor planting"),
            Self::OutdoorSeparation => write!(f, "outdoor separation"),
            Self::Harvest => write!(f, "harvest"),
        }
    }
}

/// Derived milestone dates for one plant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub seeding: NaiveDate,
    pub sprouting: NaiveDate,
    pub last_chance_sprouting: NaiveDate,
    /// Only for indoor starts with a separation week configured
    pub indoor_separation: Option<NaiveDate>,
    /// Only for indoor starts
    pub hardening_off: Option<NaiveDate>,
    pub outdoor_planting: NaiveDate,
    /// Only for direct sown plants with a thinning week configured
    pub outdoor_separation: Option<NaiveDate>,
    pub harvest: NaiveDate,
}

impl Schedule {
    /// Compute every milestone date for a plant
    pub fn derive(spec: &PlantSpec) -> Result<Self, PlantError> {
        debug!(name = %spec.name, indoors = spec.starts_indoors(), "Schedule::derive: called");
        let shift = DateShift { name: &spec.name };
        let outdoor = spec.outdoor_planting_date;

        let (seeding, indoor_separation, hardening_off, outdoor_separation) = if spec.starts_indoors() {
            let seeding = shift.back(outdoor, weeks(spec.weeks_indoors), Milestone::Seeding)?;
            let indoor_separation = match spec.weeks_until_indoor_separation {
                0 => None,
                w => Some(shift.forward(seeding, weeks(w), Milestone::IndoorSeparation)?),
            };
            let hardening_off = shift.back(outdoor, HARDENING_OFF_LEAD_DAYS, Milestone::HardeningOff)?;
            (seeding, indoor_separation, Some(hardening_off), None)
        } else {
            let outdoor_separation = match spec.weeks_until_outdoor_separation {
                0 => None,
                w => Some(shift.forward(outdoor, weeks(w), Milestone::OutdoorSeparation)?),
            };
            (outdoor, None, None, outdoor_separation)
        };

        // Seeding doubles as the sprouting base in both branches
        let sprouting = shift.forward(
            seeding,
            u64::from(spec.avg_days_to_sprout()),
            Milestone::Sprouting,
        )?;
        let last_chance_sprouting = shift.forward(
            seeding,
            u64::from(spec.max_days_to_sprout),
            Milestone::LastChanceSprouting,
        )?;
        let harvest = shift.forward(seeding, u64::from(spec.days_to_harvest), Milestone::Harvest)?;

        let schedule = Self {
            seeding,
            sprouting,
            last_chance_sprouting,
            indoor_separation,
            hardening_off,
            outdoor_planting: outdoor,
            outdoor_separation,
            harvest,
        };
        debug!(name = %spec.name, ?schedule, "Schedule::derive: complete");
        Ok(schedule)
    }

    /// The date for a milestone, if it applies to this plant
    pub fn date(&self, milestone: Milestone) -> Option<NaiveDate> {
        match milestone {
            Milestone::Seeding => Some(self.seeding),
            Milestone::Sprouting => Some(self.sprouting),
            Milestone::LastChanceSprouting => Some(self.last_chance_sprouting),
            Milestone::IndoorSeparation => self.indoor_separation,
            Milestone::HardeningOff => self.hardening_off,
            Milestone::OutdoorPlanting => Some(self.outdoor_planting),
            Milestone::OutdoorSeparation => self.outdoor_separation,
            Milestone::Harvest => Some(self.harvest),
        }
    }
}

fn weeks(count: u32) -> u64 {
    u64::from(count) * DAYS_PER_WEEK
}

/// Checked day arithmetic that names the plant and milestone on overflow
struct DateShift<'a> {
    name: &'a str,
}

impl DateShift<'_> {
    fn forward(&self, date: NaiveDate, days: u64, milestone: Milestone) -> Result<NaiveDate, PlantError> {
        date.checked_add_days(Days::new(days)).ok_or_else(|| self.out_of_range(milestone))
    }

    fn back(&self, date: NaiveDate, days: u64, milestone: Milestone) -> Result<NaiveDate, PlantError> {
        date.checked_sub_days(Days::new(days)).ok_or_else(|| self.out_of_range(milestone))
    }

    fn out_of_range(&self, milestone: Milestone) -> PlantError {
        PlantError::DateOutOfRange {
            name: self.name.to_string(),
            milestone,
        }
    }
}
