//! Plant validation and derivation errors

use thiserror::Error;

use super::schedule::Milestone;

/// Errors that can occur while validating a plant or deriving its schedule
#[derive(Debug, Error, PartialEq)]
pub enum PlantError {
    #[error("Plant name must not be empty")]
    EmptyName,

    #[error("{name}: germination rate {rate} must be greater than 0 and at most 1")]
    GerminationRate { name: String, rate: f64 },

    #[error("{name}: {plants} plants at germination rate {rate} needs more seeds than can be counted")]
    SeedCount { name: String, plants: u32, rate: f64 },

    #[error("{name}: minimum days to sprout ({min}) exceeds maximum ({max})")]
    SproutWindow { name: String, min: u32, max: u32 },

    #[error("{name}: average days to sprout ({avg}) is outside {min}..={max}")]
    SproutAverage { name: String, avg: u32, min: u32, max: u32 },

    #[error("{name}: {milestone} date is outside the supported calendar range")]
    DateOutOfRange { name: String, milestone: Milestone },
}
