//! Comma-separated plant file format
//!
//! ```text
//! # name,harvest,weeks indoors,indoor sep,outdoor date,outdoor sep,days to harvest,germination,min sprout,max sprout,removes
//! Tomato,10,6,3,2024-05-15,0,70,0.8,5,10,0
//! Carrot,20,0,0,2024-04-20,3,75,0.7,14,21,1
//! ```
//!
//! Lines starting with `#` and blank lines are skipped. Whitespace around
//! each field is ignored.

use chrono::NaiveDate;
use tracing::debug;

use super::error::InputError;
use crate::domain::PlantSpec;

/// Number of fields in one plant line
const FIELD_COUNT: usize = 11;

/// Parse every plant line in a text plant file
pub fn parse_text(content: &str) -> Result<Vec<PlantSpec>, InputError> {
    debug!(bytes = content.len(), "parse_text: called");
    let mut plants = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        plants.push(parse_line(index + 1, trimmed)?);
    }

    Ok(plants)
}

fn parse_line(line: usize, text: &str) -> Result<PlantSpec, InputError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(InputError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let field = Fields { line };
    Ok(PlantSpec {
        name: fields[0].to_string(),
        plants_to_harvest: field.count(fields[1], "plants to harvest")?,
        weeks_indoors: field.count(fields[2], "weeks indoors")?,
        weeks_until_indoor_separation: field.count(fields[3], "weeks until indoor separation")?,
        outdoor_planting_date: field.date(fields[4], "outdoor planting date")?,
        weeks_until_outdoor_separation: field.count(fields[5], "weeks until outdoor separation")?,
        days_to_harvest: field.count(fields[6], "days to harvest")?,
        germination_rate: field.rate(fields[7], "germination rate")?,
        min_days_to_sprout: field.count(fields[8], "minimum days to sprout")?,
        avg_days_to_sprout: None,
        max_days_to_sprout: field.count(fields[9], "maximum days to sprout")?,
        harvest_removes_plant: field.flag(fields[10], "harvest removes plant")?,
    })
}

/// Field converters that report the line they came from
struct Fields {
    line: usize,
}

impl Fields {
    fn invalid(&self, field: &'static str, value: &str) -> InputError {
        InputError::InvalidField {
            line: self.line,
            field,
            value: value.to_string(),
        }
    }

    fn count(&self, value: &str, field: &'static str) -> Result<u32, InputError> {
        value.parse().map_err(|_| self.invalid(field, value))
    }

    fn rate(&self, value: &str, field: &'static str) -> Result<f64, InputError> {
        value.parse().map_err(|_| self.invalid(field, value))
    }

    fn date(&self, value: &str, field: &'static str) -> Result<NaiveDate, InputError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| self.invalid(field, value))
    }

    /// Any non-zero integer is true; `true`/`false` are accepted as well
    fn flag(&self, value: &str, field: &'static str) -> Result<bool, InputError> {
        if let Ok(n) = value.parse::<u32>() {
            return Ok(n != 0);
        }
        match value.to_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => Err(self.invalid(field, value)),
        }
    }
}
