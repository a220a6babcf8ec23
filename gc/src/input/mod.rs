//! Plant file readers
//!
//! Two formats are understood:
//!
//! - comma-separated text, one plant per line, `#` comments (see [`parse_text`])
//! - a YAML list of plant mappings (see [`parse_yaml`])
//!
//! [`load_plants`] picks the format from the file extension.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::PlantSpec;

mod error;
mod text;

pub use error::InputError;
pub use text::parse_text;

/// Parse a YAML document holding a list of plants
pub fn parse_yaml(content: &str) -> Result<Vec<PlantSpec>, InputError> {
    debug!(bytes = content.len(), "parse_yaml: called");
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let plants: Option<Vec<PlantSpec>> = serde_yaml::from_str(content)?;
    Ok(plants.unwrap_or_default())
}

/// Whether a path names a YAML plant file
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
        .unwrap_or(false)
}

/// Read and parse a plant file
pub fn load_plants(path: &Path) -> Result<Vec<PlantSpec>, InputError> {
    debug!(path = %path.display(), "load_plants: called");
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let plants = if is_yaml(path) {
        parse_yaml(&content)?
    } else {
        parse_text(&content)?
    };
    info!(path = %path.display(), count = plants.len(), "Loaded plants");
    Ok(plants)
}
