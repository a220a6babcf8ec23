//! gardencal configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::timeline::CalendarView;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = "gardencal.yml";

/// A report the tool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Narrative of every date, one plant at a time
    ByPlant,
    /// All actionable steps across plants, grouped by month
    ByMonth,
    Sprouting,
    Harvest,
}

impl View {
    /// The timeline backing this view, if it has one
    pub fn calendar(self) -> Option<CalendarView> {
        match self {
            Self::ByPlant => None,
            Self::ByMonth => Some(CalendarView::ByMonth),
            Self::Sprouting => Some(CalendarView::Sprouting),
            Self::Harvest => Some(CalendarView::Harvest),
        }
    }
}

/// Main gardencal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Views produced when none are given on the command line
    pub views: Vec<View>,

    /// Render calendar views as iCalendar instead of plain text
    pub ical: bool,

    /// PRODID written into every VCALENDAR
    pub prodid: String,

    /// Domain part of generated event UIDs
    pub uid_domain: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            views: vec![View::ByMonth],
            ical: false,
            prodid: "-//gardencal//Garden Calendar Tool//EN".to_string(),
            uid_domain: "gardencal".to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed here; `load` reports them once logging works.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::default_paths(),
        };
        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|c| c.log_level)
    }

    /// Project-local config, then user config
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("gardencal").join(LOCAL_CONFIG));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
