//! CLI argument parsing for gardencal

use clap::Parser;
use std::path::PathBuf;

use crate::config::View;

#[derive(Parser, Debug)]
#[command(name = "gc")]
#[command(author, version, about = "Garden planting calendar", long_about = None)]
pub struct Cli {
    /// Plant file (comma-separated text, or YAML with a .yml/.yaml extension)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Print every date for each plant
    #[arg(short = 'p', long)]
    pub by_plant: bool,

    /// Print all gardening actions grouped by month
    #[arg(short = 'm', long)]
    pub by_month: bool,

    /// Print the seed sprouting calendar
    #[arg(short = 's', long)]
    pub sprouting: bool,

    /// Print the harvest calendar
    #[arg(short = 'H', long)]
    pub harvest: bool,

    /// Write calendars as iCalendar instead of plain text
    #[arg(short = 'i', long)]
    pub ical: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Views requested by flags, empty when none were given
    pub fn views(&self) -> Vec<View> {
        [
            (self.by_plant, View::ByPlant),
            (self.by_month, View::ByMonth),
            (self.sprouting, View::Sprouting),
            (self.harvest, View::Harvest),
        ]
        .into_iter()
        .filter_map(|(on, view)| on.then_some(view))
        .collect()
    }
}
