//! Per-plant narrative report

use tracing::debug;

use super::underline;
use crate::domain::{Milestone, Plant, plural};

const DATE_FORMAT: &str = "%a, %b. %d, %Y";

/// Report order; milestones a plant does not have are skipped
const REPORT_ORDER: [Milestone; 8] = [
    Milestone::Seeding,
    Milestone::Sprouting,
    Milestone::LastChanceSprouting,
    Milestone::IndoorSeparation,
    Milestone::HardeningOff,
    Milestone::OutdoorPlanting,
    Milestone::OutdoorSeparation,
    Milestone::Harvest,
];

fn label(plant: &Plant, milestone: Milestone) -> Option<String> {
    let spec = plant.spec();
    let seeds = plural(spec.seeds_needed(), "seed");
    let plants = plural(u64::from(spec.plants_to_harvest), "plant");
    let label = match milestone {
        Milestone::Seeding if spec.starts_indoors() => format!("Start {} under grow lamp", seeds),
        Milestone::Seeding => format!("Direct sow {} outdoors", seeds),
        Milestone::Sprouting => "Expect sprouting seeds around".to_string(),
        Milestone::LastChanceSprouting => "Last chance for sprouting seeds".to_string(),
        Milestone::IndoorSeparation => "Separate or move to a bigger indoor pot".to_string(),
        Milestone::HardeningOff => "Start hardening off seedlings".to_string(),
        // Direct sowing already covered this day
        Milestone::OutdoorPlanting if !spec.starts_indoors() => return None,
        Milestone::OutdoorPlanting => format!("Transplant {} outdoors", plants),
        Milestone::OutdoorSeparation => format!("Thin to {}", plants),
        Milestone::Harvest if spec.harvest_removes_plant => "Harvest plants".to_string(),
        Milestone::Harvest => "Start harvesting".to_string(),
    };
    Some(label)
}

/// Render every derived date for one plant, in gardening order
pub fn render_plant(plant: &Plant) -> String {
    debug!(name = plant.name(), "render_plant: called");
    let schedule = plant.schedule();
    let mut out = underline(&format!("Calendar for {}:", plant.name()), '=');

    for milestone in REPORT_ORDER {
        let (Some(date), Some(label)) = (schedule.date(milestone), label(plant, milestone)) else {
            continue;
        };
        out.push_str(&format!("{}: {}\n", label, date.format(DATE_FORMAT)));
    }
    out
}
