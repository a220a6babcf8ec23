//! Calendar views and the events each one draws from a plant

use tracing::debug;

use crate::domain::{CalendarEvent, Plant, plural};

/// A calendar view backed by its own timeline
///
/// Declaration order is rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarView {
    /// Every actionable step (seeding, separating, hardening off, transplanting, thinning)
    ByMonth,
    /// Expected and last-chance sprouting days
    Sprouting,
    /// First harvest day
    Harvest,
}

impl std::fmt::Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByMonth => write!(f, "by-month"),
            Self::Sprouting => write!(f, "sprouting"),
            Self::Harvest => write!(f, "harvest"),
        }
    }
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [Self::ByMonth, Self::Sprouting, Self::Harvest];

    /// Heading used by the plain text renderer
    pub fn title(&self) -> &'static str {
        match self {
            Self::ByMonth => "Garden Action Items Calendar",
            Self::Sprouting => "Seed Sprouting Calendar",
            Self::Harvest => "Harvest Calendar",
        }
    }

    /// Fresh events for this view, in creation order
    pub fn events_for(&self, plant: &Plant) -> Vec<CalendarEvent> {
        debug!(view = %self, name = plant.name(), "CalendarView::events_for: called");
        match self {
            Self::ByMonth => action_events(plant),
            Self::Sprouting => sprouting_events(plant),
            Self::Harvest => harvest_events(plant),
        }
    }
}

fn action_events(plant: &Plant) -> Vec<CalendarEvent> {
    let name = plant.name();
    let spec = plant.spec();
    let schedule = plant.schedule();
    let mut events = Vec::new();

    if spec.starts_indoors() {
        events.push(CalendarEvent::new(
            schedule.seeding,
            format!("Seed indoors: {}", name),
            format!("{} -- Start {} under grow lamp", name, plural(spec.seeds_needed(), "seed")),
        ));
        if let Some(date) = schedule.indoor_separation {
            events.push(CalendarEvent::new(
                date,
                format!("Separate: {}", name),
                format!("{} -- Separate or move to a bigger indoor pot", name),
            ));
        }
        if let Some(date) = schedule.hardening_off {
            events.push(CalendarEvent::new(
                date,
                format!("Harden off: {}", name),
                format!(
                    "{} -- Start hardening off seedlings (leave them out during the day and bring them in at night)",
                    name
                ),
            ));
        }
        events.push(CalendarEvent::new(
            schedule.outdoor_planting,
            format!("Transplant: {}", name),
            format!("{} -- Transplant {} outdoors", name, plural(u64::from(spec.plants_to_harvest), "plant")),
        ));
    } else {
        events.push(CalendarEvent::new(
            schedule.outdoor_planting,
            format!("Direct sow: {}", name),
            format!("{} -- Direct sow {} outdoors", name, plural(spec.seeds_needed(), "seed")),
        ));
        if let Some(date) = schedule.outdoor_separation {
            events.push(CalendarEvent::new(
                date,
                format!("Thin: {}", name),
                format!("{} -- Thin to {}", name, plural(u64::from(spec.plants_to_harvest), "plant")),
            ));
        }
    }

    events
}

fn sprouting_events(plant: &Plant) -> Vec<CalendarEvent> {
    let name = plant.name();
    let schedule = plant.schedule();
    vec![
        CalendarEvent::new(
            schedule.sprouting,
            format!("Sprouting: {}", name),
            format!("{} -- Expect sprouting seeds around", name),
        ),
        CalendarEvent::new(
            schedule.last_chance_sprouting,
            format!("Check sprouts: {}", name),
            format!("{} -- Last chance for sprouting seeds", name),
        ),
    ]
}

fn harvest_events(plant: &Plant) -> Vec<CalendarEvent> {
    let name = plant.name();
    let spec = plant.spec();
    let description = if spec.harvest_removes_plant {
        format!("{} -- Harvest {}", name, plural(u64::from(spec.plants_to_harvest), "plant"))
    } else {
        format!("{} -- Start harvesting", name)
    };
    vec![CalendarEvent::new(
        plant.schedule().harvest,
        format!("Harvest: {}", name),
        description,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlantSpec;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pepper() -> PlantSpec {
        PlantSpec {
            name: "Pepper".to_string(),
            plants_to_harvest: 1,
            weeks_indoors: 8,
            weeks_until_indoor_separation: 4,
            outdoor_planting_date: ymd(2024, 5, 20),
            weeks_until_outdoor_separation: 0,
            days_to_harvest: 90,
            germination_rate: 0.5,
            min_days_to_sprout: 7,
            avg_days_to_sprout: None,
            max_days_to_sprout: 14,
            harvest_removes_plant: false,
        }
    }

    fn carrot() -> PlantSpec {
        PlantSpec {
            name: "Carrot".to_string(),
            plants_to_harvest: 20,
            weeks_indoors: 0,
            weeks_until_indoor_separation: 0,
            outdoor_planting_date: ymd(2024, 4, 20),
            weeks_until_outdoor_separation: 3,
            days_to_harvest: 75,
            germination_rate: 0.7,
            min_days_to_sprout: 14,
            avg_days_to_sprout: None,
            max_days_to_sprout: 21,
            harvest_removes_plant: true,
        }
    }

    #[test]
    fn test_indoor_action_events() {
        let plant = Plant::new(pepper()).unwrap();
        let events = CalendarView::ByMonth.events_for(&plant);

        let summaries: Vec<_> = events.iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(
            summaries,
            vec!["Seed indoors: Pepper", "Separate: Pepper", "Harden off: Pepper", "Transplant: Pepper"]
        );
        assert_eq!(events[0].date, ymd(2024, 3, 25));
        assert_eq!(events[0].description, "Pepper -- Start 2 seeds under grow lamp");
        assert_eq!(events[1].date, ymd(2024, 4, 22));
        assert_eq!(events[2].date, ymd(2024, 5, 17));
        assert_eq!(events[3].date, ymd(2024, 5, 20));
        assert_eq!(events[3].description, "Pepper -- Transplant 1 plant outdoors");
    }

    #[test]
    fn test_indoor_action_events_without_separation() {
        let spec = PlantSpec {
            weeks_until_indoor_separation: 0,
            ..pepper()
        };
        let plant = Plant::new(spec).unwrap();
        let events = CalendarView::ByMonth.events_for(&plant);
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| !e.summary.starts_with("Separate")));
    }

    #[test]
    fn test_direct_sow_action_events() {
        let plant = Plant::new(carrot()).unwrap();
        let events = CalendarView::ByMonth.events_for(&plant);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].summary, "Direct sow: Carrot");
        assert_eq!(events[0].description, "Carrot -- Direct sow 29 seeds outdoors");
        assert_eq!(events[0].date, ymd(2024, 4, 20));
        assert_eq!(events[1].summary, "Thin: Carrot");
        assert_eq!(events[1].description, "Carrot -- Thin to 20 plants");
        assert_eq!(events[1].date, ymd(2024, 5, 11));
    }

    #[test]
    fn test_exact_seed_quotient_in_description() {
        let spec = PlantSpec {
            name: "Bean".to_string(),
            plants_to_harvest: 21,
            ..carrot()
        };
        let plant = Plant::new(spec).unwrap();
        let events = CalendarView::ByMonth.events_for(&plant);
        assert_eq!(events[0].description, "Bean -- Direct sow 30 seeds outdoors");
    }

    #[test]
    fn test_direct_sow_without_thinning() {
        let spec = PlantSpec {
            weeks_until_outdoor_separation: 0,
            ..carrot()
        };
        let plant = Plant::new(spec).unwrap();
        let events = CalendarView::ByMonth.events_for(&plant);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_sprouting_events_both_branches() {
        for spec in [pepper(), carrot()] {
            let plant = Plant::new(spec).unwrap();
            let events = CalendarView::Sprouting.events_for(&plant);
            assert_eq!(events.len(), 2);
            assert_eq!(events[0].date, plant.schedule().sprouting);
            assert_eq!(events[1].date, plant.schedule().last_chance_sprouting);
            assert!(events.iter().all(|e| e.summary.contains(plant.name())));
            assert!(events.iter().all(|e| e.description.contains(plant.name())));
        }
    }

    #[test]
    fn test_harvest_description_depends_on_removal() {
        let pulled = Plant::new(carrot()).unwrap();
        let events = CalendarView::Harvest.events_for(&pulled);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Harvest: Carrot");
        assert_eq!(events[0].description, "Carrot -- Harvest 20 plants");
        assert_eq!(events[0].date, ymd(2024, 7, 4));

        let kept = Plant::new(pepper()).unwrap();
        let events = CalendarView::Harvest.events_for(&kept);
        assert_eq!(events[0].description, "Pepper -- Start harvesting");
    }

    #[test]
    fn test_single_plant_harvest_is_singular() {
        let spec = PlantSpec {
            plants_to_harvest: 1,
            ..carrot()
        };
        let plant = Plant::new(spec).unwrap();
        let events = CalendarView::Harvest.events_for(&plant);
        assert_eq!(events[0].description, "Carrot -- Harvest 1 plant");
    }

    #[test]
    fn test_view_order_and_titles() {
        let mut views = vec![CalendarView::Harvest, CalendarView::ByMonth, CalendarView::Sprouting];
        views.sort();
        assert_eq!(views, CalendarView::ALL.to_vec());
        assert_eq!(CalendarView::Sprouting.title(), "Seed Sprouting Calendar");
    }
}
