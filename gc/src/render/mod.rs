//! Calendar renderers
//!
//! - [`month`] - plain text grouped by month and day
//! - [`ics`] - iCalendar feed of all-day events
//! - [`plant`] - per-plant narrative of derived dates

pub mod ics;
pub mod month;
pub mod plant;

pub use ics::{IcsRenderer, RenderError};
pub use month::render_month;
pub use plant::render_plant;

/// Underline a heading with a repeated character of the same width
pub(crate) fn underline(heading: &str, ch: char) -> String {
    let width = heading.chars().count();
    format!("{}\n{}\n", heading, ch.to_string().repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_matches_width() {
        assert_eq!(underline("May 2024", '='), "May 2024\n========\n");
        assert_eq!(underline("", '*'), "\n\n");
    }
}
