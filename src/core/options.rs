//! Options for one calendar run

use chrono::{Datelike, Local};

use super::document::LayoutMode;
use super::grid::HalfYear;

/// What to draw: which year, in which layout, and whether the fixed feasts
/// (Easter Sunday, Christmas Day, Boxing Day) are added to the holidays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    pub year: i32,
    pub mode: LayoutMode,
    pub fixed_feasts: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            year: Local::now().year(),
            mode: LayoutMode::FullYear,
            fixed_feasts: true,
        }
    }
}

impl CalendarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A3 full-year calendar for `year`
    pub fn full_year(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// A4 landscape calendar for one half of `year`
    pub fn half_year(year: i32, half: HalfYear) -> Self {
        let mode = match half {
            HalfYear::First => LayoutMode::HalfFirst,
            HalfYear::Second => LayoutMode::HalfSecond,
        };
        Self {
            year,
            mode,
            ..Default::default()
        }
    }

    pub fn without_fixed_feasts(self) -> Self {
        Self {
            fixed_feasts: false,
            ..self
        }
    }
}
