//! Cell types and styling classes for the calendar grid

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::holiday_map::HolidayMap;
use crate::data::names::weekday_code;

/// Styling class of a calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellClass {
    #[default]
    Plain,
    Saturday,
    /// Sundays, and holidays that do not fall on a Saturday
    SundayOrHoliday,
}

impl CellClass {
    /// Pick the class for a date.
    ///
    /// Saturday is checked first, so a Saturday holiday stays `Saturday`.
    pub fn for_date(date: NaiveDate, holidays: &HolidayMap) -> Self {
        match date.weekday() {
            Weekday::Sat => CellClass::Saturday,
            Weekday::Sun => CellClass::SundayOrHoliday,
            _ if holidays.contains(&date) => CellClass::SundayOrHoliday,
            _ => CellClass::Plain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellClass::Plain => "plain",
            CellClass::Saturday => "saturday",
            CellClass::SundayOrHoliday => "sunday-or-holiday",
        }
    }
}

impl fmt::Display for CellClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day within a month column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The calendar date this cell shows
    pub date: NaiveDate,
    /// Styling class
    pub class: CellClass,
    /// Holiday label, if the date is a holiday
    pub label: Option<String>,
}

impl Cell {
    /// Create a cell for `date`, classifying and labelling it from `holidays`
    pub fn new(date: NaiveDate, holidays: &HolidayMap) -> Self {
        Cell {
            date,
            class: CellClass::for_date(date, holidays),
            label: holidays.get(&date).map(str::to_string),
        }
    }

    /// Day of month, 1-based
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Two-digit day plus weekday code, e.g. `05 Tu`
    pub fn day_label(&self) -> String {
        format!("{:02} {}", self.day(), weekday_code(self.weekday()))
    }

    pub fn is_holiday(&self) -> bool {
        self.label.is_some()
    }
}
