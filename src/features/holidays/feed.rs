//! gov.uk style bank-holiday feeds
//!
//! The feed is a JSON document with one entry per division:
//!
//! ```json
//! {
//!   "england-and-wales": {
//!     "division": "england-and-wales",
//!     "events": [
//!       {"title": "New Year’s Day", "date": "2024-01-01", "notes": "", "bunting": true}
//!     ]
//!   }
//! }
//! ```
//!
//! The document is fetched by the caller; this module only reads it.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use super::labels::event_label;
use super::source::HolidaySource;
use crate::core::holiday_map::HolidayMap;
use crate::utils::error::{CalendarError, CalendarResult};
use crate::utils::files::read_holiday_file;

/// Region a bank-holiday list applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Division {
    #[default]
    EnglandAndWales,
    Scotland,
    NorthernIreland,
}

impl Division {
    /// Key used in the feed document
    pub fn key(&self) -> &'static str {
        match self {
            Division::EnglandAndWales => "england-and-wales",
            Division::Scotland => "scotland",
            Division::NorthernIreland => "northern-ireland",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One bank holiday: date, title and optional notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHolidayEvent {
    pub date: NaiveDate,
    pub title: String,
    pub notes: String,
}

impl BankHolidayEvent {
    pub fn new(date: NaiveDate, title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            notes: notes.into(),
        }
    }

    /// Display label, normalized
    pub fn label(&self) -> String {
        event_label(&self.title, &self.notes)
    }
}

/// Collect events into a holiday map with normalized labels
pub fn events_to_map<'a>(events: impl IntoIterator<Item = &'a BankHolidayEvent>) -> HolidayMap {
    events.into_iter().map(|e| (e.date, e.label())).collect()
}

#[derive(Debug, Deserialize)]
struct RawDivision {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    title: String,
    date: String,
    #[serde(default)]
    notes: String,
}

/// The events of one division, read from a feed document
#[derive(Debug, Clone)]
pub struct BankHolidayFeed {
    division: Division,
    events: Vec<BankHolidayEvent>,
}

impl BankHolidayFeed {
    /// Parse a feed document and keep the events of `division`
    ///
    /// Events with unparseable dates are skipped with a warning; a missing
    /// division is an error.
    pub fn from_json(json: &str, division: Division) -> CalendarResult<Self> {
        let mut raw: HashMap<String, RawDivision> = serde_json::from_str(json)?;
        let entry = raw.remove(division.key()).ok_or_else(|| {
            CalendarError::holiday_source(format!("feed has no '{}' division", division))
        })?;

        let mut events = Vec::with_capacity(entry.events.len());
        for ev in entry.events {
            match NaiveDate::parse_from_str(ev.date.trim(), "%Y-%m-%d") {
                Ok(date) => events.push(BankHolidayEvent::new(date, ev.title, ev.notes)),
                Err(err) => {
                    warn!(title = %ev.title, date = %ev.date, error = %err, "skipping feed event")
                }
            }
        }

        Ok(Self { division, events })
    }

    pub fn from_file(path: impl AsRef<Path>, division: Division) -> CalendarResult<Self> {
        let contents = read_holiday_file(path)?;
        Self::from_json(&contents, division)
    }

    /// Events falling in `year`
    pub fn events_in(&self, year: i32) -> impl Iterator<Item = &BankHolidayEvent> {
        self.events.iter().filter(move |e| e.date.year() == year)
    }
}

impl HolidaySource for BankHolidayFeed {
    fn describe(&self) -> String {
        format!("bank-holiday feed ({})", self.division)
    }

    fn holidays(&self, year: i32) -> CalendarResult<HolidayMap> {
        Ok(events_to_map(self.events_in(year)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "england-and-wales": {
            "division": "england-and-wales",
            "events": [
                {"title": "New Year’s Day", "date": "2022-01-03", "notes": "Substitute day", "bunting": true},
                {"title": "Platinum Jubilee bank holiday", "date": "2022-06-03", "notes": "", "bunting": true},
                {"title": "Christmas Day", "date": "2022-12-27", "notes": "Substitute day", "bunting": true},
                {"title": "New Year’s Day", "date": "2023-01-02", "notes": "Substitute day", "bunting": true},
                {"title": "Broken", "date": "not-a-date", "notes": "", "bunting": false}
            ]
        },
        "scotland": {
            "division": "scotland",
            "events": [
                {"title": "2nd January", "date": "2022-01-04", "notes": "Substitute day", "bunting": true}
            ]
        }
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_feed_filters_year_and_normalizes() {
        let feed = BankHolidayFeed::from_json(FEED, Division::EnglandAndWales).unwrap();
        let map = feed.holidays(2022).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&date(2022, 1, 3)), Some("New Year's Day (sub)"));
        assert_eq!(map.get(&date(2022, 6, 3)), Some("Platinum Jubilee"));
        assert_eq!(map.get(&date(2022, 12, 27)), Some("Christmas Day (sub)"));
    }

    #[test]
    fn test_feed_other_division() {
        let feed = BankHolidayFeed::from_json(FEED, Division::Scotland).unwrap();
        let map = feed.holidays(2022).unwrap();
        assert_eq!(map.get(&date(2022, 1, 4)), Some("2nd January (sub)"));
        assert!(feed.describe().contains("scotland"));
    }

    #[test]
    fn test_feed_missing_division() {
        let err = BankHolidayFeed::from_json(FEED, Division::NorthernIreland).unwrap_err();
        assert!(err.is_holiday_source());
        assert!(err.to_string().contains("northern-ireland"));
    }

    #[test]
    fn test_feed_malformed() {
        let err = BankHolidayFeed::from_json("{\"england-and-wales\": 3}", Division::EnglandAndWales)
            .unwrap_err();
        assert!(err.is_holiday_source());
    }
}
