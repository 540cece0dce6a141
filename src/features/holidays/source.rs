//! Holiday sources and resolution
//!
//! The calendar core never fetches holidays itself. A `HolidaySource` is run
//! first and its result is handed to the grid builder.
//!
//! Implementations:
//! - `JsonFileSource`: ISO-8601 date to label map stored as JSON
//! - `BankHolidayFeed`: gov.uk style bank-holiday feed, per division
//! - `EnglandAndWales`: rule-based bank holidays, no data file needed
//! - `HolidayMap`: an already-resolved map

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::labels::{inject_fixed_feasts, normalize_label};
use crate::core::holiday_map::HolidayMap;
use crate::utils::error::{CalendarError, CalendarResult};
use crate::utils::files::read_holiday_file;

/// Something that can produce the holidays of a year
pub trait HolidaySource {
    /// Short description used in log output
    fn describe(&self) -> String;

    /// Holidays to highlight when drawing `year`
    fn holidays(&self, year: i32) -> CalendarResult<HolidayMap>;
}

impl HolidaySource for HolidayMap {
    fn describe(&self) -> String {
        format!("{} preset holiday(s)", self.len())
    }

    fn holidays(&self, _year: i32) -> CalendarResult<HolidayMap> {
        Ok(self.clone())
    }
}

/// Run `source` for `year` and optionally add the fixed feasts
pub fn resolve_holidays(
    source: &dyn HolidaySource,
    year: i32,
    fixed_feasts: bool,
) -> CalendarResult<HolidayMap> {
    let mut holidays = source.holidays(year)?;
    if fixed_feasts {
        inject_fixed_feasts(&mut holidays, year)?;
    }
    info!(
        source = %source.describe(),
        year,
        total = holidays.len(),
        in_year = holidays.count_in_year(year),
        "resolved holidays"
    );
    Ok(holidays)
}

/// JSON object mapping ISO-8601 dates to labels
///
/// ```json
/// { "2024-05-06": "Early May bank holiday", "2024-12-25": "Christmas Day" }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HolidaySource for JsonFileSource {
    fn describe(&self) -> String {
        format!("holiday file {}", self.path.display())
    }

    fn holidays(&self, _year: i32) -> CalendarResult<HolidayMap> {
        let contents = read_holiday_file(&self.path)?;
        parse_holiday_json(&contents)
    }
}

/// Parse a date to label JSON object
///
/// Entries of every year are kept; dates that are not drawn are never looked up.
pub fn parse_holiday_json(json: &str) -> CalendarResult<HolidayMap> {
    let raw: BTreeMap<String, String> = serde_json::from_str(json)?;

    raw.into_iter()
        .map(|(key, label)| -> CalendarResult<(NaiveDate, String)> {
            let date = NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").map_err(|err| {
                CalendarError::holiday_source(format!("invalid date key '{}': {}", key, err))
            })?;
            Ok((date, normalize_label(&label)))
        })
        .collect()
}
