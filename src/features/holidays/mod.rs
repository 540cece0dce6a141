//! Holiday sources
//!
//! Resolves the date to label mapping that the grid builder highlights.
//!
//! # Architecture
//!
//! ```text
//! JSON file | bank-holiday feed | England & Wales rules
//!     -> (date, title, notes) -> normalize_label -> HolidayMap
//!     -> inject_fixed_feasts (Easter Sunday, Christmas Day, Boxing Day)
//! ```
//!
//! # Example
//!
//! ```
//! use texcal::holidays::{resolve_holidays, EnglandAndWales};
//! use chrono::NaiveDate;
//!
//! let holidays = resolve_holidays(&EnglandAndWales, 2024, true).unwrap();
//! let easter = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! assert_eq!(holidays.get(&easter), Some("Easter Sunday"));
//! ```

mod easter;
mod england_wales;
mod feed;
mod labels;
mod source;

// Re-export public API
pub use crate::core::holiday_map::HolidayMap;
pub use easter::easter_sunday;
pub use england_wales::EnglandAndWales;
pub use feed::{events_to_map, BankHolidayEvent, BankHolidayFeed, Division};
pub use labels::{event_label, inject_fixed_feasts, normalize_label};
pub use source::{parse_holiday_json, resolve_holidays, HolidaySource, JsonFileSource};
