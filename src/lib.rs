//! # texcal
//!
//! Printable LaTeX year calendars with weekend and holiday highlighting.
//!
//! ## Features
//!
//! - **Grid Builder**: One row per day of the month, one column per month
//! - **Weekend Styling**: Saturdays, Sundays and holidays get their own shading
//! - **Holiday Labels**: Holiday names printed next to the day
//! - **Layouts**: Full year on A3, or either half-year on landscape A4
//! - **Holiday Sources**: JSON files, gov.uk bank-holiday feeds, built-in
//!   England & Wales rules
//!
//! ## Usage Examples
//!
//! ### Grid Construction
//!
//! ```rust
//! use texcal::{build_grid, CellClass, HolidayMap};
//! use chrono::NaiveDate;
//!
//! let mut holidays = HolidayMap::new();
//! holidays.insert(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(), "Christmas Day");
//!
//! let grid = build_grid(2024, &[12], &holidays).unwrap();
//! let christmas = grid.cell(25, 0).unwrap();
//! assert_eq!(christmas.class, CellClass::SundayOrHoliday);
//! assert_eq!(christmas.label.as_deref(), Some("Christmas Day"));
//! ```
//!
//! ### Full Document
//!
//! ```rust
//! use texcal::{generate, CalendarOptions, holidays::EnglandAndWales};
//!
//! let doc = generate(&CalendarOptions::full_year(2024), &EnglandAndWales).unwrap();
//! let tex = doc.to_text();
//! assert!(tex.starts_with("\\documentclass[10pt]{article}"));
//! assert!(tex.contains("Calendar 2024"));
//! ```

/// Core calendar modules
pub mod core;

/// Data layer - static names and constants
pub mod data;

/// Feature modules - holiday sources
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core functions
pub use crate::core::document::markup;
pub use crate::core::{
    assemble, build_grid, build_half_year, render_calendar, CalendarOptions, Cell, CellClass,
    Document, DocumentAssembler, Grid, GridBuilder, HalfYear, HolidayMap, LayoutMode,
    LayoutSettings,
};

// Re-export feature modules
pub use features::holidays;

// Re-export utilities
pub use utils::error::{CalendarError, CalendarResult};
pub use utils::files;

use tracing::debug;

/// Resolve holidays from `source` and render the calendar described by `options`
///
/// Holiday source failures propagate unchanged; nothing is rendered unless
/// every step succeeds.
pub fn generate(
    options: &CalendarOptions,
    source: &dyn holidays::HolidaySource,
) -> CalendarResult<Document> {
    let holidays = holidays::resolve_holidays(source, options.year, options.fixed_feasts)?;
    debug!(year = options.year, mode = %options.mode, "rendering calendar");
    render_calendar(options.year, options.mode, &holidays)
}

/// Render straight to LaTeX text
pub fn generate_latex(
    options: &CalendarOptions,
    source: &dyn holidays::HolidaySource,
) -> CalendarResult<String> {
    generate(options, source).map(|doc| doc.to_text())
}
