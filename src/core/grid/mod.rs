//! Calendar grid construction
//!
//! Lays out the days of a range of months as a matrix with one row per
//! day-of-month position (1..=31) and one column per month.
//!
//! # Architecture
//!
//! ```text
//! year + months + HolidayMap -> GridBuilder -> Grid (header + 31 rows of Option<Cell>)
//! ```
//!
//! # Example
//!
//! ```
//! use texcal::{build_grid, CellClass, HolidayMap};
//!
//! let grid = build_grid(2024, &[2], &HolidayMap::new()).unwrap();
//! let leap_day = grid.cell(29, 0).unwrap();
//! assert_eq!(leap_day.day_label(), "29 Th");
//! assert_eq!(leap_day.class, CellClass::Plain);
//! assert!(grid.cell(30, 0).is_none());
//! ```

mod builder;
mod cell;


// Re-export public API
pub use builder::{
    build_grid, build_half_year, days_in_month, is_leap_year, Grid, GridBuilder, GridRow,
    HalfYear, GRID_ROWS, MAX_YEAR, MIN_YEAR,
};
pub use cell::{Cell, CellClass};
