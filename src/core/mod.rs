//! Core calendar modules
//!
//! This module contains the two stages of calendar generation:
//! - `grid`: day-by-month grid construction with weekend/holiday styling
//! - `document`: LaTeX document assembly for the supported page layouts
//! - `options`: per-run configuration

pub mod document;
pub mod grid;
pub mod holiday_map;
pub mod options;

// Re-export main types and functions from grid
pub use grid::{build_grid, build_half_year, Cell, CellClass, Grid, GridBuilder, HalfYear};

// Re-export main types and functions from document
pub use document::{
    assemble, render_calendar, Document, DocumentAssembler, LayoutMode, LayoutSettings,
};

pub use holiday_map::HolidayMap;
pub use options::CalendarOptions;
