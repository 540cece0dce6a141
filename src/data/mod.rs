//! Data layer - Static names and constants
//!
//! This module contains all static data used when drawing a calendar:
//! - Month and weekday names
//! - Accent colors for highlighted cells
//! - Layout mode names

pub mod colors;
pub mod modes;
pub mod names;

// Re-export commonly used items
pub use colors::{accent_for, AccentColor, ACCENT_COLORS, SATURDAY_COLOR, SUNDAY_OR_HOLIDAY_COLOR};
pub use modes::{lookup_mode, MODE_NAMES};
pub use names::{month_name, weekday_code, MONTH_NAMES, WEEKDAY_CODES};
