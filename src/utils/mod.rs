//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - File reading and atomic output writes
//! - Log subscriber setup for the CLI

pub mod error;
pub mod files;
#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used items
pub use error::{CalendarError, CalendarResult};
pub use files::{read_holiday_file, write_atomic};
