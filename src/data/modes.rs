//! Layout mode names
//!
//! Canonical names plus the paper-size names earlier versions of the tool
//! accepted on the command line.

use phf::phf_map;

use crate::core::document::LayoutMode;

/// Mode name to layout mode mapping
pub static MODE_NAMES: phf::Map<&'static str, LayoutMode> = phf_map! {
    "full-year" => LayoutMode::FullYear,
    "half-year-first" => LayoutMode::HalfFirst,
    "half-year-second" => LayoutMode::HalfSecond,

    // Legacy paper-size names
    "a3-year" => LayoutMode::FullYear,
    "a4-first-half" => LayoutMode::HalfFirst,
    "a4-second-half" => LayoutMode::HalfSecond,
};

/// Look up a layout mode by name (case-insensitive, surrounding whitespace ignored)
#[inline]
pub fn lookup_mode(name: &str) -> Option<LayoutMode> {
    MODE_NAMES.get(name.trim().to_lowercase().as_str()).copied()
}
