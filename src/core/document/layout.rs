//! Layout modes and their page settings

use std::fmt;
use std::str::FromStr;

use crate::core::grid::HalfYear;
use crate::data::modes::lookup_mode;
use crate::utils::error::CalendarError;

/// Page/granularity configuration of a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Whole year on one A3 page, two half-year tables stacked
    #[default]
    FullYear,
    /// January to June on one landscape A4 page
    HalfFirst,
    /// July to December on one landscape A4 page
    HalfSecond,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [
        LayoutMode::FullYear,
        LayoutMode::HalfFirst,
        LayoutMode::HalfSecond,
    ];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::FullYear => "full-year",
            LayoutMode::HalfFirst => "half-year-first",
            LayoutMode::HalfSecond => "half-year-second",
        }
    }

    /// The half-years shown, top to bottom
    pub fn halves(&self) -> &'static [HalfYear] {
        match self {
            LayoutMode::FullYear => &[HalfYear::First, HalfYear::Second],
            LayoutMode::HalfFirst => &[HalfYear::First],
            LayoutMode::HalfSecond => &[HalfYear::Second],
        }
    }

    pub fn grid_count(&self) -> usize {
        self.halves().len()
    }

    pub fn settings(&self) -> LayoutSettings {
        LayoutSettings::for_mode(*self)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_mode(s).ok_or_else(|| {
            CalendarError::configuration(format!(
                "unknown layout mode '{}' (expected one of: full-year, half-year-first, half-year-second)",
                s
            ))
        })
    }
}

/// Paper sizes understood by the geometry package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A3,
    A4,
}

impl PaperSize {
    /// geometry `paper=` value
    pub fn geometry_name(&self) -> &'static str {
        match self {
            PaperSize::A3 => "a3paper",
            PaperSize::A4 => "a4paper",
        }
    }
}

/// Fixed page settings for a layout mode. Lengths are in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub paper: PaperSize,
    pub landscape: bool,
    /// Base font size option of the document class
    pub base_font: &'static str,
    /// `\arraystretch` row height factor
    pub array_stretch: f32,
    pub margin_mm: u32,
    pub top_mm: u32,
    pub head_sep_mm: u32,
    /// geometry `headheight`
    pub head_height_mm: u32,
    /// `\headheight` set after fancyhdr is loaded
    pub head_length_mm: u32,
    /// Title `\fontsize{size}{skip}` in points
    pub title_font: (u32, u32),
}

impl LayoutSettings {
    pub fn for_mode(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::FullYear => Self::a3_portrait(),
            LayoutMode::HalfFirst | LayoutMode::HalfSecond => Self::a4_landscape(),
        }
    }

    pub fn a3_portrait() -> Self {
        Self {
            paper: PaperSize::A3,
            landscape: false,
            base_font: "10pt",
            array_stretch: 1.35,
            margin_mm: 12,
            top_mm: 20,
            head_sep_mm: 0,
            head_height_mm: 15,
            head_length_mm: 20,
            title_font: (40, 50),
        }
    }

    pub fn a4_landscape() -> Self {
        Self {
            paper: PaperSize::A4,
            landscape: true,
            base_font: "10pt",
            array_stretch: 1.3,
            margin_mm: 12,
            top_mm: 10,
            head_sep_mm: 2,
            head_height_mm: 10,
            head_length_mm: 20,
            title_font: (30, 40),
        }
    }

    /// Options for `\documentclass`
    pub fn class_options(&self) -> String {
        let mut opts = vec![self.base_font];
        if self.landscape {
            opts.push("landscape");
        }
        opts.join(", ")
    }

    /// Options for the geometry package
    pub fn geometry_options(&self) -> String {
        [
            format!("headheight={}mm", self.head_height_mm),
            format!("headsep={}mm", self.head_sep_mm),
            format!("margin={}mm", self.margin_mm),
            format!("top={}mm", self.top_mm),
            "nofoot".to_string(),
            format!("paper={}", self.paper.geometry_name()),
        ]
        .join(", ")
    }

    /// `{size}{skip}` argument pair for `\fontsize`
    pub fn title_font_args(&self) -> String {
        format!("{{{}}}{{{}}}", self.title_font.0, self.title_font.1)
    }
}
