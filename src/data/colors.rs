//! Accent colors for highlighted calendar cells (xcolor/colortbl)

use crate::core::grid::CellClass;

/// A named color declared in the document preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    /// LaTeX color name used with `\cellcolor`
    pub name: &'static str,
    /// HTML hex value without the leading `#`
    pub hex: &'static str,
}

impl AccentColor {
    /// The `\definecolor` line declaring this color
    pub fn definition(&self) -> String {
        format!("\\definecolor{{{}}}{{HTML}}{{{}}}", self.name, self.hex)
    }
}

/// Background for Saturdays
pub const SATURDAY_COLOR: AccentColor = AccentColor {
    name: "ColorA",
    hex: "dddddd",
};

/// Background for Sundays and holidays
pub const SUNDAY_OR_HOLIDAY_COLOR: AccentColor = AccentColor {
    name: "ColorB",
    hex: "bbbbbb",
};

/// All accent colors, in declaration order
pub const ACCENT_COLORS: [AccentColor; 2] = [SATURDAY_COLOR, SUNDAY_OR_HOLIDAY_COLOR];

/// Accent color for a cell class; plain cells have none
pub fn accent_for(class: CellClass) -> Option<AccentColor> {
    match class {
        CellClass::Plain => None,
        CellClass::Saturday => Some(SATURDAY_COLOR),
        CellClass::SundayOrHoliday => Some(SUNDAY_OR_HOLIDAY_COLOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_line() {
        assert_eq!(
            SATURDAY_COLOR.definition(),
            "\\definecolor{ColorA}{HTML}{dddddd}"
        );
        assert_eq!(
            SUNDAY_OR_HOLIDAY_COLOR.definition(),
            "\\definecolor{ColorB}{HTML}{bbbbbb}"
        );
    }

    #[test]
    fn test_accent_for_class() {
        assert_eq!(accent_for(CellClass::Plain), None);
        assert_eq!(accent_for(CellClass::Saturday), Some(SATURDAY_COLOR));
        assert_eq!(
            accent_for(CellClass::SundayOrHoliday),
            Some(SUNDAY_OR_HOLIDAY_COLOR)
        );
    }
}
