//! Small LaTeX formatting helpers
//!
//! Each helper wraps one piece of text in one construct so cell styling can be
//! composed and tested without assembling a whole document.

use crate::core::grid::Cell;
use crate::data::colors::{accent_for, AccentColor};

/// `\cellcolor{name}{content}`
pub fn cell_color(color: AccentColor, content: &str) -> String {
    format!("\\cellcolor{{{}}}{{{}}}", color.name, content)
}

/// `\textbf{content}`
pub fn bold(content: &str) -> String {
    format!("\\textbf{{{}}}", content)
}

/// Small trailing annotation: ` {\tiny content }`
pub fn tiny(content: &str) -> String {
    format!(" {{\\tiny {} }}", content)
}

/// Horizontally centered inside an `X` column
pub fn centered(content: &str) -> String {
    format!("{{\\hfill {} \\hfill \\hfill }}", content)
}

/// Month header label
pub fn month_heading(name: &str) -> String {
    format!("{{\\large \\bfseries {}}}", name)
}

/// Escape LaTeX special characters in free text
///
/// Single pass, so replacement text is never escaped again.
pub fn escape_latex_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a grid entry; blank positions become the empty string
pub fn render_cell(cell: Option<&Cell>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };

    let day_label = cell.day_label();
    let mut out = match accent_for(cell.class) {
        Some(color) => cell_color(color, &bold(&day_label)),
        None => day_label,
    };

    if let Some(ref label) = cell.label {
        out.push_str(&tiny(&escape_latex_text(label)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::holiday_map::HolidayMap;
    use crate::data::colors::SATURDAY_COLOR;
    use chrono::NaiveDate;

    fn cell(y: i32, m: u32, d: u32, holidays: &HolidayMap) -> Cell {
        Cell::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), holidays)
    }

    #[test]
    fn test_helpers() {
        assert_eq!(bold("x"), "\\textbf{x}");
        assert_eq!(cell_color(SATURDAY_COLOR, "x"), "\\cellcolor{ColorA}{x}");
        assert_eq!(tiny("Boxing Day"), " {\\tiny Boxing Day }");
        assert_eq!(centered("May"), "{\\hfill May \\hfill \\hfill }");
        assert_eq!(month_heading("May"), "{\\large \\bfseries May}");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_latex_text("Fish & Chips"), "Fish \\& Chips");
        assert_eq!(escape_latex_text("100% #1"), "100\\% \\#1");
        assert_eq!(escape_latex_text("King's Birthday"), "King's Birthday");
        assert_eq!(escape_latex_text(r"A\B"), r"A\textbackslash{}B");
        assert_eq!(escape_latex_text("{x}~^"), r"\{x\}\textasciitilde{}\textasciicircum{}");
    }

    #[test]
    fn test_render_label_with_backslash() {
        let mut holidays = HolidayMap::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        holidays.insert(date, r"Bank\Holiday");

        assert_eq!(
            render_cell(Some(&Cell::new(date, &holidays))),
            r"\cellcolor{ColorB}{\textbf{06 Mo}} {\tiny Bank\textbackslash{}Holiday }"
        );
    }

    #[test]
    fn test_render_blank() {
        assert_eq!(render_cell(None), "");
    }

    #[test]
    fn test_render_plain() {
        let holidays = HolidayMap::new();
        assert_eq!(render_cell(Some(&cell(2024, 1, 2, &holidays))), "02 Tu");
    }

    #[test]
    fn test_render_saturday_and_sunday() {
        let holidays = HolidayMap::new();
        assert_eq!(
            render_cell(Some(&cell(2024, 1, 6, &holidays))),
            "\\cellcolor{ColorA}{\\textbf{06 Sa}}"
        );
        assert_eq!(
            render_cell(Some(&cell(2024, 1, 7, &holidays))),
            "\\cellcolor{ColorB}{\\textbf{07 Su}}"
        );
    }

    #[test]
    fn test_render_holiday_label() {
        let mut holidays = HolidayMap::new();
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        holidays.insert(date, "Christmas Day");

        assert_eq!(
            render_cell(Some(&Cell::new(date, &holidays))),
            "\\cellcolor{ColorB}{\\textbf{25 We}} {\\tiny Christmas Day }"
        );
    }

    #[test]
    fn test_render_saturday_holiday_keeps_saturday_color() {
        let mut holidays = HolidayMap::new();
        let date = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
        holidays.insert(date, "Christmas Day");

        assert_eq!(
            render_cell(Some(&Cell::new(date, &holidays))),
            "\\cellcolor{ColorA}{\\textbf{25 Sa}} {\\tiny Christmas Day }"
        );
    }
}
