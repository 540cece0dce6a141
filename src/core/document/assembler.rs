//! Document assembly: settings, header/footer and body

use std::fmt;

use tracing::debug;

use super::layout::{LayoutMode, LayoutSettings};
use super::table::CalendarTable;
use crate::core::grid::{Grid, GridBuilder};
use crate::core::holiday_map::HolidayMap;
use crate::data::colors::ACCENT_COLORS;
use crate::utils::error::{CalendarError, CalendarResult};

/// Spacing directive placed between stacked tables
pub const TABLE_SPACING: &str = "\\vskip\\baselineskip";

/// A complete LaTeX document as an ordered sequence of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Serialize to text, lines joined by `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of `tabularx` environments in the body
    pub fn table_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.starts_with("\\begin{tabularx}"))
            .count()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Builds a calendar document in explicit steps
///
/// ```text
/// settings -> header/footer -> body start -> table (spacing table) -> body end
/// ```
pub struct DocumentAssembler {
    year: i32,
    settings: LayoutSettings,
    lines: Vec<String>,
    tables: usize,
}

impl DocumentAssembler {
    pub fn new(year: i32, settings: LayoutSettings) -> Self {
        DocumentAssembler {
            year,
            settings,
            lines: Vec::new(),
            tables: 0,
        }
    }

    /// Title shown in the page header
    pub fn title(&self) -> String {
        format!("Calendar {}", self.year)
    }

    /// Document class, packages, page geometry and accent colors
    pub fn settings_block(&mut self) -> &mut Self {
        let s = self.settings;
        self.lines.extend([
            format!("\\documentclass[{}]{{article}}", s.class_options()),
            "\\usepackage[utf8]{inputenc}".to_string(),
            "\\usepackage[T1]{fontenc}".to_string(),
            "\\usepackage{fancyhdr}".to_string(),
            "\\usepackage{fix-cm}".to_string(),
            "\\usepackage{tabularx}".to_string(),
            "\\usepackage{xcolor}".to_string(),
            "\\usepackage{colortbl}".to_string(),
            "\\usepackage{DejaVuSansMono}".to_string(),
            format!("\\usepackage[{}]{{geometry}}", s.geometry_options()),
            "\\renewcommand*\\familydefault{\\ttdefault}".to_string(),
            format!("\\renewcommand*{{\\arraystretch}}{{{}}}", s.array_stretch),
        ]);
        self.lines
            .extend(ACCENT_COLORS.iter().map(|color| color.definition()));
        self
    }

    /// Centered bold title, no footer
    pub fn header_footer_block(&mut self) -> &mut Self {
        let s = self.settings;
        let title = self.title();
        self.lines.extend([
            "\\renewcommand{\\headrulewidth}{0pt}".to_string(),
            format!("\\setlength{{\\headheight}}{{{}mm}}", s.head_length_mm),
            "\\setlength{\\footskip}{2mm}".to_string(),
            "\\chead{%".to_string(),
            format!(
                "\t\\fontsize{}\\selectfont\\textbf{{{}}}\\hfill",
                s.title_font_args(),
                title
            ),
            "}".to_string(),
            "\\cfoot{}".to_string(),
        ]);
        self
    }

    pub fn begin_body(&mut self) -> &mut Self {
        self.lines.extend([
            "\\begin{document}".to_string(),
            "\\pagestyle{fancy}".to_string(),
            "\\begin{center}".to_string(),
        ]);
        self
    }

    /// Append a table for `grid`, preceded by spacing if it is not the first
    pub fn table(&mut self, grid: &Grid) -> &mut Self {
        if self.tables > 0 {
            self.lines.push(TABLE_SPACING.to_string());
        }
        self.lines.extend(CalendarTable::from_grid(grid).to_lines());
        self.tables += 1;
        self
    }

    pub fn end_body(&mut self) -> &mut Self {
        self.lines.extend([
            "\\end{center}".to_string(),
            "\\end{document}".to_string(),
        ]);
        self
    }

    pub fn finish(self) -> Document {
        Document { lines: self.lines }
    }
}

/// Assemble the document for `mode` from already-built grids
///
/// The number of grids must match the mode: two for a full year, one for a
/// half year.
pub fn assemble(year: i32, grids: &[Grid], mode: LayoutMode) -> CalendarResult<Document> {
    if grids.len() != mode.grid_count() {
        return Err(CalendarError::configuration(format!(
            "{} layout needs {} grid(s), got {}",
            mode,
            mode.grid_count(),
            grids.len()
        )));
    }

    let mut assembler = DocumentAssembler::new(year, mode.settings());
    assembler.settings_block().header_footer_block().begin_body();
    for grid in grids {
        assembler.table(grid);
    }
    assembler.end_body();

    let document = assembler.finish();
    debug!(
        year,
        mode = %mode,
        lines = document.lines().len(),
        "assembled calendar document"
    );
    Ok(document)
}

/// Build the grids `mode` needs and assemble them into a document
pub fn render_calendar(
    year: i32,
    mode: LayoutMode,
    holidays: &HolidayMap,
) -> CalendarResult<Document> {
    let builder = GridBuilder::new(year, holidays)?;
    let grids = mode
        .halves()
        .iter()
        .map(|&half| builder.half_year(half))
        .collect::<CalendarResult<Vec<_>>>()?;
    assemble(year, &grids, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{build_half_year, HalfYear};

    fn half(year: i32, half: HalfYear) -> Grid {
        build_half_year(year, half, &HolidayMap::new()).unwrap()
    }

    #[test]
    fn test_full_year_has_two_tables_and_one_spacing() {
        let doc = render_calendar(2024, LayoutMode::FullYear, &HolidayMap::new()).unwrap();
        assert_eq!(doc.table_count(), 2);
        assert_eq!(
            doc.lines().iter().filter(|l| *l == TABLE_SPACING).count(),
            1
        );
    }

    #[test]
    fn test_spacing_sits_between_tables() {
        let doc = render_calendar(2024, LayoutMode::FullYear, &HolidayMap::new()).unwrap();
        let lines = doc.lines();
        let spacing = lines.iter().position(|l| l == TABLE_SPACING).unwrap();
        assert_eq!(lines[spacing - 1], "\\end{tabularx}");
        assert!(lines[spacing + 1].starts_with("\\begin{tabularx}"));
    }

    #[test]
    fn test_half_year_single_table() {
        let doc = render_calendar(2024, LayoutMode::HalfSecond, &HolidayMap::new()).unwrap();
        assert_eq!(doc.table_count(), 1);
        assert!(!doc.lines().iter().any(|l| l == TABLE_SPACING));
        let text = doc.to_text();
        assert!(text.contains("{\\large \\bfseries July}"));
        assert!(!text.contains("{\\large \\bfseries January}"));
    }

    #[test]
    fn test_settings_block_per_mode() {
        let a3 = render_calendar(2024, LayoutMode::FullYear, &HolidayMap::new()).unwrap();
        assert_eq!(a3.lines()[0], "\\documentclass[10pt]{article}");
        assert!(a3.to_text().contains("paper=a3paper"));
        assert!(a3.to_text().contains("\\renewcommand*{\\arraystretch}{1.35}"));

        let a4 = render_calendar(2024, LayoutMode::HalfFirst, &HolidayMap::new()).unwrap();
        assert_eq!(a4.lines()[0], "\\documentclass[10pt, landscape]{article}");
        assert!(a4.to_text().contains("paper=a4paper"));
        assert!(a4.to_text().contains("\\fontsize{30}{40}"));
    }

    #[test]
    fn test_title_and_colors() {
        let doc = render_calendar(2031, LayoutMode::FullYear, &HolidayMap::new()).unwrap();
        let text = doc.to_text();
        assert!(text.contains("\t\\fontsize{40}{50}\\selectfont\\textbf{Calendar 2031}\\hfill"));
        assert!(text.contains("\\definecolor{ColorA}{HTML}{dddddd}"));
        assert!(text.contains("\\definecolor{ColorB}{HTML}{bbbbbb}"));
        assert!(text.contains("\\cfoot{}"));
    }

    #[test]
    fn test_document_frame() {
        let doc = render_calendar(2024, LayoutMode::HalfFirst, &HolidayMap::new()).unwrap();
        let lines = doc.lines();
        let begin = lines.iter().position(|l| l == "\\begin{document}").unwrap();
        assert_eq!(lines[begin + 1], "\\pagestyle{fancy}");
        assert_eq!(lines[begin + 2], "\\begin{center}");
        assert_eq!(&lines[lines.len() - 2..], ["\\end{center}", "\\end{document}"]);
    }

    #[test]
    fn test_grid_count_mismatch() {
        let grids = vec![half(2024, HalfYear::First)];
        let err = assemble(2024, &grids, LayoutMode::FullYear).unwrap_err();
        assert!(matches!(err, CalendarError::Configuration { .. }));

        let grids = vec![half(2024, HalfYear::First), half(2024, HalfYear::Second)];
        assert!(assemble(2024, &grids, LayoutMode::HalfFirst).is_err());
    }

    #[test]
    fn test_invalid_year_propagates() {
        let err = render_calendar(0, LayoutMode::FullYear, &HolidayMap::new()).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidRange { .. }));
    }
}
