//! tabularx generation for calendar grids

use super::markup::{centered, month_heading, render_cell};
use crate::core::grid::Grid;

/// A rendered calendar table, ready to be emitted as LaTeX lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    /// Number of `X` columns
    pub col_count: usize,
    /// Header cells (already formatted)
    pub header: Vec<String>,
    /// Body rows (already formatted cells)
    pub rows: Vec<Vec<String>>,
}

impl CalendarTable {
    /// Format every header label and cell of `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        CalendarTable {
            col_count: grid.column_count(),
            header: grid
                .header
                .iter()
                .map(|name| centered(&month_heading(name)))
                .collect(),
            rows: grid
                .rows
                .iter()
                .map(|row| row.iter().map(|entry| render_cell(entry.as_ref())).collect())
                .collect(),
        }
    }

    /// Column specification, e.g. `|X|X|X|`
    fn column_spec(&self) -> String {
        let mut spec = String::from("|");
        for _ in 0..self.col_count {
            spec.push_str("X|");
        }
        spec
    }

    /// Emit the table as LaTeX lines
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 6);

        lines.push(format!(
            "\\begin{{tabularx}}{{\\textwidth}}{{{}}}",
            self.column_spec()
        ));
        lines.push("\\hline".to_string());
        lines.push(format!("{} \\\\", self.header.join(" & ")));
        lines.push("\\hline".to_string());

        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                lines.push("\\hline".to_string());
            }
            lines.push(format!("{} \\\\", row.join(" & ")));
        }

        lines.push("\\hline".to_string());
        lines.push("\\end{tabularx}".to_string());
        lines
    }
}
