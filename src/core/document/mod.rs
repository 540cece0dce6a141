//! Calendar document assembly
//!
//! Turns one or two grids into a complete LaTeX document laid out for a
//! given page mode.
//!
//! # Architecture
//!
//! ```text
//! Grid(s) + LayoutMode -> LayoutSettings -> DocumentAssembler -> Document (lines)
//! ```
//!
//! # Example
//!
//! ```
//! use texcal::{render_calendar, HolidayMap, LayoutMode};
//!
//! let doc = render_calendar(2024, LayoutMode::FullYear, &HolidayMap::new()).unwrap();
//! assert_eq!(doc.table_count(), 2);
//! assert!(doc.to_text().contains("Calendar 2024"));
//! ```

mod assembler;
mod layout;
pub mod markup;
mod table;

// Re-export public API
pub use assembler::{assemble, render_calendar, Document, DocumentAssembler, TABLE_SPACING};
pub use layout::{LayoutMode, LayoutSettings, PaperSize};
pub use table::CalendarTable;
