//! Day-by-month grid construction

use chrono::NaiveDate;
use tracing::debug;

use super::cell::Cell;
use crate::core::holiday_map::HolidayMap;
use crate::data::names::month_name;
use crate::utils::error::{CalendarError, CalendarResult};

/// Number of day positions in every grid
pub const GRID_ROWS: usize = 31;

/// Supported years (proleptic Gregorian, four digits)
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// One half of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfYear {
    /// January to June
    First,
    /// July to December
    Second,
}

impl HalfYear {
    /// The six month numbers in this half
    pub fn months(&self) -> [u32; 6] {
        match self {
            HalfYear::First => [1, 2, 3, 4, 5, 6],
            HalfYear::Second => [7, 8, 9, 10, 11, 12],
        }
    }
}

/// A row of day positions, one entry per month column; `None` where the
/// month has no such day
pub type GridRow = Vec<Option<Cell>>;

/// The day-by-month matrix for a range of months
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Year the grid was built for
    pub year: i32,
    /// Month numbers, in column order
    pub months: Vec<u32>,
    /// Month names, in column order
    pub header: Vec<String>,
    /// 31 rows; row `i` holds day `i + 1`
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Number of month columns
    pub fn column_count(&self) -> usize {
        self.months.len()
    }

    /// The cell for `day` (1-based) in column `col`, if that day exists
    pub fn cell(&self, day: u32, col: usize) -> Option<&Cell> {
        let row = self.rows.get((day as usize).checked_sub(1)?)?;
        row.get(col)?.as_ref()
    }

    /// Iterate over every non-blank cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter().flatten())
    }
}

/// Builds grids for one year against a fixed holiday map
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder<'a> {
    year: i32,
    holidays: &'a HolidayMap,
}

impl<'a> GridBuilder<'a> {
    /// Create a builder, rejecting years outside `MIN_YEAR..=MAX_YEAR`
    pub fn new(year: i32, holidays: &'a HolidayMap) -> CalendarResult<Self> {
        validate_year(year)?;
        Ok(GridBuilder { year, holidays })
    }

    /// Build the grid for `months`
    ///
    /// `months` must be non-empty, within 1..=12 and strictly consecutive.
    pub fn build(&self, months: &[u32]) -> CalendarResult<Grid> {
        validate_months(months)?;

        let header = months
            .iter()
            .map(|&m| month_name(m).unwrap_or_default().to_string())
            .collect();

        let lengths: Vec<u32> = months
            .iter()
            .map(|&m| days_in_month(self.year, m))
            .collect();

        let mut rows = Vec::with_capacity(GRID_ROWS);
        for day in 1..=GRID_ROWS as u32 {
            let mut row = Vec::with_capacity(months.len());
            for (&month, &length) in months.iter().zip(&lengths) {
                if day > length {
                    row.push(None);
                    continue;
                }
                let date = NaiveDate::from_ymd_opt(self.year, month, day).ok_or_else(|| {
                    CalendarError::invalid_range(format!(
                        "{}-{:02}-{:02} is not a valid date",
                        self.year, month, day
                    ))
                })?;
                row.push(Some(Cell::new(date, self.holidays)));
            }
            rows.push(row);
        }

        debug!(
            year = self.year,
            first_month = months[0],
            columns = months.len(),
            "built calendar grid"
        );

        Ok(Grid {
            year: self.year,
            months: months.to_vec(),
            header,
            rows,
        })
    }

    /// Build the grid for one half of the year
    pub fn half_year(&self, half: HalfYear) -> CalendarResult<Grid> {
        self.build(&half.months())
    }
}

/// Build the grid for `year` and `months`, highlighting `holidays`
pub fn build_grid(year: i32, months: &[u32], holidays: &HolidayMap) -> CalendarResult<Grid> {
    GridBuilder::new(year, holidays)?.build(months)
}

/// Build the grid for one half of `year`
pub fn build_half_year(year: i32, half: HalfYear, holidays: &HolidayMap) -> CalendarResult<Grid> {
    GridBuilder::new(year, holidays)?.half_year(half)
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn validate_year(year: i32) -> CalendarResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::invalid_range(format!(
            "year {} is outside {}..={}",
            year, MIN_YEAR, MAX_YEAR
        )))
    }
}

fn validate_months(months: &[u32]) -> CalendarResult<()> {
    if months.is_empty() {
        return Err(CalendarError::invalid_range("no months requested"));
    }
    if let Some(bad) = months.iter().find(|m| !(1..=12).contains(*m)) {
        return Err(CalendarError::invalid_range(format!(
            "month {} is not in 1..=12",
            bad
        )));
    }
    if let Some(pair) = months.windows(2).find(|w| w[1] != w[0] + 1) {
        return Err(CalendarError::invalid_range(format!(
            "months must be consecutive, found {} followed by {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}
