//! Rule-based bank holidays for England & Wales
//!
//! Produces the same events the gov.uk feed publishes, computed offline:
//! * New Year's Day (Jan 1)
//! * Good Friday (Easter - 2)
//! * Easter Monday (Easter + 1)
//! * Early May bank holiday (first Monday of May)
//! * Spring bank holiday (last Monday of May)
//! * Summer bank holiday (last Monday of August)
//! * Christmas Day (Dec 25)
//! * Boxing Day (Dec 26)
//!
//! Fixed-date holidays on a weekend move to the next weekday that is not
//! already a bank holiday. One-off proclamations (jubilees, coronation, state
//! funeral) are listed in `PROCLAMATIONS`.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::easter::easter_sunday;
use super::feed::{events_to_map, BankHolidayEvent};
use super::source::HolidaySource;
use crate::core::holiday_map::HolidayMap;
use crate::utils::error::{CalendarError, CalendarResult};

const SUBSTITUTE_NOTE: &str = "Substitute day";

/// A one-off change to the usual rules
struct Proclamation {
    /// Date of the regular holiday that moved, if any
    moves: Option<(i32, u32, u32)>,
    /// Date and title of the holiday as observed
    date: (i32, u32, u32),
    title: &'static str,
}

const PROCLAMATIONS: &[Proclamation] = &[
    Proclamation {
        moves: Some((2020, 5, 4)),
        date: (2020, 5, 8),
        title: "Early May bank holiday (VE day)",
    },
    Proclamation {
        moves: Some((2022, 5, 30)),
        date: (2022, 6, 2),
        title: "Spring bank holiday",
    },
    Proclamation {
        moves: None,
        date: (2022, 6, 3),
        title: "Platinum Jubilee bank holiday",
    },
    Proclamation {
        moves: None,
        date: (2022, 9, 19),
        title: "Bank Holiday for the State Funeral of Queen Elizabeth II",
    },
    Proclamation {
        moves: None,
        date: (2023, 5, 8),
        title: "Bank holiday for the coronation of King Charles III",
    },
];

/// England & Wales bank holidays computed from the statutory rules
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglandAndWales;

impl EnglandAndWales {
    /// Bank holiday events for `year`, in date order
    pub fn events(&self, year: i32) -> CalendarResult<Vec<BankHolidayEvent>> {
        let easter = easter_sunday(year)?;
        let mut events = vec![
            BankHolidayEvent::new(shift(easter, -2)?, "Good Friday", ""),
            BankHolidayEvent::new(shift(easter, 1)?, "Easter Monday", ""),
            BankHolidayEvent::new(
                nth_monday(year, 5, 1)?,
                "Early May bank holiday",
                "",
            ),
            BankHolidayEvent::new(last_monday(year, 5)?, "Spring bank holiday", ""),
            BankHolidayEvent::new(last_monday(year, 8)?, "Summer bank holiday", ""),
        ];

        apply_proclamations(year, &mut events)?;

        // Fixed-date holidays, substituted around what is already taken
        let fixed = [
            (ymd(year, 1, 1)?, "New Year\u{2019}s Day"),
            (ymd(year, 12, 25)?, "Christmas Day"),
            (ymd(year, 12, 26)?, "Boxing Day"),
        ];
        let mut taken: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
        taken.extend(fixed.iter().map(|(d, _)| *d).filter(|d| !is_weekend(*d)));

        for (date, title) in fixed {
            if !is_weekend(date) {
                events.push(BankHolidayEvent::new(date, title, ""));
                continue;
            }
            let mut observed = date;
            while is_weekend(observed) || taken.contains(&observed) {
                observed = shift(observed, 1)?;
            }
            taken.push(observed);
            events.push(BankHolidayEvent::new(observed, title, SUBSTITUTE_NOTE));
        }

        events.sort_by_key(|e| e.date);
        Ok(events)
    }
}

impl HolidaySource for EnglandAndWales {
    fn describe(&self) -> String {
        "England & Wales bank holiday rules".to_string()
    }

    fn holidays(&self, year: i32) -> CalendarResult<HolidayMap> {
        Ok(events_to_map(&self.events(year)?))
    }
}

fn apply_proclamations(year: i32, events: &mut Vec<BankHolidayEvent>) -> CalendarResult<()> {
    for p in PROCLAMATIONS.iter().filter(|p| p.date.0 == year) {
        if let Some((y, m, d)) = p.moves {
            let moved = ymd(y, m, d)?;
            events.retain(|e| e.date != moved);
        }
        let (y, m, d) = p.date;
        events.push(BankHolidayEvent::new(ymd(y, m, d)?, p.title, ""));
    }
    Ok(())
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn ymd(year: i32, month: u32, day: u32) -> CalendarResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::invalid_range(format!("{}-{:02}-{:02} is not a valid date", year, month, day))
    })
}

fn shift(date: NaiveDate, days: i64) -> CalendarResult<NaiveDate> {
    let moved = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    moved.ok_or_else(|| CalendarError::invalid_range(format!("{} shifted by {} days", date, days)))
}

/// The `n`th Monday (1-based) of a month
fn nth_monday(year: i32, month: u32, n: u8) -> CalendarResult<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n).ok_or_else(|| {
        CalendarError::invalid_range(format!("no Monday #{} in {}-{:02}", n, year, month))
    })
}

fn last_monday(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    match NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, 5) {
        Some(date) => Ok(date),
        None => nth_monday(year, month, 4),
    }
}
