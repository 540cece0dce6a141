//! Holiday label clean-up and the fixed feasts added to every year

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::easter::easter_sunday;
use crate::core::holiday_map::HolidayMap;
use crate::utils::error::{CalendarError, CalendarResult};

lazy_static! {
    /// Verbose substitute-day notation, e.g. `(Substitute day)`
    static ref SUBSTITUTE_DAY: Regex = Regex::new(r"(?i)\(\s*substitute\s+day\s*\)").unwrap();
}

/// Labels replaced wholesale because they do not fit a calendar cell
const LABEL_RENAMES: &[(&str, &str)] = &[("Platinum Jubilee bank holiday", "Platinum Jubilee")];

/// Normalize a holiday label for display
///
/// Typographic apostrophes become plain ones, substitute-day notes shrink to
/// `(sub)` and a few long labels are shortened.
pub fn normalize_label(label: &str) -> String {
    let plain = label.replace(['\u{2019}', '\u{2018}'], "'");
    let plain = SUBSTITUTE_DAY.replace_all(&plain, "(sub)");
    let plain = plain.trim();

    LABEL_RENAMES
        .iter()
        .find(|(from, _)| *from == plain)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| plain.to_string())
}

/// Label for a `(title, notes)` event pair: `title` or `title (notes)`
pub fn event_label(title: &str, notes: &str) -> String {
    let notes = notes.trim();
    if notes.is_empty() {
        normalize_label(title)
    } else {
        normalize_label(&format!("{} ({})", title.trim(), notes))
    }
}

/// Add Easter Sunday, Christmas Day and Boxing Day for `year`, replacing any
/// labels already present on those dates
pub fn inject_fixed_feasts(holidays: &mut HolidayMap, year: i32) -> CalendarResult<()> {
    holidays.insert(easter_sunday(year)?, "Easter Sunday");
    holidays.insert(fixed_date(year, 12, 25)?, "Christmas Day");
    holidays.insert(fixed_date(year, 12, 26)?, "Boxing Day");
    Ok(())
}

fn fixed_date(year: i32, month: u32, day: u32) -> CalendarResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::invalid_range(format!("{}-{:02}-{:02} is not a valid date", year, month, day))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophes() {
        assert_eq!(normalize_label("New Year\u{2019}s Day"), "New Year's Day");
        assert_eq!(normalize_label("St \u{2018}Patrick\u{2019}s"), "St 'Patrick's");
    }

    #[test]
    fn test_substitute_day() {
        assert_eq!(
            normalize_label("Christmas Day (Substitute day)"),
            "Christmas Day (sub)"
        );
        assert_eq!(normalize_label("Boxing Day (substitute  day)"), "Boxing Day (sub)");
    }

    #[test]
    fn test_renames() {
        assert_eq!(
            normalize_label("Platinum Jubilee bank holiday"),
            "Platinum Jubilee"
        );
        assert_eq!(normalize_label("Spring bank holiday"), "Spring bank holiday");
    }

    #[test]
    fn test_event_label() {
        assert_eq!(event_label("Good Friday", ""), "Good Friday");
        assert_eq!(
            event_label("New Year\u{2019}s Day", "Substitute day"),
            "New Year's Day (sub)"
        );
    }

    #[test]
    fn test_inject_fixed_feasts() {
        let mut map = HolidayMap::new();
        let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        map.insert(christmas, "Xmas");

        inject_fixed_feasts(&mut map, 2024).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&christmas), Some("Christmas Day"));
        assert_eq!(
            map.get(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
            Some("Easter Sunday")
        );
        assert_eq!(
            map.get(&NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()),
            Some("Boxing Day")
        );
    }
}
