//! Gregorian computus

use chrono::NaiveDate;

use crate::utils::error::{CalendarError, CalendarResult};

/// Date of Easter Sunday in the Gregorian calendar
///
/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher).
pub fn easter_sunday(year: i32) -> CalendarResult<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CalendarError::invalid_range(format!("no Easter date for year {}", year)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_easters() {
        let known = [
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(
                easter_sunday(y).unwrap(),
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                "Easter {}",
                y
            );
        }
    }
}
