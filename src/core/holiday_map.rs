//! Date to label mapping used for highlighting and annotation

use std::collections::btree_map::{self, BTreeMap};

use chrono::{Datelike, NaiveDate};

/// Holiday labels keyed by date
///
/// Keys are unique; inserting or merging an existing date replaces its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayMap {
    entries: BTreeMap<NaiveDate, String>,
}

impl HolidayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, returning the label it replaced
    pub fn insert(&mut self, date: NaiveDate, label: impl Into<String>) -> Option<String> {
        self.entries.insert(date, label.into())
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&str> {
        self.entries.get(date).map(String::as_str)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.entries.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in date order
    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, String> {
        self.entries.iter()
    }

    /// Merge `other` into this map; labels from `other` win on conflict
    pub fn merge(&mut self, other: HolidayMap) {
        self.entries.extend(other.entries);
    }

    /// Number of entries falling in `year`
    pub fn count_in_year(&self, year: i32) -> usize {
        self.entries.keys().filter(|d| d.year() == year).count()
    }
}

impl<S: Into<String>> FromIterator<(NaiveDate, S)> for HolidayMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, S)>>(iter: I) -> Self {
        let mut map = HolidayMap::new();
        map.extend(iter);
        map
    }
}

impl<S: Into<String>> Extend<(NaiveDate, S)> for HolidayMap {
    fn extend<I: IntoIterator<Item = (NaiveDate, S)>>(&mut self, iter: I) {
        for (date, label) in iter {
            self.entries.insert(date, label.into());
        }
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a NaiveDate, &'a String);
    type IntoIter = btree_map::Iter<'a, NaiveDate, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_write_wins() {
        let map: HolidayMap = vec![
            (date(2024, 12, 25), "Christmas"),
            (date(2024, 12, 25), "Christmas Day"),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&date(2024, 12, 25)), Some("Christmas Day"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = HolidayMap::new();
        base.insert(date(2024, 1, 1), "New Year");
        base.insert(date(2024, 5, 6), "Early May bank holiday");

        let mut overlay = HolidayMap::new();
        overlay.insert(date(2024, 1, 1), "New Year's Day");

        base.merge(overlay);
        assert_eq!(base.len(), 2);
        assert_eq!(base.get(&date(2024, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn test_iteration_is_date_ordered() {
        let map: HolidayMap = vec![
            (date(2024, 12, 26), "Boxing Day"),
            (date(2024, 3, 31), "Easter Sunday"),
        ]
        .into_iter()
        .collect();

        let dates: Vec<_> = map.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![date(2024, 3, 31), date(2024, 12, 26)]);
    }

    #[test]
    fn test_count_in_year() {
        let map: HolidayMap = vec![
            (date(2023, 12, 25), "Christmas Day"),
            (date(2024, 12, 25), "Christmas Day"),
            (date(2024, 12, 26), "Boxing Day"),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.count_in_year(2024), 2);
        assert_eq!(map.count_in_year(2025), 0);
    }
}
