//! Shared shaping helpers for chart payloads: placeholder padding, month
//! bucket zero-fill, and semester classification.

use std::collections::BTreeMap;

use crate::charts::org::CategoryCount;

pub const PLACEHOLDER_LABEL: &str = "Placeholder";

/// Pad `rows` with zero-count placeholder entries until at least `min` rows
/// exist. Never truncates; queries cap the upper bound with LIMIT.
pub fn pad_to_minimum(rows: &mut Vec<CategoryCount>, min: usize) {
    while rows.len() < min {
        rows.push(CategoryCount {
            label: PLACEHOLDER_LABEL.to_string(),
            count: 0,
        });
    }
}

/// The twelve month bucket keys, "01" through "12".
pub fn month_keys() -> impl Iterator<Item = String> {
    (1..=12).map(|m| format!("{m:02}"))
}

/// Fresh all-zero month map. BTreeMap keeps the zero-padded keys in
/// ascending order when serialized.
pub fn zero_filled_months() -> BTreeMap<String, i64> {
    month_keys().map(|k| (k, 0)).collect()
}

/// Three-letter abbreviation for a 1-based month number.
pub fn month_abbr(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => unreachable!("month out of range: {month}"),
    }
}

/// Half-year bucket for membership trends. Fall is declared first so the
/// derived ordering matches the string sort the trend labels use
/// ("Fall" < "Spring").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    /// Classify a 1-based month. Exhaustive over 1..=12: months 1-6 are
    /// Spring, 7-12 are Fall, so no record is ever left unbucketed.
    pub fn from_month(month: u32) -> Semester {
        match month {
            1..=6 => Semester::Spring,
            7..=12 => Semester::Fall,
            _ => unreachable!("month out of range: {month}"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Spring => "Spring",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_minimum_appends_placeholders() {
        let mut rows = vec![
            CategoryCount { label: "Engineering".into(), count: 4 },
            CategoryCount { label: "Nursing".into(), count: 2 },
        ];
        pad_to_minimum(&mut rows, 7);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].label, "Engineering");
        for row in &rows[2..] {
            assert_eq!(row.label, PLACEHOLDER_LABEL);
            assert_eq!(row.count, 0);
        }
    }

    #[test]
    fn test_pad_to_minimum_never_truncates() {
        let mut rows: Vec<CategoryCount> = (0..9)
            .map(|i| CategoryCount { label: format!("c{i}"), count: i })
            .collect();
        pad_to_minimum(&mut rows, 5);
        assert_eq!(rows.len(), 9);
    }

    #[test]
    fn test_zero_filled_months_covers_all_buckets() {
        let months = zero_filled_months();
        assert_eq!(months.len(), 12);
        let keys: Vec<&String> = months.keys().collect();
        assert_eq!(keys.first().map(|s| s.as_str()), Some("01"));
        assert_eq!(keys.last().map(|s| s.as_str()), Some("12"));
        assert!(months.values().all(|&v| v == 0));
    }

    #[test]
    fn test_month_abbr_calendar_order() {
        let abbrs: Vec<&str> = (1..=12).map(month_abbr).collect();
        assert_eq!(abbrs[0], "Jan");
        assert_eq!(abbrs[11], "Dec");
        assert_eq!(abbrs.len(), 12);
    }

    #[test]
    fn test_semester_classification_is_exhaustive() {
        for month in 1..=6 {
            assert_eq!(Semester::from_month(month), Semester::Spring);
        }
        for month in 7..=12 {
            assert_eq!(Semester::from_month(month), Semester::Fall);
        }
    }

    #[test]
    fn test_semester_ordering_matches_label_sort() {
        // Trend rows sort by (year, semester); Fall precedes Spring the way
        // the label strings do.
        assert!(Semester::Fall < Semester::Spring);
        assert!(Semester::Fall.label() < Semester::Spring.label());
    }
}
