use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A month rendered as Monday-first week rows. Leading and trailing cells
/// spill into the adjacent months.
pub type MonthMatrix = Vec<[NaiveDate; 7]>;

/// Canonical `YYYY-MM-DD` key for a calendar date. This string is the sole
/// join key between calendar cells and holiday records, so it must stay
/// zero-padded and locale-independent.
pub fn canonical_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Builds the calendar grid for the given month (`month0` is zero-based,
/// 0 = January).
///
/// The first cell is the Monday on or before the 1st of the month; if the
/// month starts on a Monday the first row starts exactly on the 1st. Row
/// count is `ceil((leading + days_in_month) / 7)`, so flattening the matrix
/// always yields a contiguous run of days with no gaps or duplicates.
pub fn build_month_matrix(year: i32, month0: u32) -> MonthMatrix {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("month0 must be in 0..=11");
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    }
    .expect("first day of the following month is always valid");

    let leading = i64::from(first.weekday().num_days_from_monday());
    let days_in_month = (next_first - first).num_days();
    let rows = (leading + days_in_month + 6) / 7;

    let start = first - Duration::days(leading);
    (0..rows)
        .map(|r| std::array::from_fn(|c| start + Duration::days(r * 7 + c as i64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(canonical_key(d), "2024-03-07");
    }

    #[test]
    fn canonical_key_round_trips() {
        for (y, m, d) in [(2024, 1, 1), (2024, 12, 31), (2025, 2, 9), (1999, 10, 30)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let parsed = NaiveDate::parse_from_str(&canonical_key(date), "%Y-%m-%d").unwrap();
            assert_eq!(parsed, date);
        }
    }

    #[test]
    fn sunday_detection() {
        assert!(is_sunday(NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()));
        assert!(!is_sunday(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()));
    }

    #[test]
    fn matrix_is_contiguous_and_starts_on_monday() {
        for year in 2000..=2099 {
            for month0 in 0..12 {
                let matrix = build_month_matrix(year, month0);
                let flat: Vec<_> = matrix.iter().flatten().copied().collect();
                assert_eq!(flat[0].weekday(), Weekday::Mon, "{year}-{month0}");
                for pair in flat.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1), "{year}-{month0}");
                }

                // Exactly enough rows to span the leading days plus the
                // whole month, never a fully-spilled extra row.
                let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
                assert!(flat[6] >= first, "{year}-{month0}");
                assert!(matrix.last().unwrap()[0].month0() == month0, "{year}-{month0}");
            }
        }
    }

    #[test]
    fn february_2024_layout() {
        // Leap year, Feb 1 is a Thursday.
        let matrix = build_month_matrix(2024, 1);
        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix[0][0], NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
        assert_eq!(matrix[0][3], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(matrix[4][6], NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_spill() {
        // January 2024 starts on a Monday.
        let matrix = build_month_matrix(2024, 0);
        assert_eq!(matrix[0][0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
