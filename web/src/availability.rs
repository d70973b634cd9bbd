use chrono::NaiveDate;

use crate::holidays::HolidayIndex;
use crate::utils::date::is_sunday;

/// Holiday annotation for a date. National holidays take display precedence:
/// observance text is never shown when a national holiday shares the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    National { names: Vec<String> },
    Observance { names: Vec<String> },
}

impl Annotation {
    /// Comma-joined names for display ("It is <names>.").
    pub fn display_names(&self) -> String {
        match self {
            Annotation::National { names } | Annotation::Observance { names } => names.join(", "),
        }
    }
}

/// What the calendar needs to know about one date. Valid for any cell of
/// the rendered matrix, in or out of the active month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub blocked: bool,
    pub annotation: Option<Annotation>,
}

/// A date cannot be booked on Sundays or national holidays. Observances
/// alone never block.
pub fn is_blocked(date: NaiveDate, index: &HolidayIndex) -> bool {
    is_sunday(date) || index.classify(date).has_national()
}

pub fn annotate(date: NaiveDate, index: &HolidayIndex) -> Option<Annotation> {
    let day = index.classify(date);
    if day.has_national() {
        Some(Annotation::National { names: day.national })
    } else if !day.observances.is_empty() {
        Some(Annotation::Observance { names: day.observances })
    } else {
        None
    }
}

pub fn verdict(date: NaiveDate, index: &HolidayIndex) -> Verdict {
    Verdict {
        blocked: is_blocked(date, index),
        annotation: annotate(date, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Holiday, HolidayKind};

    fn holiday(name: &str, date: &str, kind: HolidayKind) -> Holiday {
        Holiday {
            name: name.to_string(),
            date: date.to_string(),
            country: "PL".to_string(),
            kind,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sundays_are_blocked_regardless_of_index() {
        let empty = HolidayIndex::default();
        let loaded = HolidayIndex::from_records(&[holiday(
            "Some Day",
            "2024-02-05",
            HolidayKind::Observance,
        )]);
        // Every Sunday of February 2024.
        for d in [4, 11, 18, 25] {
            assert!(is_blocked(date(2024, 2, d), &empty));
            assert!(is_blocked(date(2024, 2, d), &loaded));
        }
    }

    #[test]
    fn national_holidays_block_weekdays() {
        let index = HolidayIndex::from_records(&[holiday(
            "Constitution Day",
            "2024-05-03",
            HolidayKind::NationalHoliday,
        )]);
        assert!(is_blocked(date(2024, 5, 3), &index));
        assert!(!is_blocked(date(2024, 5, 6), &index));
    }

    #[test]
    fn observances_do_not_block() {
        let index = HolidayIndex::from_records(&[holiday(
            "Grandmother's Day",
            "2024-01-22",
            HolidayKind::Observance,
        )]);
        assert!(!is_blocked(date(2024, 1, 22), &index));
        assert_eq!(
            annotate(date(2024, 1, 22), &index),
            Some(Annotation::Observance {
                names: vec!["Grandmother's Day".to_string()]
            })
        );
    }

    #[test]
    fn national_annotation_wins_over_observance() {
        let index = HolidayIndex::from_records(&[
            holiday("St. Martin's Day", "2024-11-11", HolidayKind::Observance),
            holiday("Independence Day", "2024-11-11", HolidayKind::NationalHoliday),
        ]);
        let v = verdict(date(2024, 11, 11), &index);
        assert!(v.blocked);
        assert_eq!(
            v.annotation,
            Some(Annotation::National {
                names: vec!["Independence Day".to_string()]
            })
        );
    }

    #[test]
    fn multiple_names_join_for_display() {
        let index = HolidayIndex::from_records(&[
            holiday("Christmas Day", "2024-12-25", HolidayKind::NationalHoliday),
            holiday("First Day of Christmastide", "2024-12-25", HolidayKind::NationalHoliday),
        ]);
        let annotation = annotate(date(2024, 12, 25), &index).unwrap();
        assert_eq!(
            annotation.display_names(),
            "Christmas Day, First Day of Christmastide"
        );
    }

    #[test]
    fn unrecognized_kinds_neither_block_nor_annotate() {
        let index = HolidayIndex::from_records(&[holiday(
            "Mystery Day",
            "2024-07-10",
            HolidayKind::Other,
        )]);
        assert!(!is_blocked(date(2024, 7, 10), &index));
        assert_eq!(annotate(date(2024, 7, 10), &index), None);
    }
}
