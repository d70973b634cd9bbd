use std::collections::HashMap;

use chrono::NaiveDate;
use shared_types::{Holiday, HolidayKind};

use crate::utils::date::canonical_key;

/// Holiday records grouped by their canonical `YYYY-MM-DD` key.
///
/// Rebuilt as a pure derivation whenever the backing record list changes;
/// several holidays may share a date, and input order is preserved within
/// each group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HolidayIndex {
    by_date: HashMap<String, Vec<Holiday>>,
}

/// The records at one date, partitioned by kind. Unrecognized kinds are
/// dropped here: they neither block nor annotate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayHolidays {
    pub national: Vec<String>,
    pub observances: Vec<String>,
}

impl DayHolidays {
    pub fn has_national(&self) -> bool {
        !self.national.is_empty()
    }
}

impl HolidayIndex {
    pub fn from_records(records: &[Holiday]) -> Self {
        let mut by_date: HashMap<String, Vec<Holiday>> = HashMap::new();
        for record in records {
            by_date
                .entry(record.date.clone())
                .or_default()
                .push(record.clone());
        }
        Self { by_date }
    }

    pub fn at(&self, key: &str) -> &[Holiday] {
        self.by_date.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn classify(&self, date: NaiveDate) -> DayHolidays {
        let mut day = DayHolidays::default();
        for record in self.at(&canonical_key(date)) {
            match record.kind {
                HolidayKind::NationalHoliday => day.national.push(record.name.clone()),
                HolidayKind::Observance => day.observances.push(record.name.clone()),
                HolidayKind::Other => {}
            }
        }
        day
    }
}

/// Keeps only the records whose key falls in the requested year. The
/// holiday source returns every year it knows about, so the prefix match
/// happens on our side.
pub fn filter_to_year(records: Vec<Holiday>, year: i32) -> Vec<Holiday> {
    let prefix = format!("{year}-");
    records
        .into_iter()
        .filter(|h| h.date.starts_with(&prefix))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// State machine behind the holiday fetch.
///
/// `begin` hands out a token and invalidates any outstanding one; a
/// completion arriving with a stale token is silently discarded, updating
/// neither data nor the error flag. That is the whole cancellation
/// contract: superseded and torn-down requests can never touch state.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayLoad {
    generation: u64,
    phase: LoadPhase,
    records: Vec<Holiday>,
}

impl Default for HolidayLoad {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayLoad {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: LoadPhase::Idle,
            records: Vec::new(),
        }
    }

    /// Starts a new load, superseding any in-flight one. Returns the token
    /// the eventual completion must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }

    pub fn succeed(&mut self, token: u64, records: Vec<Holiday>) -> bool {
        if token != self.generation {
            return false;
        }
        self.records = records;
        self.phase = LoadPhase::Ready;
        true
    }

    /// Marks the current load failed. Previously cached records are kept so
    /// the calendar stays usable with whatever data it had.
    pub fn fail(&mut self, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.phase = LoadPhase::Failed;
        true
    }

    /// Invalidates the outstanding token without surfacing an error; used
    /// on teardown. Cancellation is not a failure.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn failed(&self) -> bool {
        self.phase == LoadPhase::Failed
    }

    pub fn records(&self) -> &[Holiday] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(name: &str, date: &str, kind: HolidayKind) -> Holiday {
        Holiday {
            name: name.to_string(),
            date: date.to_string(),
            country: "PL".to_string(),
            kind,
        }
    }

    #[test]
    fn index_groups_by_date_preserving_order() {
        let records = vec![
            holiday("Constitution Day", "2024-05-03", HolidayKind::NationalHoliday),
            holiday("Flag Day", "2024-05-02", HolidayKind::Observance),
            holiday("Polonia Day", "2024-05-02", HolidayKind::Observance),
        ];
        let index = HolidayIndex::from_records(&records);
        assert_eq!(index.at("2024-05-03").len(), 1);
        let names: Vec<_> = index.at("2024-05-02").iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Flag Day", "Polonia Day"]);
        assert!(index.at("2024-05-04").is_empty());
    }

    #[test]
    fn classify_partitions_by_kind() {
        let records = vec![
            holiday("Independence Day", "2024-11-11", HolidayKind::NationalHoliday),
            holiday("St. Martin's Day", "2024-11-11", HolidayKind::Observance),
            holiday("Mystery Day", "2024-11-11", HolidayKind::Other),
        ];
        let index = HolidayIndex::from_records(&records);
        let day = index.classify(NaiveDate::from_ymd_opt(2024, 11, 11).unwrap());
        assert_eq!(day.national, ["Independence Day"]);
        assert_eq!(day.observances, ["St. Martin's Day"]);
        assert!(day.has_national());
    }

    #[test]
    fn year_filter_keeps_only_requested_year() {
        let records = vec![
            holiday("Epiphany", "2023-01-06", HolidayKind::NationalHoliday),
            holiday("Epiphany", "2024-01-06", HolidayKind::NationalHoliday),
            holiday("New Year", "2025-01-01", HolidayKind::NationalHoliday),
        ];
        let kept = filter_to_year(records, 2024);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, "2024-01-06");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut load = HolidayLoad::new();
        let first = load.begin();
        let second = load.begin();

        // The superseded request finishes later, in either direction.
        assert!(!load.succeed(first, vec![holiday("Old", "2024-01-01", HolidayKind::Observance)]));
        assert!(!load.fail(first));
        assert!(load.loading());
        assert!(load.records().is_empty());

        assert!(load.succeed(second, vec![holiday("New", "2025-01-01", HolidayKind::Observance)]));
        assert_eq!(load.records()[0].name, "New");
        assert!(!load.failed());
    }

    #[test]
    fn failure_keeps_cached_records() {
        let mut load = HolidayLoad::new();
        let token = load.begin();
        assert!(load.succeed(token, vec![holiday("Kept", "2024-06-01", HolidayKind::Observance)]));

        let retry = load.begin();
        assert!(load.loading());
        assert!(load.fail(retry));
        assert!(load.failed());
        assert_eq!(load.records().len(), 1);
    }

    #[test]
    fn cancellation_is_not_an_error() {
        let mut load = HolidayLoad::new();
        let token = load.begin();
        load.cancel();

        assert!(!load.loading());
        assert!(!load.failed());
        assert!(!load.succeed(token, vec![holiday("Ghost", "2024-01-01", HolidayKind::Other)]));
        assert!(!load.fail(token));
        assert!(load.records().is_empty());
    }
}
