use chrono::NaiveDate;
use thiserror::Error;

use crate::availability::is_blocked;
use crate::holidays::HolidayIndex;
use crate::utils::date::canonical_key;

/// The bookable time slots, as shown in the time column.
pub const TIME_SLOTS: [&str; 5] = ["12:00", "14:00", "16:30", "18:30", "20:00"];

pub const AGE_MIN: u8 = 0;
pub const AGE_MAX: u8 = 100;
pub const AGE_DEFAULT: u8 = 25;

/// Content-type prefixes the photo/document upload accepts.
const ALLOWED_PHOTO_PREFIXES: [&str; 2] = ["image/", "application/pdf"];

/// An accepted upload. Only the declared content type is inspected; the
/// bytes themselves stay with the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub name: String,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Only images (JPG/PNG) and PDFs are allowed.")]
    UnsupportedType,
}

/// Validates a picked file by its declared content type. On rejection the
/// caller must drop any previously accepted photo and surface the error
/// inline.
pub fn accept_photo(name: &str, content_type: &str) -> Result<Photo, PhotoError> {
    if ALLOWED_PHOTO_PREFIXES
        .iter()
        .any(|prefix| content_type.starts_with(prefix))
    {
        Ok(Photo {
            name: name.to_string(),
            content_type: content_type.to_string(),
        })
    } else {
        Err(PhotoError::UnsupportedType)
    }
}

/// Structural email check backing the inline field validation: one `@`,
/// non-empty local part, and a dot inside the domain.
pub fn email_format_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
        }
        None => false,
    }
}

/// The month currently shown by the calendar. Navigation is clamped to
/// January..=December of the view year; there is no year navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month0: u32,
}

impl MonthView {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0.min(11),
        }
    }

    pub fn can_prev(&self) -> bool {
        self.month0 > 0
    }

    pub fn can_next(&self) -> bool {
        self.month0 < 11
    }

    /// Previous month, clamped: at January this is a no-op.
    pub fn prev(self) -> Self {
        Self {
            month0: self.month0.saturating_sub(1),
            ..self
        }
    }

    /// Next month, clamped: at December this is a no-op.
    pub fn next(self) -> Self {
        Self {
            month0: (self.month0 + 1).min(11),
            ..self
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        date.year() == self.year && date.month0() == self.month0
    }
}

/// The mutable booking selection for one form session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub photo: Option<Photo>,
    pub date: Option<NaiveDate>,
    pub time: Option<&'static str>,
}

/// A time slot can only be picked while a date is selected and that date is
/// not blocked.
pub fn time_pickable(date: Option<NaiveDate>, index: &HolidayIndex) -> bool {
    date.is_some_and(|d| !is_blocked(d, index))
}

impl Selection {
    pub fn select_date(&mut self, date: NaiveDate, index: &HolidayIndex) {
        self.date = Some(date);
        self.reconcile(index);
    }

    /// Called on month navigation: the date selection does not survive a
    /// month change, and the time slot falls with it.
    pub fn clear_date(&mut self, index: &HolidayIndex) {
        self.date = None;
        self.reconcile(index);
    }

    /// Drops the chosen time slot whenever the selected date is absent or
    /// blocked. Must be re-run every time the holiday index updates: a date
    /// picked while data was still loading may turn out to be a national
    /// holiday.
    pub fn reconcile(&mut self, index: &HolidayIndex) {
        if self.time.is_some() && !time_pickable(self.date, index) {
            self.time = None;
        }
    }
}

/// Everything the submission boundary receives once the gate opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionBundle {
    pub photo_name: String,
    pub age: u8,
    pub date_key: String,
    pub time: &'static str,
}

impl SubmissionBundle {
    /// The flat key→value form of the bundle; delivery transport is out of
    /// scope.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("photo", self.photo_name.clone()),
            ("age", self.age.to_string()),
            ("date", self.date_key.clone()),
            ("time", self.time.to_string()),
        ]
    }
}

/// Submit-enablement as an explicit tagged state instead of a boolean
/// conjunction scattered across callbacks. Submission is possible only in
/// `Complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Empty,
    Partial {
        has_photo: bool,
        has_date: bool,
        has_time: bool,
        date_blocked: bool,
    },
    Complete(SubmissionBundle),
}

impl GateState {
    pub fn submit_enabled(&self) -> bool {
        matches!(self, GateState::Complete(_))
    }
}

/// Total gate predicate over the selection. A selected-but-blocked date
/// keeps the gate closed even when everything else is present.
pub fn evaluate_gate(selection: &Selection, age: u8, index: &HolidayIndex) -> GateState {
    let date_blocked = selection.date.is_some_and(|d| is_blocked(d, index));
    match (&selection.photo, selection.date, selection.time) {
        (Some(photo), Some(date), Some(time)) if !date_blocked => {
            GateState::Complete(SubmissionBundle {
                photo_name: photo.name.clone(),
                age,
                date_key: canonical_key(date),
                time,
            })
        }
        (None, None, None) => GateState::Empty,
        (photo, date, time) => GateState::Partial {
            has_photo: photo.is_some(),
            has_date: date.is_some(),
            has_time: time.is_some(),
            date_blocked,
        },
    }
}
