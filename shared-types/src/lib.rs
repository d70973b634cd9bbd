use serde::{Deserialize, Serialize};

/// Holiday categories as emitted by the external holiday API.
///
/// The API is free to grow new category strings; anything we don't
/// recognize lands in `Other` and is treated as neither blocking nor
/// worth annotating.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    NationalHoliday,
    Observance,
    #[serde(other)]
    Other,
}

/// One holiday record from the external holiday API.
///
/// `date` is the canonical zero-padded `YYYY-MM-DD` key; it is used
/// verbatim as the join key against calendar dates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub date: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}
