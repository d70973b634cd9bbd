pub mod calendar;
pub mod email_field;
pub mod photo_field;
pub mod time_slots;
pub mod use_holidays;

// Re-export commonly used types
pub use calendar::Calendar;
pub use email_field::EmailField;
pub use photo_field::PhotoField;
pub use time_slots::TimeSlots;
pub use use_holidays::{use_holidays, HolidaysHandle};
