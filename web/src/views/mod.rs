pub mod booking;

pub use booking::BookingPage;
