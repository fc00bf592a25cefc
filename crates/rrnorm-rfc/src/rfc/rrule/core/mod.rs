//! Recurrence rule value types (RFC 5545 §3.3.10).

mod frequency;
mod time;
mod weekday;

pub use frequency::Frequency;
pub use time::TimeOfDay;
pub use weekday::{MAX_ORDINAL, Weekday, WeekdayNum};
