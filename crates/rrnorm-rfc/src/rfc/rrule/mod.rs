//! RFC 5545 recurrence rules: value types, options and normalization.
//!
//! [`normalize`] turns sparse [`RawOptions`] into [`CanonicalOptions`] that an
//! occurrence expander can walk without re-checking which fields are set.

pub mod core;
pub mod normalize;
pub mod options;

pub use self::core::{Frequency, TimeOfDay, Weekday, WeekdayNum};
pub use normalize::{Normalized, build_timeset, normalize, normalize_at};
pub use options::{CanonicalOptions, OneOrMany, RawOptions, WeekdayValue};
