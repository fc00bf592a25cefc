//! Recurrence options before and after normalization.

mod canonical;
mod raw;

pub use canonical::CanonicalOptions;
pub use raw::{
    FrequencyValue, OneOrMany, RECOGNIZED_KEYS, RawOptions, WeekdayToken, WeekdayValue,
};
