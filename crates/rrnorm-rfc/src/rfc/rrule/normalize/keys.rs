use chrono::{DateTime, Utc};

use super::Constraints;
use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{Frequency, Weekday};
use crate::rfc::rrule::options::{FrequencyValue, OneOrMany, RawOptions, WeekdayValue};

pub const DEFAULT_FREQUENCY: Frequency = Frequency::Yearly;
pub const DEFAULT_INTERVAL: u32 = 1;
pub const DEFAULT_WKST: Weekday = Weekday::Monday;

/// Options after defaults have been applied. Fields that stay `Option` use
/// `None` as their default.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Merged {
    pub freq: FrequencyValue,
    pub dtstart: Option<DateTime<Utc>>,
    pub interval: u32,
    pub wkst: WeekdayValue,
    pub count: Option<u32>,
    pub until: Option<DateTime<Utc>>,
    pub tzid: Option<String>,
    pub bysetpos: Option<OneOrMany<i32>>,
    pub constraints: Constraints,
}

/// ## Summary
/// Rejects option sets carrying names outside the recognized key set.
///
/// ## Errors
/// Returns `InvalidOptionKey` listing every unrecognized name, in sorted order.
pub(super) fn validate_keys(raw: &RawOptions) -> RfcResult<()> {
    if raw.unrecognized.is_empty() {
        return Ok(());
    }

    let keys: Vec<String> = raw.unrecognized.keys().cloned().collect();
    tracing::warn!(keys = ?keys, "Rejecting unrecognized recurrence options");
    Err(RfcError::InvalidOptionKey(keys))
}

/// Fills every absent field with its default.
pub(super) fn merge_defaults(raw: RawOptions) -> Merged {
    Merged {
        freq: raw.freq.unwrap_or_else(|| DEFAULT_FREQUENCY.into()),
        dtstart: raw.dtstart,
        interval: raw.interval.unwrap_or(DEFAULT_INTERVAL),
        wkst: raw.wkst.unwrap_or(WeekdayValue::Code(DEFAULT_WKST)),
        count: raw.count,
        until: raw.until,
        tzid: raw.tzid,
        bysetpos: raw.bysetpos,
        constraints: Constraints {
            bymonth: raw.bymonth,
            bymonthday: raw.bymonthday,
            byyearday: raw.byyearday,
            byweekno: raw.byweekno,
            byweekday: raw.byweekday,
            byhour: raw.byhour,
            byminute: raw.byminute,
            bysecond: raw.bysecond,
            byeaster: raw.byeaster,
        },
    }
}
