//! Normalization of partially specified recurrence options.
//!
//! The pipeline runs in a fixed order and stops at the first error:
//! 1. reject unrecognized option names
//! 2. apply defaults
//! 3. resolve the frequency (BYEASTER forces `YEARLY`)
//! 4. resolve DTSTART and WKST
//! 5. validate BYSETPOS
//! 6. derive a day selector from DTSTART when none is given
//! 7. bring every BY* field into list form, splitting signed and ordinal values
//! 8. build the time-of-day set for daily and coarser rules

mod anchor;
mod fields;
mod implicit;
mod keys;
mod setpos;
mod timeset;


use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::RfcResult;
use crate::rfc::rrule::core::{Frequency, TimeOfDay};
use crate::rfc::rrule::options::{CanonicalOptions, OneOrMany, RawOptions, WeekdayValue};

pub use keys::{DEFAULT_FREQUENCY, DEFAULT_INTERVAL, DEFAULT_WKST};
pub use setpos::{MAX_SETPOS, is_valid_setpos};
pub use timeset::build_timeset;

/// Result of normalizing a set of recurrence options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub options: CanonicalOptions,
    /// Times of day for daily and coarser rules, `None` for hourly and finer.
    pub timeset: Option<Vec<TimeOfDay>>,
}

/// BY* rule parts while they are being derived and reshaped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Constraints {
    pub bymonth: Option<OneOrMany<u8>>,
    pub bymonthday: Option<OneOrMany<i8>>,
    pub byyearday: Option<OneOrMany<i16>>,
    pub byweekno: Option<OneOrMany<i8>>,
    pub byweekday: Option<OneOrMany<WeekdayValue>>,
    pub byhour: Option<OneOrMany<u8>>,
    pub byminute: Option<OneOrMany<u8>>,
    pub bysecond: Option<OneOrMany<u8>>,
    pub byeaster: Option<i16>,
}

/// ## Summary
/// Normalizes recurrence options, defaulting DTSTART to the current time.
///
/// ## Errors
/// Returns an error if an option name is unrecognized, the frequency is
/// unknown, or a BYSETPOS value is out of range.
///
/// ## Side Effects
/// Reads the system clock when DTSTART is absent.
pub fn normalize(raw: RawOptions) -> RfcResult<Normalized> {
    normalize_at(raw, Utc::now())
}

/// ## Summary
/// Normalizes recurrence options, using `now` when DTSTART is absent.
///
/// ## Errors
/// Returns an error if an option name is unrecognized, the frequency is
/// unknown, or a BYSETPOS value is out of range.
#[tracing::instrument(level = "debug", skip_all)]
pub fn normalize_at(raw: RawOptions, now: DateTime<Utc>) -> RfcResult<Normalized> {
    keys::validate_keys(&raw)?;
    let merged = keys::merge_defaults(raw);

    let freq = anchor::resolve_frequency(merged.freq, merged.constraints.byeaster)?;
    let anchor = anchor::resolve_anchor(merged.dtstart, merged.wkst, now);
    let bysetpos = setpos::validate_setpos(merged.bysetpos)?;

    let constraints = implicit::derive_implicit(merged.constraints, freq, anchor.dtstart);

    let dtstart = anchor.dtstart;
    let (bymonthday, bynmonthday) = fields::split_monthdays(constraints.bymonthday);
    let (byweekday, bynweekday) = fields::split_weekdays(constraints.byweekday, freq);

    let options = CanonicalOptions {
        freq,
        dtstart,
        interval: merged.interval,
        wkst: anchor.wkst,
        count: merged.count,
        until: merged.until,
        tzid: merged.tzid,
        bysetpos,
        bymonth: fields::promote(constraints.bymonth),
        bymonthday,
        bynmonthday,
        byyearday: fields::promote(constraints.byyearday),
        byweekno: fields::promote(constraints.byweekno),
        byweekday,
        bynweekday,
        byhour: fields::time_field(
            constraints.byhour,
            freq,
            Frequency::Hourly,
            narrow(dtstart.hour()),
        ),
        byminute: fields::time_field(
            constraints.byminute,
            freq,
            Frequency::Minutely,
            narrow(dtstart.minute()),
        ),
        bysecond: fields::time_field(
            constraints.bysecond,
            freq,
            Frequency::Secondly,
            narrow(dtstart.second()),
        ),
        byeaster: constraints.byeaster,
    };

    let timeset = build_timeset(&options);
    tracing::debug!(
        freq = %options.freq,
        timeset = timeset.as_ref().map(Vec::len),
        "Normalized recurrence options"
    );

    Ok(Normalized { options, timeset })
}

/// Returns `true` for a present value that is not an empty list.
fn is_set<T>(value: Option<&OneOrMany<T>>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Narrows a chrono calendar or clock field (never above 60).
#[expect(
    clippy::cast_possible_truncation,
    reason = "chrono calendar and clock fields are at most 60"
)]
fn narrow(value: u32) -> u8 {
    value as u8
}

/// Narrows a chrono day-of-month (1..=31) to a signed month day.
#[expect(
    clippy::cast_possible_truncation,
    reason = "chrono day-of-month is at most 31"
)]
fn narrow_signed(value: u32) -> i8 {
    value as i8
}
