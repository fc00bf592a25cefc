use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rfc::rrule::core::{Frequency, Weekday};

/// Fully populated recurrence options, ready for occurrence expansion.
///
/// Every BY* field is either a list or `None`, where `None` means the field
/// does not constrain occurrences. Month days and weekdays are split into
/// disjoint buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalOptions {
    pub freq: Frequency,
    pub dtstart: DateTime<Utc>,
    pub interval: u32,
    pub wkst: Weekday,
    pub count: Option<u32>,
    pub until: Option<DateTime<Utc>>,
    pub tzid: Option<String>,
    pub bysetpos: Option<Vec<i32>>,
    pub bymonth: Option<Vec<u8>>,
    /// Positive month days.
    pub bymonthday: Vec<i8>,
    /// Negative month days, counted from the end of the month.
    pub bynmonthday: Vec<i8>,
    pub byyearday: Option<Vec<i16>>,
    pub byweekno: Option<Vec<i8>>,
    /// Weekdays matched on every occurrence.
    pub byweekday: Option<Vec<Weekday>>,
    /// Weekdays matched only on their n-th occurrence within the period.
    pub bynweekday: Option<Vec<(Weekday, i8)>>,
    pub byhour: Option<Vec<u8>>,
    pub byminute: Option<Vec<u8>>,
    pub bysecond: Option<Vec<u8>>,
    pub byeaster: Option<i16>,
}

impl CanonicalOptions {
    /// Sub-second part of DTSTART in milliseconds.
    #[must_use]
    pub fn millisecond_remainder(&self) -> u32 {
        self.dtstart.timestamp_subsec_millis()
    }

    /// Resolves `tzid` to an IANA timezone, if it names one.
    #[must_use]
    pub fn timezone(&self) -> Option<chrono_tz::Tz> {
        self.tzid.as_deref()?.parse().ok()
    }
}
