//! User-supplied, partially specified recurrence options.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{Frequency, Weekday, WeekdayNum};

/// Option names accepted by [`RawOptions`].
pub const RECOGNIZED_KEYS: [&str; 17] = [
    "freq",
    "dtstart",
    "interval",
    "wkst",
    "count",
    "until",
    "tzid",
    "bysetpos",
    "bymonth",
    "bymonthday",
    "byyearday",
    "byweekno",
    "byweekday",
    "byhour",
    "byminute",
    "bysecond",
    "byeaster",
];

/// A BY* value given either as a single scalar or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    // Lists are tried first so that a two-element list is never read as a
    // single structured value.
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Promotes a scalar to a one-element list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }

    /// Returns `true` for an empty list. A scalar is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(values) if values.is_empty())
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// A frequency as supplied: a numeric code, an RFC 5545 name, or any other
/// JSON value.
///
/// Resolution against [`Frequency`] happens during normalization so that an
/// unknown value is reported as an invalid frequency rather than a shape error,
/// and so that BYEASTER can still override it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FrequencyValue {
    Code(i64),
    Name(String),
    /// Never resolves.
    Other(serde_json::Value),
}

impl FrequencyValue {
    /// Looks the value up in the frequency enum.
    #[must_use]
    pub fn resolve(&self) -> Option<Frequency> {
        match self {
            Self::Code(code) => Frequency::from_code(*code),
            Self::Name(name) => Frequency::parse(name),
            Self::Other(_) => None,
        }
    }
}

impl From<Frequency> for FrequencyValue {
    fn from(freq: Frequency) -> Self {
        Self::Code(i64::from(freq.code()))
    }
}

impl fmt::Display for FrequencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Name(name) => write!(f, "{name:?}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// A weekday as supplied: a bare code, or a token with an optional ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WeekdayValue {
    Code(Weekday),
    Token(WeekdayNum),
}

/// A weekday after classification against the active frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayToken {
    /// Every occurrence of the weekday.
    Plain(Weekday),
    /// The n-th occurrence of the weekday within the month or year.
    Ordinal(Weekday, i8),
}

impl WeekdayValue {
    /// Returns the bare weekday, dropping any ordinal.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Code(weekday) => weekday,
            Self::Token(token) => token.weekday,
        }
    }

    /// ## Summary
    /// Decides whether this value selects every matching weekday or only the
    /// n-th one.
    ///
    /// Ordinals only survive under yearly and monthly rules; for weekly and
    /// finer frequencies they are discarded.
    #[must_use]
    pub fn classify(self, freq: Frequency) -> WeekdayToken {
        match self {
            Self::Token(WeekdayNum {
                ordinal: Some(n),
                weekday,
            }) if !freq.is_finer_than(Frequency::Monthly) => WeekdayToken::Ordinal(weekday, n),
            other => WeekdayToken::Plain(other.weekday()),
        }
    }
}

impl From<Weekday> for WeekdayValue {
    fn from(weekday: Weekday) -> Self {
        Self::Code(weekday)
    }
}

impl From<WeekdayNum> for WeekdayValue {
    fn from(token: WeekdayNum) -> Self {
        Self::Token(token)
    }
}

impl From<Weekday> for OneOrMany<WeekdayValue> {
    fn from(weekday: Weekday) -> Self {
        Self::One(WeekdayValue::Code(weekday))
    }
}

impl From<WeekdayNum> for OneOrMany<WeekdayValue> {
    fn from(token: WeekdayNum) -> Self {
        Self::One(WeekdayValue::Token(token))
    }
}

/// Sparse recurrence options. Any subset of fields may be absent.
///
/// Keys that are not recognized are collected in `unrecognized` instead of
/// failing deserialization, so every one of them can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawOptions {
    pub freq: Option<FrequencyValue>,
    pub dtstart: Option<DateTime<Utc>>,
    pub interval: Option<u32>,
    pub wkst: Option<WeekdayValue>,
    pub count: Option<u32>,
    pub until: Option<DateTime<Utc>>,
    pub tzid: Option<String>,
    pub bysetpos: Option<OneOrMany<i32>>,
    pub bymonth: Option<OneOrMany<u8>>,
    pub bymonthday: Option<OneOrMany<i8>>,
    pub byyearday: Option<OneOrMany<i16>>,
    pub byweekno: Option<OneOrMany<i8>>,
    pub byweekday: Option<OneOrMany<WeekdayValue>>,
    pub byhour: Option<OneOrMany<u8>>,
    pub byminute: Option<OneOrMany<u8>>,
    pub bysecond: Option<OneOrMany<u8>>,
    pub byeaster: Option<i16>,
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl RawOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Decodes options from a JSON object.
    ///
    /// ## Errors
    /// Returns `InvalidOptionValue` if a recognized key holds a value of the
    /// wrong shape, or if the document is not a JSON object.
    pub fn from_json(json: &str) -> RfcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the frequency.
    #[must_use]
    pub fn with_freq(mut self, freq: impl Into<FrequencyValue>) -> Self {
        self.freq = Some(freq.into());
        self
    }

    /// Sets the start instant.
    #[must_use]
    pub fn with_dtstart(mut self, dtstart: DateTime<Utc>) -> Self {
        self.dtstart = Some(dtstart);
        self
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the week start day.
    #[must_use]
    pub fn with_wkst(mut self, wkst: impl Into<WeekdayValue>) -> Self {
        self.wkst = Some(wkst.into());
        self
    }

    /// Sets the count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the until instant.
    #[must_use]
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets the timezone identifier.
    #[must_use]
    pub fn with_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.tzid = Some(tzid.into());
        self
    }

    /// Sets the by-setpos value(s).
    #[must_use]
    pub fn with_bysetpos(mut self, setpos: impl Into<OneOrMany<i32>>) -> Self {
        self.bysetpos = Some(setpos.into());
        self
    }

    /// Sets the by-month value(s).
    #[must_use]
    pub fn with_bymonth(mut self, months: impl Into<OneOrMany<u8>>) -> Self {
        self.bymonth = Some(months.into());
        self
    }

    /// Sets the by-monthday value(s).
    #[must_use]
    pub fn with_bymonthday(mut self, days: impl Into<OneOrMany<i8>>) -> Self {
        self.bymonthday = Some(days.into());
        self
    }

    /// Sets the by-yearday value(s).
    #[must_use]
    pub fn with_byyearday(mut self, days: impl Into<OneOrMany<i16>>) -> Self {
        self.byyearday = Some(days.into());
        self
    }

    /// Sets the by-weekno value(s).
    #[must_use]
    pub fn with_byweekno(mut self, weeks: impl Into<OneOrMany<i8>>) -> Self {
        self.byweekno = Some(weeks.into());
        self
    }

    /// Sets the by-weekday value(s).
    #[must_use]
    pub fn with_byweekday(mut self, days: impl Into<OneOrMany<WeekdayValue>>) -> Self {
        self.byweekday = Some(days.into());
        self
    }

    /// Sets the by-hour value(s).
    #[must_use]
    pub fn with_byhour(mut self, hours: impl Into<OneOrMany<u8>>) -> Self {
        self.byhour = Some(hours.into());
        self
    }

    /// Sets the by-minute value(s).
    #[must_use]
    pub fn with_byminute(mut self, minutes: impl Into<OneOrMany<u8>>) -> Self {
        self.byminute = Some(minutes.into());
        self
    }

    /// Sets the by-second value(s).
    #[must_use]
    pub fn with_bysecond(mut self, seconds: impl Into<OneOrMany<u8>>) -> Self {
        self.bysecond = Some(seconds.into());
        self
    }

    /// Sets the Easter offset in days.
    #[must_use]
    pub fn with_byeaster(mut self, offset: i16) -> Self {
        self.byeaster = Some(offset);
        self
    }
}

impl TryFrom<serde_json::Value> for RawOptions {
    type Error = RfcError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}
