//! Weekday values used by WKST and BYDAY (RFC 5545 §3.3.10).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RfcError;

/// Day of the week.
///
/// Serialized as its numeric code, `0` for Monday through `6` for Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            "SU" => Self::Sunday,
            _ => return None,
        })
    }

    /// Returns all weekdays in order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Returns the numeric code (`0` for Monday through `6` for Sunday).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RfcError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| RfcError::InvalidWeekday(format!("code {code} is outside 0..=6")))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.code()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weekday with optional occurrence number.
///
/// Used in BYDAY rule part. Examples:
/// - `MO` - every Monday
/// - `1MO` - first Monday of the month/year
/// - `-1FR` - last Friday of the month/year
///
/// Deserializes from either the textual form above or an object
/// `{"weekday": <code>, "n": <ordinal>}`. An ordinal of `0` reads as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WeekdayNumRepr")]
pub struct WeekdayNum {
    /// Optional occurrence number, never `0`.
    pub ordinal: Option<i8>,
    /// The day of the week.
    pub weekday: Weekday,
}

/// Largest ordinal magnitude; a year has at most 53 of any weekday.
pub const MAX_ORDINAL: i8 = 53;

impl WeekdayNum {
    /// Creates a weekday occurrence without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a weekday occurrence with an ordinal.
    ///
    /// ## Panics
    ///
    /// Panics if ordinal is 0 or outside the range -53..=53.
    #[must_use]
    pub fn nth(ordinal: i8, weekday: Weekday) -> Self {
        assert!(ordinal != 0 && (-MAX_ORDINAL..=MAX_ORDINAL).contains(&ordinal));
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }

    /// Builds a token from a decoded ordinal, reading `0` as absent.
    /// Returns `None` when the ordinal is outside `-53..=53`.
    fn checked(ordinal: Option<i8>, weekday: Weekday) -> Option<Self> {
        match ordinal {
            Some(n) if !(-MAX_ORDINAL..=MAX_ORDINAL).contains(&n) => None,
            ordinal => Some(Self {
                ordinal: ordinal.filter(|n| *n != 0),
                weekday,
            }),
        }
    }
}

impl FromStr for WeekdayNum {
    type Err = RfcError;

    /// Parses a weekday with optional ordinal (e.g., "MO", "1MO", "-1FR", "+2TU").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || RfcError::InvalidWeekday(s.to_string());

        // The last two characters are the weekday, anything before is the ordinal
        let split = s.len().checked_sub(2).ok_or_else(invalid)?;
        let (ordinal_str, weekday_str) = (s.get(..split), s.get(split..));
        let (Some(ordinal_str), Some(weekday_str)) = (ordinal_str, weekday_str) else {
            return Err(invalid());
        };

        let weekday = Weekday::parse(weekday_str).ok_or_else(invalid)?;

        let ordinal = if ordinal_str.is_empty() {
            None
        } else {
            Some(ordinal_str.parse::<i8>().map_err(|e| {
                RfcError::InvalidWeekday(format!("{s}: {e}"))
            })?)
        };

        Self::checked(ordinal, weekday).ok_or_else(invalid)
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayNumRepr {
    Text(String),
    Fields {
        weekday: Weekday,
        #[serde(default)]
        n: Option<i8>,
    },
}

impl TryFrom<WeekdayNumRepr> for WeekdayNum {
    type Error = RfcError;

    fn try_from(repr: WeekdayNumRepr) -> Result<Self, Self::Error> {
        match repr {
            WeekdayNumRepr::Text(text) => text.parse(),
            WeekdayNumRepr::Fields { weekday, n } => Self::checked(n, weekday).ok_or_else(|| {
                RfcError::InvalidWeekday(format!("{}{weekday}", n.unwrap_or_default()))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_parse() {
        assert_eq!(Weekday::parse("MO"), Some(Weekday::Monday));
        assert_eq!(Weekday::parse("fr"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("XX"), None);
    }

    #[test]
    fn weekday_codes_start_at_monday() {
        assert_eq!(Weekday::Monday.code(), 0);
        assert_eq!(Weekday::Sunday.code(), 6);
        assert_eq!(Weekday::try_from(3).unwrap(), Weekday::Thursday);
        assert!(Weekday::try_from(7).is_err());
    }

    #[test]
    fn weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Wed), Weekday::Wednesday);
    }

    #[test]
    fn weekday_num_parse() {
        assert_eq!(
            "MO".parse::<WeekdayNum>().unwrap(),
            WeekdayNum::every(Weekday::Monday)
        );
        assert_eq!(
            "-1FR".parse::<WeekdayNum>().unwrap(),
            WeekdayNum::nth(-1, Weekday::Friday)
        );
        assert_eq!(
            "+2tu".parse::<WeekdayNum>().unwrap(),
            WeekdayNum::nth(2, Weekday::Tuesday)
        );
        assert!("X".parse::<WeekdayNum>().is_err());
        assert!("2XX".parse::<WeekdayNum>().is_err());
        assert!("abMO".parse::<WeekdayNum>().is_err());
    }

    #[test]
    fn weekday_num_display() {
        assert_eq!(WeekdayNum::nth(-1, Weekday::Friday).to_string(), "-1FR");
        assert_eq!(WeekdayNum::every(Weekday::Sunday).to_string(), "SU");
    }

    #[test]
    fn weekday_num_deserialize_object() {
        let token: WeekdayNum = serde_json::from_str(r#"{"weekday": 1, "n": 2}"#).unwrap();
        assert_eq!(token, WeekdayNum::nth(2, Weekday::Tuesday));

        let token: WeekdayNum = serde_json::from_str(r#"{"weekday": 4, "n": 0}"#).unwrap();
        assert_eq!(token, WeekdayNum::every(Weekday::Friday));

        let token: WeekdayNum = serde_json::from_str(r#""3TH""#).unwrap();
        assert_eq!(token, WeekdayNum::nth(3, Weekday::Thursday));
    }

    #[test]
    fn ordinal_out_of_range_is_rejected() {
        assert!(matches!(
            "99MO".parse::<WeekdayNum>(),
            Err(RfcError::InvalidWeekday(_))
        ));
        assert!(matches!(
            "-54SU".parse::<WeekdayNum>(),
            Err(RfcError::InvalidWeekday(_))
        ));
        assert_eq!(
            "-53SU".parse::<WeekdayNum>().unwrap(),
            WeekdayNum::nth(-53, Weekday::Sunday)
        );

        assert!(serde_json::from_str::<WeekdayNum>(r#"{"weekday": 0, "n": 99}"#).is_err());
        assert!(serde_json::from_str::<WeekdayNum>(r#""54TU""#).is_err());
    }
}
