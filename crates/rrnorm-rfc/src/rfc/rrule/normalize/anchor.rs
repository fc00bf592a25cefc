use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{Frequency, Weekday};
use crate::rfc::rrule::options::{FrequencyValue, WeekdayValue};

/// ## Summary
/// Resolves the frequency value against the enum.
///
/// An Easter offset only makes sense on a yearly cycle, so its presence
/// forces `YEARLY` before the value is checked.
///
/// ## Errors
/// Returns `InvalidFrequency` if the value names no known frequency.
pub(super) fn resolve_frequency(freq: FrequencyValue, byeaster: Option<i16>) -> RfcResult<Frequency> {
    let freq = if byeaster.is_some() {
        tracing::debug!(supplied = %freq, "BYEASTER present, forcing YEARLY");
        FrequencyValue::from(Frequency::Yearly)
    } else {
        freq
    };

    freq.resolve().ok_or_else(|| {
        tracing::warn!(freq = %freq, "Rejecting unknown frequency");
        RfcError::InvalidFrequency(freq.to_string())
    })
}

/// Start instant and week start after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Anchor {
    pub dtstart: DateTime<Utc>,
    pub wkst: Weekday,
}

/// Defaults DTSTART to `now` without its fractional seconds and reduces the
/// week start to a bare weekday.
pub(super) fn resolve_anchor(
    dtstart: Option<DateTime<Utc>>,
    wkst: WeekdayValue,
    now: DateTime<Utc>,
) -> Anchor {
    let dtstart = dtstart.unwrap_or_else(|| {
        let start = now.trunc_subsecs(0);
        tracing::debug!(dtstart = %start, "DTSTART absent, using current time");
        start
    });

    Anchor {
        dtstart,
        wkst: wkst.weekday(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    use super::*;
    use crate::rfc::rrule::core::WeekdayNum;

    #[test]
    fn easter_forces_yearly() {
        let freq = resolve_frequency(FrequencyValue::from(Frequency::Daily), Some(0)).unwrap();
        assert_eq!(freq, Frequency::Yearly);
    }

    #[test]
    fn easter_override_repairs_bad_frequency() {
        let freq = resolve_frequency(FrequencyValue::Code(42), Some(-2)).unwrap();
        assert_eq!(freq, Frequency::Yearly);
    }

    #[test]
    fn easter_override_applies_to_any_shape() {
        let freq = resolve_frequency(FrequencyValue::Other(json!(2.5)), Some(0)).unwrap();
        assert_eq!(freq, Frequency::Yearly);
    }

    #[test]
    fn non_textual_frequency_is_rejected() {
        let err = resolve_frequency(FrequencyValue::Other(json!(true)), None).unwrap_err();
        assert!(matches!(err, RfcError::InvalidFrequency(ref v) if v == "true"));
    }

    #[test_log::test]
    fn unknown_frequency_is_rejected() {
        let err = resolve_frequency(FrequencyValue::Code(42), None).unwrap_err();
        assert!(matches!(err, RfcError::InvalidFrequency(ref v) if v == "42"));

        let err = resolve_frequency(FrequencyValue::Name("FORTNIGHTLY".into()), None).unwrap_err();
        assert!(err.to_string().contains("FORTNIGHTLY"));
    }

    #[test]
    fn missing_dtstart_uses_truncated_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 42).unwrap() + Duration::milliseconds(731);
        let anchor = resolve_anchor(None, WeekdayValue::Code(Weekday::Monday), now);
        assert_eq!(anchor.dtstart, Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 42).unwrap());
        assert_eq!(anchor.dtstart.timestamp_subsec_millis(), 0);
    }

    #[test]
    fn supplied_dtstart_keeps_milliseconds() {
        let dtstart = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(678);
        let anchor = resolve_anchor(Some(dtstart), WeekdayValue::Code(Weekday::Monday), Utc::now());
        assert_eq!(anchor.dtstart, dtstart);
        assert_eq!(anchor.dtstart.timestamp_subsec_millis(), 678);
    }

    #[test]
    fn wkst_token_drops_ordinal() {
        let token = WeekdayValue::Token(WeekdayNum::nth(3, Weekday::Sunday));
        let anchor = resolve_anchor(None, token, Utc::now());
        assert_eq!(anchor.wkst, Weekday::Sunday);
    }
}
