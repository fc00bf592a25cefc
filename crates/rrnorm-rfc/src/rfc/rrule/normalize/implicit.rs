use chrono::{DateTime, Datelike, Utc};

use super::{Constraints, is_set, narrow, narrow_signed};
use crate::rfc::rrule::core::{Frequency, Weekday};
use crate::rfc::rrule::options::{OneOrMany, WeekdayValue};

/// Returns `true` when no positional BY* rule part picks a day on its own.
pub(super) fn needs_implicit(constraints: &Constraints) -> bool {
    !(is_set(constraints.byweekno.as_ref())
        || is_set(constraints.byyearday.as_ref())
        || is_set(constraints.bymonthday.as_ref())
        || is_set(constraints.byweekday.as_ref())
        || constraints.byeaster.is_some())
}

/// ## Summary
/// Anchors a rule without a day selector to the calendar position of DTSTART.
///
/// Yearly rules take DTSTART's month (unless BYMONTH is present, even as an
/// empty list) and day of
/// month, monthly rules its day of month, weekly rules its weekday. Daily and
/// finer rules are left alone.
pub(super) fn derive_implicit(
    constraints: Constraints,
    freq: Frequency,
    dtstart: DateTime<Utc>,
) -> Constraints {
    if !needs_implicit(&constraints) {
        return constraints;
    }

    let monthday = Some(OneOrMany::One(narrow_signed(dtstart.day())));

    match freq {
        Frequency::Yearly => {
            let bymonth = constraints
                .bymonth
                .or_else(|| Some(OneOrMany::One(narrow(dtstart.month()))));
            tracing::debug!(bymonth = ?bymonth, bymonthday = dtstart.day(), "Derived yearly anchor");
            Constraints {
                bymonth,
                bymonthday: monthday,
                ..constraints
            }
        }
        Frequency::Monthly => {
            tracing::debug!(bymonthday = dtstart.day(), "Derived monthly anchor");
            Constraints {
                bymonthday: monthday,
                ..constraints
            }
        }
        Frequency::Weekly => {
            let weekday = Weekday::from(dtstart.weekday());
            tracing::debug!(byweekday = %weekday, "Derived weekly anchor");
            Constraints {
                byweekday: Some(OneOrMany::Many(vec![WeekdayValue::Code(weekday)])),
                ..constraints
            }
        }
        Frequency::Daily | Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
            constraints
        }
    }
}
