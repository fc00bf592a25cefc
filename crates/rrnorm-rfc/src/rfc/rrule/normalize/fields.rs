//! Per-field shape rules for BY* values.
//!
//! Each rule works on one field in isolation; none of them look at another
//! field's value.

use crate::rfc::rrule::core::{Frequency, Weekday};
use crate::rfc::rrule::options::{OneOrMany, WeekdayToken, WeekdayValue};

/// Promotes a scalar to a one-element list. Lists pass through unchanged.
pub(super) fn promote<T>(value: Option<OneOrMany<T>>) -> Option<Vec<T>> {
    value.map(OneOrMany::into_vec)
}

/// ## Summary
/// Splits month days into positive and negative buckets.
///
/// Zeros inside a list are dropped. A scalar is never dropped: a negative
/// scalar goes to the negative bucket, anything else to the positive one.
pub(super) fn split_monthdays(value: Option<OneOrMany<i8>>) -> (Vec<i8>, Vec<i8>) {
    match value {
        None => (Vec::new(), Vec::new()),
        Some(OneOrMany::Many(days)) => (
            days.iter().copied().filter(|d| *d > 0).collect(),
            days.iter().copied().filter(|d| *d < 0).collect(),
        ),
        Some(OneOrMany::One(day)) if day < 0 => (Vec::new(), vec![day]),
        Some(OneOrMany::One(day)) => (vec![day], Vec::new()),
    }
}

/// Plain weekdays and ordinal `(weekday, n)` pairs.
pub(super) type WeekdayBuckets = (Option<Vec<Weekday>>, Option<Vec<(Weekday, i8)>>);

/// ## Summary
/// Splits weekday values into plain weekdays and n-th occurrence pairs.
///
/// Ordinals are only kept for yearly and monthly rules. An empty bucket
/// becomes `None`, so both, one or neither bucket may be populated.
pub(super) fn split_weekdays(value: Option<OneOrMany<WeekdayValue>>, freq: Frequency) -> WeekdayBuckets {
    let Some(value) = value else {
        return (None, None);
    };

    let mut plain = Vec::new();
    let mut ordinal = Vec::new();
    for token in value.into_vec().into_iter().map(|v| v.classify(freq)) {
        match token {
            WeekdayToken::Plain(weekday) => plain.push(weekday),
            WeekdayToken::Ordinal(weekday, n) => ordinal.push((weekday, n)),
        }
    }

    (non_empty(plain), non_empty(ordinal))
}

/// ## Summary
/// Normalizes BYHOUR, BYMINUTE or BYSECOND.
///
/// `level` is the frequency matching the field (`Hourly` for BYHOUR and so
/// on). A missing or empty field defaults to `[anchor]` only when the rule is
/// coarser than `level`; otherwise the field stays unconstrained.
pub(super) fn time_field(
    value: Option<OneOrMany<u8>>,
    freq: Frequency,
    level: Frequency,
    anchor: u8,
) -> Option<Vec<u8>> {
    match promote(value).and_then(non_empty) {
        Some(values) => Some(values),
        None if freq.is_coarser_than(level) => Some(vec![anchor]),
        None => None,
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::rrule::core::WeekdayNum;

    #[test]
    fn promote_scalar_and_list() {
        assert_eq!(promote(Some(OneOrMany::One(4_u8))), Some(vec![4]));
        assert_eq!(promote(Some(OneOrMany::Many(vec![1_u8, 2]))), Some(vec![1, 2]));
        assert_eq!(promote::<u8>(None), None);
        assert_eq!(promote(Some(OneOrMany::Many(Vec::<i16>::new()))), Some(vec![]));
    }

    #[test]
    fn monthdays_split_by_sign() {
        assert_eq!(
            split_monthdays(Some(OneOrMany::Many(vec![5, -5, 0]))),
            (vec![5], vec![-5])
        );
        assert_eq!(
            split_monthdays(Some(OneOrMany::Many(vec![-1, 1, 15, -10]))),
            (vec![1, 15], vec![-1, -10])
        );
    }

    #[test]
    fn monthday_scalars() {
        assert_eq!(split_monthdays(Some(OneOrMany::One(-3))), (vec![], vec![-3]));
        assert_eq!(split_monthdays(Some(OneOrMany::One(12))), (vec![12], vec![]));
        assert_eq!(split_monthdays(Some(OneOrMany::One(0))), (vec![0], vec![]));
        assert_eq!(split_monthdays(None), (vec![], vec![]));
    }

    #[test]
    fn weekday_absent() {
        assert_eq!(split_weekdays(None, Frequency::Monthly), (None, None));
    }

    #[test]
    fn weekday_bare_code() {
        assert_eq!(
            split_weekdays(Some(Weekday::Wednesday.into()), Frequency::Monthly),
            (Some(vec![Weekday::Wednesday]), None)
        );
    }

    #[test]
    fn weekday_single_token() {
        let token: OneOrMany<WeekdayValue> = WeekdayNum::nth(2, Weekday::Tuesday).into();

        assert_eq!(
            split_weekdays(Some(token.clone()), Frequency::Monthly),
            (None, Some(vec![(Weekday::Tuesday, 2)]))
        );
        assert_eq!(
            split_weekdays(Some(token), Frequency::Weekly),
            (Some(vec![Weekday::Tuesday]), None)
        );
        assert_eq!(
            split_weekdays(
                Some(WeekdayNum::every(Weekday::Sunday).into()),
                Frequency::Yearly
            ),
            (Some(vec![Weekday::Sunday]), None)
        );
    }

    #[test]
    fn weekday_mixed_list() {
        let values = OneOrMany::Many(vec![
            WeekdayValue::Code(Weekday::Monday),
            WeekdayValue::Token(WeekdayNum::every(Weekday::Wednesday)),
            WeekdayValue::Token(WeekdayNum::nth(-1, Weekday::Friday)),
            WeekdayValue::Token(WeekdayNum::nth(1, Weekday::Monday)),
        ]);

        assert_eq!(
            split_weekdays(Some(values.clone()), Frequency::Yearly),
            (
                Some(vec![Weekday::Monday, Weekday::Wednesday]),
                Some(vec![(Weekday::Friday, -1), (Weekday::Monday, 1)])
            )
        );
        assert_eq!(
            split_weekdays(Some(values), Frequency::Daily),
            (
                Some(vec![
                    Weekday::Monday,
                    Weekday::Wednesday,
                    Weekday::Friday,
                    Weekday::Monday
                ]),
                None
            )
        );
    }

    #[test]
    fn weekday_list_of_ordinals_leaves_plain_empty() {
        let values = OneOrMany::Many(vec![WeekdayValue::Token(WeekdayNum::nth(
            3,
            Weekday::Thursday,
        ))]);
        assert_eq!(
            split_weekdays(Some(values), Frequency::Monthly),
            (None, Some(vec![(Weekday::Thursday, 3)]))
        );
        assert_eq!(
            split_weekdays(Some(OneOrMany::Many(Vec::new())), Frequency::Monthly),
            (None, None)
        );
    }

    #[test]
    fn time_field_defaults_only_when_coarser() {
        assert_eq!(
            time_field(None, Frequency::Daily, Frequency::Hourly, 9),
            Some(vec![9])
        );
        assert_eq!(time_field(None, Frequency::Hourly, Frequency::Hourly, 9), None);
        assert_eq!(
            time_field(None, Frequency::Hourly, Frequency::Minutely, 30),
            Some(vec![30])
        );
        assert_eq!(time_field(None, Frequency::Secondly, Frequency::Secondly, 0), None);
    }

    #[test]
    fn time_field_keeps_given_values() {
        assert_eq!(
            time_field(Some(OneOrMany::One(7)), Frequency::Secondly, Frequency::Hourly, 9),
            Some(vec![7])
        );
        assert_eq!(
            time_field(
                Some(OneOrMany::Many(vec![0, 30])),
                Frequency::Daily,
                Frequency::Minutely,
                15
            ),
            Some(vec![0, 30])
        );
        assert_eq!(
            time_field(Some(OneOrMany::Many(Vec::new())), Frequency::Daily, Frequency::Hourly, 9),
            Some(vec![9])
        );
    }
}
