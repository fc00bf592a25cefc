use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::options::OneOrMany;

/// Largest absolute BYSETPOS value (days in a leap year).
pub const MAX_SETPOS: i32 = 366;

/// Returns `true` for values in `1..=366` or `-366..=-1`.
#[must_use]
pub fn is_valid_setpos(position: i32) -> bool {
    position != 0 && (-MAX_SETPOS..=MAX_SETPOS).contains(&position)
}

/// ## Summary
/// Promotes a scalar BYSETPOS to a list and range-checks every element.
///
/// ## Errors
/// Returns `InvalidSetPosition` for the first element that is zero or out of
/// range. Nothing is accepted if any element fails.
pub(super) fn validate_setpos(setpos: Option<OneOrMany<i32>>) -> RfcResult<Option<Vec<i32>>> {
    let Some(setpos) = setpos else {
        return Ok(None);
    };

    let positions = setpos.into_vec();
    if let Some(&invalid) = positions.iter().find(|p| !is_valid_setpos(**p)) {
        tracing::warn!(bysetpos = invalid, "Rejecting out-of-range BYSETPOS");
        return Err(RfcError::InvalidSetPosition(invalid));
    }

    Ok(Some(positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_stays_absent() {
        assert_eq!(validate_setpos(None).unwrap(), None);
    }

    #[test]
    fn scalar_is_promoted() {
        assert_eq!(
            validate_setpos(Some(OneOrMany::One(-1))).unwrap(),
            Some(vec![-1])
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(
            validate_setpos(Some(OneOrMany::Many(vec![1, 366, -1, -366]))).unwrap(),
            Some(vec![1, 366, -1, -366])
        );
    }

    #[test_log::test]
    fn zero_and_out_of_range_fail() {
        for bad in [0, 367, -367] {
            let err = validate_setpos(Some(OneOrMany::One(bad))).unwrap_err();
            assert!(matches!(err, RfcError::InvalidSetPosition(v) if v == bad));
        }
    }

    #[test]
    fn one_bad_element_rejects_the_list() {
        let err = validate_setpos(Some(OneOrMany::Many(vec![1, 2, 0, 3]))).unwrap_err();
        assert!(err.to_string().contains("between 1 and 366"));
        assert!(err.to_string().contains("-366 and -1"));
    }
}
