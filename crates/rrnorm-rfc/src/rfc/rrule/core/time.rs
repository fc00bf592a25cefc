use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

/// A time of day applied to every date candidate of a recurrence.
///
/// Ordering is by hour, then minute, second and millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Sub-second remainder carried over from DTSTART.
    pub millisecond: u32,
}

impl TimeOfDay {
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Converts to a chrono time, or `None` when a component is out of range.
    #[must_use]
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.millisecond,
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_hour_then_minute() {
        let mut times = vec![
            TimeOfDay::new(10, 0, 0, 0),
            TimeOfDay::new(9, 30, 0, 0),
            TimeOfDay::new(9, 0, 59, 0),
        ];
        times.sort_unstable();
        assert_eq!(
            times,
            vec![
                TimeOfDay::new(9, 0, 59, 0),
                TimeOfDay::new(9, 30, 0, 0),
                TimeOfDay::new(10, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn naive_time_conversion() {
        let time = TimeOfDay::new(23, 59, 58, 250).to_naive_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_milli_opt(23, 59, 58, 250).unwrap());
        assert!(TimeOfDay::new(24, 0, 0, 0).to_naive_time().is_none());
    }

    #[test]
    fn display_pads_fields() {
        assert_eq!(TimeOfDay::new(9, 5, 0, 7).to_string(), "09:05:00.007");
    }
}
