use crate::rfc::rrule::core::{Frequency, TimeOfDay};
use crate::rfc::rrule::options::CanonicalOptions;

/// ## Summary
/// Builds the sorted times of day shared by every date candidate.
///
/// Returns `None` for hourly and finer rules, where the time of day changes
/// between occurrences. Otherwise every combination of BYHOUR, BYMINUTE and
/// BYSECOND is produced, each carrying DTSTART's millisecond remainder.
#[must_use]
pub fn build_timeset(options: &CanonicalOptions) -> Option<Vec<TimeOfDay>> {
    if !options.freq.is_coarser_than(Frequency::Hourly) {
        return None;
    }

    let (Some(hours), Some(minutes), Some(seconds)) =
        (&options.byhour, &options.byminute, &options.bysecond)
    else {
        return None;
    };

    let millisecond = options.millisecond_remainder();
    let mut timeset: Vec<TimeOfDay> = hours
        .iter()
        .flat_map(move |&hour| {
            minutes.iter().flat_map(move |&minute| {
                seconds
                    .iter()
                    .map(move |&second| TimeOfDay::new(hour, minute, second, millisecond))
            })
        })
        .collect();
    timeset.sort_unstable();

    Some(timeset)
}
