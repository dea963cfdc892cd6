//! Quarter-hour rounding and time-of-day arithmetic.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Minutes of lateness still counted as being on time.
///
/// Being at HH:03 with the default tolerance still counts as HH:00; at HH:04
/// the next quarter is the honest answer.
pub const CAN_BE_LATE: i64 = 3;

/// Round an instant to a quarter-hour boundary: minute 0, 15, 30, or 45.
///
/// The quarter (15 minutes) is the basic time unit. `tolerance` minutes of
/// lateness past a boundary still count as that boundary; beyond it the next
/// quarter is used.
///
/// XXX day change is not handled: rounding past 23:59 wraps the hour to 0 on
/// the same date. Cf. christmas midnight mass.
#[must_use]
pub fn round_to_quarter(instant: NaiveDateTime, tolerance: i64) -> NaiveDateTime {
    let quarter = ((i64::from(instant.minute()) + 14 - tolerance) / 15) * 15;

    let mut hour = instant.hour();
    let mut minute = u32::try_from(quarter).unwrap_or(0);

    if minute == 60 {
        hour = (hour + 1) % 24;
        minute = 0;
    }

    instant
        .date()
        .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
}

/// Add a signed minute offset to a time of day.
///
/// The date component is discarded, so crossing midnight silently wraps to
/// the other end of the day.
#[must_use]
pub fn add_minutes(base: NaiveTime, minutes: i64) -> NaiveTime {
    base.overflowing_add_signed(Duration::minutes(minutes)).0
}
