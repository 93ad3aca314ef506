//! Clock arithmetic shared by the schedule model and the searches.
//!
//! Three representations of time appear in this crate: "clock" integers in
//! 24-hour hours*100+minutes form (1734 is 5:34 pm), minutes since local
//! midnight, and GMT-normalized minutes of day, which serve as the common
//! currency for comparisons across time zones.

use crate::error::{Error, Result};

/// Minutes in one day.
pub const MINUTES_IN_DAY: i32 = 24 * 60;

/// Shortest legal connection between landing and boarding the next plane.
pub const MIN_CONNECTION_MINUTES: i32 = 30;

/// Convert a clock-formatted integer (hours*100 + minutes) to minutes since
/// midnight. Inputs outside 0000..=2359 produce numerically consistent but
/// semantically undefined results; callers supply validated clock values.
pub fn clock_to_minute_of_day(clock: i32) -> i32 {
    let hours = clock / 100;
    let minutes = clock % 100;
    hours * 60 + minutes
}

/// Convert a local clock time to GMT-normalized minutes using the city's
/// offset, itself in clock form (for example -600 for six hours behind GMT).
/// The result always lands in `[0, 1440)`; a negative intermediate wraps to
/// the equivalent minute of the previous day.
pub fn local_clock_to_gmt_minutes(clock: i32, gmt_offset_clock: i32) -> i32 {
    let local = clock_to_minute_of_day(clock);
    let offset = clock_to_minute_of_day(gmt_offset_clock);
    (local - offset).rem_euclid(MINUTES_IN_DAY)
}

/// Render a minute-of-day value as a 12-hour clock string such as
/// "9:06 pm". Values outside `[0, 1440)` are normalized first, so times off
/// the nominal day render as the wall-clock time they represent.
pub fn minute_to_clock_string(minute: i32) -> String {
    let minute = minute.rem_euclid(MINUTES_IN_DAY);
    let hours = minute / 60;
    let mins = minute % 60;
    let suffix = if hours > 11 { "pm" } else { "am" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hours}:{mins:02} {suffix}")
}

/// Render a non-negative number of minutes as "<h> hrs, <m> mins". A
/// negative duration is a caller contract violation and is reported as an
/// error rather than formatted into a nonsense string.
pub fn hours_and_minutes_string(minutes: i32) -> Result<String> {
    if minutes < 0 {
        return Err(Error::NegativeDuration { minutes });
    }
    Ok(format_duration(minutes))
}

pub(crate) fn format_duration(minutes: i32) -> String {
    format!("{} hrs, {} mins", minutes / 60, minutes % 60)
}

/// Elapsed minutes between arriving at an airport and subsequently
/// departing, rolling into the next day when the departure minute precedes
/// the arrival minute. Flight durations use the same rule with
/// arrive=departure and depart=arrival of a single leg.
pub fn waiting_time(arrive: i32, depart: i32) -> i32 {
    if depart >= arrive {
        depart - arrive
    } else {
        MINUTES_IN_DAY + depart - arrive
    }
}
