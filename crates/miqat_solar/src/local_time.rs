//! Conversions between decimal clock hours and local wall-clock instants.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};

/// A local wall-clock instant carrying its UTC offset.
pub type LocalTime = DateTime<FixedOffset>;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Local midnight (00:00:00) of `date` at `offset`.
pub fn local_midnight(date: NaiveDate, offset: FixedOffset) -> LocalTime {
    let naive_local = date.and_time(NaiveTime::MIN);
    let naive_utc = naive_local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(naive_utc, offset)
}

/// Last representable millisecond of the local day containing `t` (23:59:59.999).
pub fn end_of_local_day(t: &LocalTime) -> LocalTime {
    local_midnight(t.date_naive(), *t.offset()) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}

/// UTC offset in decimal hours.
pub fn offset_hours(offset: FixedOffset) -> f64 {
    f64::from(offset.local_minus_utc()) / 3600.0
}

/// Convert decimal clock hours on `date` to a minute-resolution local time.
///
/// Whole hours plus the rounded minute fraction; a rounded minute of 60
/// carries into the next hour. Hours outside [0, 24) land on the previous
/// or next day.
pub fn clock_hours_to_local(date: NaiveDate, offset: FixedOffset, hours: f64) -> LocalTime {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    let total_minutes = whole as i64 * 60 + minutes as i64;
    local_midnight(date, offset) + TimeDelta::minutes(total_minutes)
}

/// Convert decimal clock hours on `date` to a millisecond-resolution local time.
pub fn precise_hours_to_local(date: NaiveDate, offset: FixedOffset, hours: f64) -> LocalTime {
    let millis = (hours * MILLIS_PER_HOUR).round() as i64;
    local_midnight(date, offset) + TimeDelta::milliseconds(millis)
}

/// Shift an instant by a (possibly fractional, possibly negative) number of hours.
pub fn add_hours(t: LocalTime, hours: f64) -> LocalTime {
    t + TimeDelta::milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
}
