//! Current-period resolution and 24 h day partitioning.
//!
//! A prayer period is entered `lead_in` before its nominal start, except Isha,
//! which begins exactly at the Isha instant and runs to local midnight.
//! Anything not covered by a prayer period is Night.

use chrono::{Days, TimeDelta, Timelike};
use miqat_solar::{LocalTime, end_of_local_day};

use crate::calculator::calculate_from_formula;
use crate::error::PrayerError;
use crate::period_types::{DayPeriod, DayPeriodKind, PrayerPeriod, ResolverConfig, Transition};
use crate::prayer_types::{Prayer, PrayerSchedule};

/// Length of the Sunrise segment of the day dial, in minutes.
const SUNRISE_PERIOD_MINUTES: i64 = 60;

/// Buffered periods, latest first: (period, start, end).
fn buffered_periods(schedule: &PrayerSchedule) -> [(PrayerPeriod, LocalTime, LocalTime); 5] {
    [
        (PrayerPeriod::Maghrib, schedule.maghrib, schedule.isha),
        (PrayerPeriod::Asr, schedule.asr, schedule.maghrib),
        (PrayerPeriod::Dhuhr, schedule.dhuhr, schedule.asr),
        (PrayerPeriod::Sunrise, schedule.sunrise, schedule.dhuhr),
        (PrayerPeriod::Fajr, schedule.fajr, schedule.sunrise),
    ]
}

/// The period containing `now`. Total: every instant maps to exactly one period.
pub fn resolve_current_period(
    schedule: &PrayerSchedule,
    now: &LocalTime,
    config: &ResolverConfig,
) -> PrayerPeriod {
    if *now >= schedule.isha {
        return PrayerPeriod::Isha;
    }
    buffered_periods(schedule)
        .into_iter()
        .find(|(_, start, end)| *now >= *start - config.lead_in && *now < *end)
        .map_or(PrayerPeriod::Night, |(period, _, _)| period)
}

/// Nominal end of `period` for the day of `now`.
fn period_end(schedule: &PrayerSchedule, period: PrayerPeriod, now: &LocalTime) -> LocalTime {
    match period {
        PrayerPeriod::Night => schedule.fajr,
        PrayerPeriod::Fajr => schedule.sunrise,
        PrayerPeriod::Sunrise => schedule.dhuhr,
        PrayerPeriod::Dhuhr => schedule.asr,
        PrayerPeriod::Asr => schedule.maghrib,
        PrayerPeriod::Maghrib => schedule.isha,
        PrayerPeriod::Isha => end_of_local_day(now),
    }
}

/// Time left in the current period, never negative.
pub fn time_remaining(
    schedule: &PrayerSchedule,
    now: &LocalTime,
    config: &ResolverConfig,
) -> TimeDelta {
    let period = resolve_current_period(schedule, now, config);
    let remaining = period_end(schedule, period, now) - *now;
    remaining.max(TimeDelta::zero())
}

/// The next prayer after the current period.
///
/// After Isha this is tomorrow's Fajr, computed with the formula path for
/// the following date.
pub fn next_transition(
    schedule: &PrayerSchedule,
    now: &LocalTime,
    config: &ResolverConfig,
) -> Result<Transition, PrayerError> {
    if resolve_current_period(schedule, now, config) != PrayerPeriod::Isha {
        return Ok(same_day_transition(schedule, now, config));
    }
    let tomorrow_fajr = match schedule.request.next_day() {
        Some(request) => calculate_from_formula(&request)?.fajr,
        None => shift_one_day(schedule.fajr),
    };
    Ok(Transition {
        prayer: Prayer::Fajr,
        time: tomorrow_fajr,
    })
}

/// Like [`next_transition`], using a schedule for the following day the
/// caller already has.
pub fn next_transition_with(
    schedule: &PrayerSchedule,
    now: &LocalTime,
    config: &ResolverConfig,
    tomorrow: &PrayerSchedule,
) -> Transition {
    if resolve_current_period(schedule, now, config) == PrayerPeriod::Isha {
        Transition {
            prayer: Prayer::Fajr,
            time: tomorrow.fajr,
        }
    } else {
        same_day_transition(schedule, now, config)
    }
}

fn same_day_transition(
    schedule: &PrayerSchedule,
    now: &LocalTime,
    config: &ResolverConfig,
) -> Transition {
    let prayer = match resolve_current_period(schedule, now, config) {
        PrayerPeriod::Night => Prayer::Fajr,
        PrayerPeriod::Fajr => Prayer::Sunrise,
        PrayerPeriod::Sunrise => Prayer::Dhuhr,
        PrayerPeriod::Dhuhr => Prayer::Asr,
        PrayerPeriod::Asr => Prayer::Maghrib,
        PrayerPeriod::Maghrib | PrayerPeriod::Isha => Prayer::Isha,
    };
    Transition {
        prayer,
        time: schedule.get(prayer),
    }
}

fn shift_one_day(t: LocalTime) -> LocalTime {
    t.checked_add_days(Days::new(1)).unwrap_or(t + TimeDelta::days(1))
}

fn shift_back_one_day(t: LocalTime) -> LocalTime {
    t.checked_sub_days(Days::new(1)).unwrap_or(t - TimeDelta::days(1))
}

/// Partition the day into seven contiguous segments, Night first.
///
/// Night starts at the previous evening's Isha (this schedule's Isha minus
/// one day), so the segments span exactly 24 h. Inconsistent schedules may
/// produce degenerate segments; they are kept and flagged, not rejected.
///
/// The schedule's Dhuhr and Maghrib stand in for solar noon and sunset. On
/// the twilight-anchored path they are the provider's `solar_noon` and
/// `sunset`; on the formula path they are the computed transit and sunset.
pub fn compute_day_periods(schedule: &PrayerSchedule) -> Vec<DayPeriod> {
    let sunrise_end = schedule.sunrise + TimeDelta::minutes(SUNRISE_PERIOD_MINUTES);
    let bounds = [
        (DayPeriodKind::Night, shift_back_one_day(schedule.isha), schedule.fajr),
        (DayPeriodKind::Fajr, schedule.fajr, schedule.sunrise),
        (DayPeriodKind::Sunrise, schedule.sunrise, sunrise_end),
        (DayPeriodKind::Morning, sunrise_end, schedule.dhuhr),
        (DayPeriodKind::Dhuhr, schedule.dhuhr, schedule.asr),
        (DayPeriodKind::Asr, schedule.asr, schedule.maghrib),
        (DayPeriodKind::Maghrib, schedule.maghrib, schedule.isha),
    ];
    bounds
        .into_iter()
        .map(|(kind, start, end)| DayPeriod { kind, start, end })
        .collect()
}

/// The non-degenerate period containing `t`, if any.
pub fn day_period_at<'a>(periods: &'a [DayPeriod], t: &LocalTime) -> Option<&'a DayPeriod> {
    periods
        .iter()
        .filter(|p| !p.is_degenerate())
        .find(|p| p.contains(t))
}

/// Position of `t`'s local hour and minute on a 24 h dial, in degrees.
pub fn clock_angle_deg(t: &LocalTime) -> f64 {
    let minutes = f64::from(t.hour() * 60 + t.minute());
    minutes / 1440.0 * 360.0
}
