//! Integration tests for the current-period resolver and the day dial.

use chrono::{FixedOffset, NaiveDate, TimeDelta};
use miqat_prayer::{
    ALL_PRAYER_PERIODS, AsrMethod, DayPeriodKind, Prayer, PrayerPeriod, PrayerRequest,
    PrayerSchedule, ResolverConfig, calculate_from_formula, calculate_with_twilight,
    compute_day_periods, day_period_at, next_transition, resolve_current_period, time_remaining,
};
use miqat_solar::{GeoCoordinate, compute_twilight_boundaries, local_midnight};

fn mecca_schedule() -> PrayerSchedule {
    let req = PrayerRequest::new(
        GeoCoordinate::new(21.4225, 39.8262).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        FixedOffset::east_opt(3 * 3600).unwrap(),
        AsrMethod::Standard,
    );
    calculate_from_formula(&req).unwrap()
}

#[test]
fn isha_boundary_instants() {
    let s = mecca_schedule();
    let cfg = ResolverConfig::default();

    assert_eq!(resolve_current_period(&s, &s.isha, &cfg), PrayerPeriod::Isha);
    let before = s.isha - TimeDelta::minutes(5);
    assert_eq!(resolve_current_period(&s, &before, &cfg), PrayerPeriod::Maghrib);
}

#[test]
fn remaining_at_fajr_is_fajr_to_sunrise() {
    let s = mecca_schedule();
    let cfg = ResolverConfig::default();
    assert_eq!(time_remaining(&s, &s.fajr, &cfg), s.sunrise - s.fajr);
}

#[test]
fn resolver_is_total_over_the_day() {
    let s = mecca_schedule();
    let cfg = ResolverConfig::default();
    let midnight = local_midnight(s.request.date, s.request.utc_offset);

    let mut seen = Vec::new();
    for minute in 0..24 * 60 {
        let now = midnight + TimeDelta::minutes(minute);
        let period = resolve_current_period(&s, &now, &cfg);
        assert!(ALL_PRAYER_PERIODS.contains(&period));
        assert!(time_remaining(&s, &now, &cfg) >= TimeDelta::zero());

        let next = next_transition(&s, &now, &cfg).unwrap();
        assert!(next.time > now, "transition {} not after {now}", next.time);
        if !seen.contains(&period) {
            seen.push(period);
        }
    }
    assert_eq!(seen, ALL_PRAYER_PERIODS.to_vec());
}

#[test]
fn lead_in_window_belongs_to_upcoming_prayer() {
    let s = mecca_schedule();
    let cfg = ResolverConfig::default();
    for (prayer, period) in [
        (Prayer::Fajr, PrayerPeriod::Fajr),
        (Prayer::Sunrise, PrayerPeriod::Sunrise),
        (Prayer::Dhuhr, PrayerPeriod::Dhuhr),
        (Prayer::Asr, PrayerPeriod::Asr),
        (Prayer::Maghrib, PrayerPeriod::Maghrib),
    ] {
        let early = s.get(prayer) - TimeDelta::minutes(9);
        assert_eq!(resolve_current_period(&s, &early, &cfg), period, "{}", prayer.name());
    }
}

#[test]
fn after_isha_points_to_next_fajr() {
    let s = mecca_schedule();
    let cfg = ResolverConfig::default();
    let late = s.isha + TimeDelta::hours(2);
    let next = next_transition(&s, &late, &cfg).unwrap();

    assert_eq!(next.prayer, Prayer::Fajr);
    let gap = next.time - s.fajr - TimeDelta::days(1);
    assert!(
        gap.abs() < TimeDelta::minutes(2),
        "tomorrow's fajr {} is not about a day after {}",
        next.time,
        s.fajr
    );
}

#[test]
fn day_partition_spans_24_hours() {
    let s = mecca_schedule();
    let periods = compute_day_periods(&s);

    assert_eq!(periods.len(), 7);
    let first = periods.first().unwrap();
    let last = periods.last().unwrap();
    assert_eq!(last.end - first.start, TimeDelta::hours(24));
    for w in periods.windows(2) {
        assert_eq!(w[0].end, w[1].start, "{} -> {}", w[0].kind.name(), w[1].kind.name());
    }
    assert!(periods.iter().all(|p| !p.is_degenerate()));
}

#[test]
fn every_minute_has_a_day_period() {
    let s = mecca_schedule();
    let periods = compute_day_periods(&s);
    let start = periods[0].start;

    for minute in 0..24 * 60 {
        let t = start + TimeDelta::minutes(minute);
        assert!(day_period_at(&periods, &t).is_some(), "no period at {t}");
    }
    let morning = day_period_at(&periods, &(s.sunrise + TimeDelta::minutes(90))).unwrap();
    assert_eq!(morning.kind, DayPeriodKind::Morning);
}

#[test]
fn anchored_partition_follows_solar_noon_and_sunset() {
    let s = mecca_schedule();
    let tw =
        compute_twilight_boundaries(&s.request.coordinate, s.request.date, s.request.utc_offset)
            .unwrap();
    let anchored = calculate_with_twilight(&s.request, &tw).unwrap();
    let periods = compute_day_periods(&anchored);
    let period = |kind: DayPeriodKind| periods.iter().find(|p| p.kind == kind).unwrap();

    assert_eq!(period(DayPeriodKind::Morning).end, tw.solar_noon);
    assert_eq!(period(DayPeriodKind::Dhuhr).start, tw.solar_noon);
    assert_eq!(period(DayPeriodKind::Asr).end, tw.sunset);
    assert_eq!(period(DayPeriodKind::Maghrib).start, tw.sunset);
}
