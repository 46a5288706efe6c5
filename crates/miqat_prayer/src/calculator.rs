//! Prayer-time calculator.
//!
//! Two strategies produce a [`PrayerSchedule`]:
//!
//! - **Twilight-anchored**: Dhuhr, Sunrise and Maghrib are taken from the
//!   boundaries as-is; Fajr and Isha are astronomical dawn/dusk shifted by a
//!   latitude-band adjustment; Asr is derived from the shadow-ratio altitude.
//! - **Formula**: every instant comes from closed-form solar position
//!   (18 deg Fajr, 17 deg Isha, 50' sunrise/sunset), rounded to the minute.
//!
//! Both are pure; identical inputs give identical schedules.

use chrono::TimeDelta;
use miqat_solar::{
    ASTRONOMICAL_ZENITH_DEG, ISHA_ZENITH_DEG, SUNRISE_ZENITH_DEG, SolarError, TwilightBoundaries,
    add_hours, asr_altitude_deg, clock_hours_to_local, day_of_year, hour_angle_deg, offset_hours,
    solar_declination_deg, solar_noon_hours,
};

use crate::error::PrayerError;
use crate::prayer_types::{AsrMethod, PrayerRequest, PrayerSchedule, ScheduleSource};

/// Where the solar boundaries of a calculation come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarSource<'a> {
    /// Use these boundaries.
    Twilight(&'a TwilightBoundaries),
    /// Derive everything from first principles.
    Formula,
}

impl<'a> From<Option<&'a TwilightBoundaries>> for SolarSource<'a> {
    fn from(twilight: Option<&'a TwilightBoundaries>) -> Self {
        twilight.map_or(Self::Formula, Self::Twilight)
    }
}

/// Minutes added to astronomical dawn to obtain Fajr.
///
/// -20 above 65 deg, -10 strictly between 15 and 30 deg, -5 elsewhere.
pub fn fajr_adjustment_minutes(latitude_deg: f64) -> i64 {
    let abs_lat = latitude_deg.abs();
    if abs_lat > 65.0 {
        -20
    } else if abs_lat > 15.0 && abs_lat < 30.0 {
        -10
    } else {
        -5
    }
}

/// Minutes added to astronomical dusk to obtain Isha; mirror of Fajr.
pub fn isha_adjustment_minutes(latitude_deg: f64) -> i64 {
    -fajr_adjustment_minutes(latitude_deg)
}

/// Hours from solar transit until the Asr shadow ratio is reached.
///
/// The shadow altitude is converted to time through the hour angle, not by
/// dividing the altitude itself by 15; only the former keeps Hanafi Asr
/// after standard Asr.
pub fn asr_offset_hours(
    latitude_deg: f64,
    declination_deg: f64,
    method: AsrMethod,
) -> Result<f64, SolarError> {
    let altitude = asr_altitude_deg(latitude_deg, declination_deg, method.shadow_factor());
    Ok(hour_angle_deg(latitude_deg, declination_deg, 90.0 - altitude)? / 15.0)
}

/// Compute a schedule using either the supplied twilight or the formula path.
pub fn calculate_prayer_schedule(
    request: &PrayerRequest,
    twilight: Option<&TwilightBoundaries>,
) -> Result<PrayerSchedule, PrayerError> {
    calculate_with_source(request, SolarSource::from(twilight))
}

/// Compute a schedule with an explicitly selected strategy.
pub fn calculate_with_source(
    request: &PrayerRequest,
    source: SolarSource<'_>,
) -> Result<PrayerSchedule, PrayerError> {
    match source {
        SolarSource::Twilight(twilight) => calculate_with_twilight(request, twilight),
        SolarSource::Formula => calculate_from_formula(request),
    }
}

/// Twilight-anchored path.
pub fn calculate_with_twilight(
    request: &PrayerRequest,
    twilight: &TwilightBoundaries,
) -> Result<PrayerSchedule, PrayerError> {
    let lat = request.coordinate.latitude_deg();
    let decl = solar_declination_deg(day_of_year(request.date));

    let dhuhr = twilight.solar_noon;
    let asr = add_hours(dhuhr, asr_offset_hours(lat, decl, request.asr_method)?);

    tracing::debug!(lat, date = %request.date, "prayer schedule from twilight boundaries");

    Ok(PrayerSchedule {
        fajr: twilight.astronomical_dawn + TimeDelta::minutes(fajr_adjustment_minutes(lat)),
        sunrise: twilight.sunrise,
        dhuhr,
        asr,
        maghrib: twilight.sunset,
        isha: twilight.astronomical_dusk + TimeDelta::minutes(isha_adjustment_minutes(lat)),
        request: *request,
        source: ScheduleSource::TwilightAnchored,
    })
}

/// Self-contained formula path.
///
/// Fails with [`SolarError::PolarUndefined`] when any of the required
/// depression angles is never reached on this day.
pub fn calculate_from_formula(request: &PrayerRequest) -> Result<PrayerSchedule, PrayerError> {
    let lat = request.coordinate.latitude_deg();
    let n = day_of_year(request.date);
    let decl = solar_declination_deg(n);
    let noon = solar_noon_hours(
        request.coordinate.longitude_deg(),
        offset_hours(request.utc_offset),
        n,
    );

    let horizon = hour_angle_deg(lat, decl, SUNRISE_ZENITH_DEG)? / 15.0;
    let fajr = hour_angle_deg(lat, decl, ASTRONOMICAL_ZENITH_DEG)? / 15.0;
    let isha = hour_angle_deg(lat, decl, ISHA_ZENITH_DEG)? / 15.0;
    let asr = asr_offset_hours(lat, decl, request.asr_method)?;

    let local = |hours| clock_hours_to_local(request.date, request.utc_offset, hours);
    let sunset = local(noon + horizon);

    tracing::debug!(lat, date = %request.date, noon, "prayer schedule from solar formulas");

    Ok(PrayerSchedule {
        fajr: local(noon - fajr),
        sunrise: local(noon - horizon),
        dhuhr: local(noon),
        asr: local(noon + asr),
        maghrib: sunset,
        isha: local(noon + isha),
        request: *request,
        source: ScheduleSource::Formula,
    })
}
