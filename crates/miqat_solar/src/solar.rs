//! Closed-form solar position for a calendar day.
//!
//! Low-precision formulas (a few minutes of time) for declination, equation
//! of time, solar transit and the hour angle at which the Sun's center
//! reaches a given zenith distance. Good enough for prayer and twilight
//! boundaries; not an ephemeris.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

use crate::error::SolarError;

/// Zenith for sunrise/sunset: 90 deg plus 34' refraction and 16' semidiameter.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Zenith for civil twilight (Sun 6 deg below the horizon).
pub const CIVIL_ZENITH_DEG: f64 = 96.0;

/// Zenith for nautical twilight (Sun 12 deg below the horizon).
pub const NAUTICAL_ZENITH_DEG: f64 = 102.0;

/// Zenith for astronomical twilight and Fajr (Sun 18 deg below the horizon).
pub const ASTRONOMICAL_ZENITH_DEG: f64 = 108.0;

/// Zenith for Isha (Sun 17 deg below the horizon).
pub const ISHA_ZENITH_DEG: f64 = 107.0;

/// Maximum obliquity amplitude used by the declination approximation.
const DECLINATION_AMPLITUDE_DEG: f64 = 23.45;

/// Ordinal day of the year, 1-366.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Solar declination in degrees for an ordinal day.
///
/// `decl = -23.45 * cos(2pi/365 * (n + 10))`
pub fn solar_declination_deg(day_of_year: u32) -> f64 {
    -DECLINATION_AMPLITUDE_DEG * ((2.0 * PI / 365.0) * (f64::from(day_of_year) + 10.0)).cos()
}

/// Equation of time in minutes (apparent minus mean solar time).
///
/// `eot = 9.87 sin 2b - 7.53 cos b - 1.5 sin b`, `b = 2pi(n - 81)/364`
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (f64::from(day_of_year) - 81.0) / 364.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Local clock hour of solar transit.
///
/// `12 + utc_offset - longitude/15 - eot/60`
pub fn solar_noon_hours(longitude_deg: f64, utc_offset_hours: f64, day_of_year: u32) -> f64 {
    12.0 + utc_offset_hours - longitude_deg / 15.0 - equation_of_time_minutes(day_of_year) / 60.0
}

/// Hour angle in degrees at which the Sun's center reaches `zenith_deg`.
///
/// `H = acos[(cos z - sin phi sin decl) / (cos phi cos decl)]`
///
/// Returns [`SolarError::PolarUndefined`] when the arccos argument leaves
/// [-1, 1] (the Sun never reaches that zenith today) or is not finite
/// (observer at a pole).
pub fn hour_angle_deg(
    latitude_deg: f64,
    declination_deg: f64,
    zenith_deg: f64,
) -> Result<f64, SolarError> {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let z = zenith_deg.to_radians();

    let cos_h = (z.cos() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if !cos_h.is_finite() || !(-1.0..=1.0).contains(&cos_h) {
        return Err(SolarError::PolarUndefined { zenith_deg, cos_h });
    }
    Ok(cos_h.acos().to_degrees())
}

/// Solar altitude in degrees at which a vertical object's shadow equals
/// `shadow_factor` times its height plus its noon shadow.
///
/// `alt = atan(1 / (factor + tan|lat - decl|))`
pub fn asr_altitude_deg(latitude_deg: f64, declination_deg: f64, shadow_factor: f64) -> f64 {
    let noon_zenith = (latitude_deg - declination_deg).abs().to_radians();
    (1.0 / (shadow_factor + noon_zenith.tan())).atan().to_degrees()
}
