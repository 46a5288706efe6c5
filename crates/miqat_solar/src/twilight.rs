//! Local computation of the nine daily solar boundaries.
//!
//! Each boundary is solar transit plus or minus the hour angle for its
//! zenith, using the closed-form declination and equation of time of the
//! day. Results are kept to the millisecond; callers that want prayer
//! minutes round separately.

use chrono::{FixedOffset, NaiveDate};

use crate::coordinate::GeoCoordinate;
use crate::error::SolarError;
use crate::local_time::{offset_hours, precise_hours_to_local};
use crate::solar::{day_of_year, hour_angle_deg, solar_declination_deg, solar_noon_hours};
use crate::twilight_types::{TwilightBoundaries, TwilightEvent};

/// Decimal clock hour of one boundary on `date`.
///
/// Fails with [`SolarError::PolarUndefined`] when the Sun never reaches the
/// event's zenith.
pub fn twilight_event_hours(
    coord: &GeoCoordinate,
    date: NaiveDate,
    offset: FixedOffset,
    event: TwilightEvent,
) -> Result<f64, SolarError> {
    let n = day_of_year(date);
    let noon = solar_noon_hours(coord.longitude_deg(), offset_hours(offset), n);
    let Some(zenith) = event.zenith_deg() else {
        return Ok(noon);
    };
    let h = hour_angle_deg(coord.latitude_deg(), solar_declination_deg(n), zenith)?;
    Ok(if event.is_rising() {
        noon - h / 15.0
    } else {
        noon + h / 15.0
    })
}

/// Compute all nine boundaries for `date` in the local time of `offset`.
pub fn compute_twilight_boundaries(
    coord: &GeoCoordinate,
    date: NaiveDate,
    offset: FixedOffset,
) -> Result<TwilightBoundaries, SolarError> {
    let at = |event| {
        twilight_event_hours(coord, date, offset, event)
            .map(|h| precise_hours_to_local(date, offset, h))
    };
    let boundaries = TwilightBoundaries {
        astronomical_dawn: at(TwilightEvent::AstronomicalDawn)?,
        nautical_dawn: at(TwilightEvent::NauticalDawn)?,
        civil_dawn: at(TwilightEvent::CivilDawn)?,
        sunrise: at(TwilightEvent::Sunrise)?,
        solar_noon: at(TwilightEvent::SolarNoon)?,
        sunset: at(TwilightEvent::Sunset)?,
        civil_dusk: at(TwilightEvent::CivilDusk)?,
        nautical_dusk: at(TwilightEvent::NauticalDusk)?,
        astronomical_dusk: at(TwilightEvent::AstronomicalDusk)?,
    };
    tracing::debug!(
        lat = coord.latitude_deg(),
        lon = coord.longitude_deg(),
        %date,
        "computed local twilight boundaries"
    );
    Ok(boundaries)
}
