//! Closed-form solar math for daily prayer and twilight boundaries.
//!
//! This crate provides:
//! - Validated geographic coordinates
//! - Solar declination, equation of time, transit and hour angle
//! - The nine daily twilight boundaries, computed locally
//! - Decimal-hour to local wall-clock conversions
//!
//! All functions are pure: every input, including the UTC offset, is explicit.

pub mod coordinate;
pub mod error;
pub mod local_time;
pub mod solar;
pub mod twilight;
pub mod twilight_types;

pub use coordinate::GeoCoordinate;
pub use error::SolarError;
pub use local_time::{
    LocalTime, add_hours, clock_hours_to_local, end_of_local_day, local_midnight, offset_hours,
    precise_hours_to_local,
};
pub use solar::{
    ASTRONOMICAL_ZENITH_DEG, CIVIL_ZENITH_DEG, ISHA_ZENITH_DEG, NAUTICAL_ZENITH_DEG,
    SUNRISE_ZENITH_DEG, asr_altitude_deg, day_of_year, equation_of_time_minutes, hour_angle_deg,
    solar_declination_deg, solar_noon_hours,
};
pub use twilight::{compute_twilight_boundaries, twilight_event_hours};
pub use twilight_types::{ALL_TWILIGHT_EVENTS, TwilightBoundaries, TwilightEvent};
