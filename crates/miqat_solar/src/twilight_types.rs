//! Types for the nine daily solar boundaries.

use crate::local_time::LocalTime;
use crate::solar::{
    ASTRONOMICAL_ZENITH_DEG, CIVIL_ZENITH_DEG, NAUTICAL_ZENITH_DEG, SUNRISE_ZENITH_DEG,
};

/// A named solar boundary within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwilightEvent {
    /// Sun center 18 deg below the horizon, morning.
    AstronomicalDawn,
    /// Sun center 12 deg below the horizon, morning.
    NauticalDawn,
    /// Sun center 6 deg below the horizon, morning.
    CivilDawn,
    /// Upper limb on the horizon, with refraction, morning.
    Sunrise,
    /// Solar transit.
    SolarNoon,
    /// Upper limb on the horizon, with refraction, evening.
    Sunset,
    /// Sun center 6 deg below the horizon, evening.
    CivilDusk,
    /// Sun center 12 deg below the horizon, evening.
    NauticalDusk,
    /// Sun center 18 deg below the horizon, evening.
    AstronomicalDusk,
}

/// All nine boundaries in chronological order.
pub const ALL_TWILIGHT_EVENTS: [TwilightEvent; 9] = [
    TwilightEvent::AstronomicalDawn,
    TwilightEvent::NauticalDawn,
    TwilightEvent::CivilDawn,
    TwilightEvent::Sunrise,
    TwilightEvent::SolarNoon,
    TwilightEvent::Sunset,
    TwilightEvent::CivilDusk,
    TwilightEvent::NauticalDusk,
    TwilightEvent::AstronomicalDusk,
];

impl TwilightEvent {
    /// Zenith distance of the Sun's center at this boundary, in degrees.
    ///
    /// `None` for solar noon, which is defined by transit rather than altitude.
    pub fn zenith_deg(self) -> Option<f64> {
        match self {
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(ASTRONOMICAL_ZENITH_DEG),
            Self::NauticalDawn | Self::NauticalDusk => Some(NAUTICAL_ZENITH_DEG),
            Self::CivilDawn | Self::CivilDusk => Some(CIVIL_ZENITH_DEG),
            Self::Sunrise | Self::Sunset => Some(SUNRISE_ZENITH_DEG),
            Self::SolarNoon => None,
        }
    }

    /// Whether this boundary falls before solar noon.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::AstronomicalDawn | Self::NauticalDawn | Self::CivilDawn | Self::Sunrise
        )
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::NauticalDawn => "Nautical dawn",
            Self::CivilDawn => "Civil dawn",
            Self::Sunrise => "Sunrise",
            Self::SolarNoon => "Solar noon",
            Self::Sunset => "Sunset",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// The nine solar boundaries of one calendar day, in local wall-clock time.
///
/// Expected to be non-decreasing in field order; extreme latitudes may
/// break that, see [`TwilightBoundaries::is_monotonic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwilightBoundaries {
    pub astronomical_dawn: LocalTime,
    pub nautical_dawn: LocalTime,
    pub civil_dawn: LocalTime,
    pub sunrise: LocalTime,
    pub solar_noon: LocalTime,
    pub sunset: LocalTime,
    pub civil_dusk: LocalTime,
    pub nautical_dusk: LocalTime,
    pub astronomical_dusk: LocalTime,
}

impl TwilightBoundaries {
    /// Time of a single boundary.
    pub fn get(&self, event: TwilightEvent) -> LocalTime {
        match event {
            TwilightEvent::AstronomicalDawn => self.astronomical_dawn,
            TwilightEvent::NauticalDawn => self.nautical_dawn,
            TwilightEvent::CivilDawn => self.civil_dawn,
            TwilightEvent::Sunrise => self.sunrise,
            TwilightEvent::SolarNoon => self.solar_noon,
            TwilightEvent::Sunset => self.sunset,
            TwilightEvent::CivilDusk => self.civil_dusk,
            TwilightEvent::NauticalDusk => self.nautical_dusk,
            TwilightEvent::AstronomicalDusk => self.astronomical_dusk,
        }
    }

    /// All boundaries paired with their event, in field order.
    pub fn events(&self) -> [(TwilightEvent, LocalTime); 9] {
        ALL_TWILIGHT_EVENTS.map(|e| (e, self.get(e)))
    }

    /// Whether the boundaries are non-decreasing in chronological order.
    pub fn is_monotonic(&self) -> bool {
        self.events().windows(2).all(|w| w[0].1 <= w[1].1)
    }
}
