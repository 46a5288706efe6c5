//! Error types for prayer-time calculation.

use miqat_solar::SolarError;
use miqat_twilight::TwilightError;

/// Errors surfaced by the calculator and the schedule orchestration.
///
/// None of these are fatal; each is specific to one set of inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PrayerError {
    /// Invalid location or an undefined hour angle.
    #[error(transparent)]
    Solar(#[from] SolarError),
    /// Twilight boundaries could not be obtained.
    #[error("twilight unavailable: {0}")]
    Twilight(#[from] TwilightError),
}

impl PrayerError {
    /// Coordinate out of range or the (0, 0) sentinel.
    pub fn is_invalid_location(&self) -> bool {
        matches!(self, Self::Solar(SolarError::InvalidLocation(_)))
    }

    /// The Sun never reaches a required depression angle on this day.
    pub fn is_polar_undefined(&self) -> bool {
        matches!(
            self,
            Self::Solar(SolarError::PolarUndefined { .. })
                | Self::Twilight(TwilightError::Solar(SolarError::PolarUndefined { .. }))
        )
    }

    /// The twilight source failed; the formula path may still succeed.
    pub fn is_twilight_unavailable(&self) -> bool {
        matches!(self, Self::Twilight(_))
    }
}
