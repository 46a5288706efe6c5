//! Geographic coordinate with range validation.

use crate::error::SolarError;

/// Geographic location on Earth's surface.
///
/// Only constructible through [`GeoCoordinate::new`], so every value in
/// circulation is finite and in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    /// The exact point (0, 0) is rejected: it is the "no location set"
    /// sentinel, not a real observer on the equator at Greenwich.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(SolarError::InvalidLocation(format!(
                "non-finite coordinate ({latitude_deg}, {longitude_deg})"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLocation(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLocation(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        if latitude_deg == 0.0 && longitude_deg == 0.0 {
            return Err(SolarError::InvalidLocation(
                "location not set (0, 0)".to_owned(),
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Geodetic longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mecca() {
        let c = GeoCoordinate::new(21.4225, 39.8262).unwrap();
        assert_eq!(c.latitude_deg(), 21.4225);
        assert_eq!(c.longitude_deg(), 39.8262);
    }

    #[test]
    fn accepts_bounds() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(0.0, 10.0).is_ok());
        assert!(GeoCoordinate::new(10.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_unset_sentinel() {
        let err = GeoCoordinate::new(0.0, 0.0).unwrap_err();
        assert!(matches!(err, SolarError::InvalidLocation(_)));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoCoordinate::new(90.5, 0.0).is_err());
        assert!(GeoCoordinate::new(-91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(45.0, 180.1).is_err());
        assert!(GeoCoordinate::new(45.0, -200.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(GeoCoordinate::new(f64::NAN, 10.0).is_err());
        assert!(GeoCoordinate::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn latitude_radians() {
        let c = GeoCoordinate::new(28.6139, 77.209).unwrap();
        assert!((c.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
    }
}
