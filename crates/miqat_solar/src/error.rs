//! Error types for solar calculations.

/// Errors from solar-position and hour-angle calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Coordinate is out of range, not finite, or the (0, 0) "unset" sentinel.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// The Sun never reaches the requested zenith on this day
    /// (continuous day or night near the poles).
    #[error("hour angle undefined for zenith {zenith_deg} deg (cos H = {cos_h})")]
    PolarUndefined {
        /// Zenith distance that was requested, in degrees.
        zenith_deg: f64,
        /// The out-of-domain arccos argument.
        cos_h: f64,
    },
}
