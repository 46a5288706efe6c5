//! The twilight provider seam and its local implementation.

use std::future::Future;

use chrono::{FixedOffset, NaiveDate};
use miqat_solar::{GeoCoordinate, TwilightBoundaries, compute_twilight_boundaries};

use crate::error::TwilightError;

/// A source of the nine daily solar boundaries.
///
/// Implementations do not retry; a failed call is reported once and the
/// caller decides whether to retry or fall back.
pub trait TwilightProvider {
    /// Boundaries for `date` at `coord`, expressed in the local time of `offset`.
    fn twilight_boundaries(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send;
}

/// Provider that computes boundaries locally from closed-form solar math.
///
/// Never touches the network; useful offline and as a deterministic source
/// in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTwilightProvider;

impl TwilightProvider for SolarTwilightProvider {
    fn twilight_boundaries(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send {
        let result = compute_twilight_boundaries(&coord, date, offset).map_err(TwilightError::from);
        std::future::ready(result)
    }
}
