//! Provider-backed daily schedule with formula fallback.

use miqat_solar::TwilightBoundaries;
use miqat_twilight::TwilightProvider;
use tracing::{debug, warn};

use crate::calculator::{calculate_from_formula, calculate_with_twilight};
use crate::error::PrayerError;
use crate::prayer_types::{PrayerRequest, PrayerSchedule};

/// A day's schedule together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySchedule {
    pub schedule: PrayerSchedule,
    /// Boundaries the schedule is anchored on; `None` on the formula path.
    pub twilight: Option<TwilightBoundaries>,
    /// Why the provider was not used, when it failed.
    pub fallback_reason: Option<String>,
}

impl DailySchedule {
    /// Whether the provider failed and the formula path was used instead.
    pub fn is_degraded(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Build the schedule for `request`, preferring the provider's boundaries.
///
/// Any provider failure is logged and replaced by the formula path. Errors
/// from the formula path itself (invalid location, polar day or night) are
/// returned.
pub async fn daily_schedule<P: TwilightProvider>(
    provider: &P,
    request: &PrayerRequest,
) -> Result<DailySchedule, PrayerError> {
    let fetched = provider
        .twilight_boundaries(request.coordinate, request.date, request.utc_offset)
        .await;

    match fetched {
        Ok(twilight) => {
            debug!(date = %request.date, "using provider twilight boundaries");
            let schedule = calculate_with_twilight(request, &twilight)?;
            Ok(DailySchedule {
                schedule,
                twilight: Some(twilight),
                fallback_reason: None,
            })
        }
        Err(err) => {
            warn!(date = %request.date, %err, "twilight unavailable, falling back to formulas");
            let schedule = calculate_from_formula(request)?;
            Ok(DailySchedule {
                schedule,
                twilight: None,
                fallback_reason: Some(err.to_string()),
            })
        }
    }
}
