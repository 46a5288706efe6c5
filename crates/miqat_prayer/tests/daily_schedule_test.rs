//! Provider orchestration: anchored path on success, formula fallback on failure.

use std::future::Future;

use chrono::{FixedOffset, NaiveDate};
use miqat_prayer::{AsrMethod, PrayerRequest, ScheduleSource, daily_schedule};
use miqat_solar::{GeoCoordinate, TwilightBoundaries};
use miqat_twilight::{SolarTwilightProvider, TwilightError, TwilightProvider, parse_response};

/// Always answers with a fixed authority payload.
struct PayloadProvider(&'static str);

impl TwilightProvider for PayloadProvider {
    fn twilight_boundaries(
        &self,
        _coord: GeoCoordinate,
        _date: NaiveDate,
        offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send {
        std::future::ready(parse_response(self.0, offset))
    }
}

/// Always fails as if the network were down.
struct OfflineProvider;

impl TwilightProvider for OfflineProvider {
    fn twilight_boundaries(
        &self,
        _coord: GeoCoordinate,
        _date: NaiveDate,
        _offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send {
        std::future::ready(Err(TwilightError::Transport(
            "connection refused".to_owned(),
        )))
    }
}

fn mecca() -> PrayerRequest {
    PrayerRequest::new(
        GeoCoordinate::new(21.4225, 39.8262).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        FixedOffset::east_opt(3 * 3600).unwrap(),
        AsrMethod::Standard,
    )
}

#[tokio::test]
async fn local_provider_anchors_schedule() {
    let daily = daily_schedule(&SolarTwilightProvider, &mecca()).await.unwrap();
    assert!(!daily.is_degraded());
    assert!(daily.twilight.is_some());
    assert_eq!(daily.schedule.source, ScheduleSource::TwilightAnchored);
    assert!(daily.schedule.is_ordered());
}

#[tokio::test]
async fn transport_failure_falls_back() {
    let daily = daily_schedule(&OfflineProvider, &mecca()).await.unwrap();
    assert!(daily.is_degraded());
    assert!(daily.twilight.is_none());
    assert_eq!(daily.schedule.source, ScheduleSource::Formula);
    assert!(
        daily
            .fallback_reason
            .as_deref()
            .is_some_and(|r| r.contains("connection refused"))
    );
}

#[tokio::test]
async fn bad_status_falls_back() {
    let provider = PayloadProvider(r#"{"results": "", "status": "INVALID_REQUEST"}"#);
    let daily = daily_schedule(&provider, &mecca()).await.unwrap();
    assert!(daily.is_degraded());
    assert_eq!(daily.schedule.source, ScheduleSource::Formula);
}

#[tokio::test]
async fn epoch_sentinel_falls_back() {
    let provider = PayloadProvider(
        r#"{
  "results": {
    "sunrise": "2024-03-20T03:25:54+00:00",
    "sunset": "2024-03-20T15:32:36+00:00",
    "solar_noon": "2024-03-20T09:29:15+00:00",
    "civil_twilight_begin": "2024-03-20T03:04:15+00:00",
    "civil_twilight_end": "2024-03-20T15:54:15+00:00",
    "nautical_twilight_begin": "2024-03-20T02:39:12+00:00",
    "nautical_twilight_end": "2024-03-20T16:19:18+00:00",
    "astronomical_twilight_begin": "1970-01-01T00:00:01+00:00",
    "astronomical_twilight_end": "1970-01-01T00:00:01+00:00"
  },
  "status": "OK"
}"#,
    );
    let daily = daily_schedule(&provider, &mecca()).await.unwrap();
    assert!(daily.is_degraded());
    assert!(
        daily
            .fallback_reason
            .as_deref()
            .is_some_and(|r| r.contains("astronomical_twilight_begin"))
    );
}

#[tokio::test]
async fn polar_fallback_still_fails() {
    let req = PrayerRequest::new(
        GeoCoordinate::new(78.22, 15.65).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
        FixedOffset::east_opt(3600).unwrap(),
        AsrMethod::Standard,
    );
    let err = daily_schedule(&SolarTwilightProvider, &req).await.unwrap_err();
    assert!(err.is_polar_undefined(), "{err:?}");
}
