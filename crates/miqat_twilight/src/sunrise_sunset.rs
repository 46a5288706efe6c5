//! Client for the sunrise-sunset.org boundary API.
//!
//! `GET {base}/json?lat=..&lng=..&date=YYYY-MM-DD&formatted=0` returns
//!
//! ```json
//! {"results": {"sunrise": "2024-03-20T03:25:54+00:00", ...}, "status": "OK"}
//! ```
//!
//! with UTC ISO-8601 timestamps. Events that do not happen on the date
//! (polar day or night) are reported as `1970-01-01T00:00:01+00:00`.

use std::future::Future;

use chrono::{DateTime, FixedOffset, NaiveDate};
use miqat_solar::{GeoCoordinate, TwilightBoundaries};
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::TwilightError;
use crate::provider::TwilightProvider;

/// API status for a successful lookup.
const STATUS_OK: &str = "OK";

/// Timestamps at or before this Unix second mark "no such event".
const NO_EVENT_SENTINEL_SECS: i64 = 1;

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    results: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Results {
    sunrise: DateTime<FixedOffset>,
    sunset: DateTime<FixedOffset>,
    #[serde(default)]
    solar_noon: Option<DateTime<FixedOffset>>,
    civil_twilight_begin: DateTime<FixedOffset>,
    civil_twilight_end: DateTime<FixedOffset>,
    nautical_twilight_begin: DateTime<FixedOffset>,
    nautical_twilight_end: DateTime<FixedOffset>,
    astronomical_twilight_begin: DateTime<FixedOffset>,
    astronomical_twilight_end: DateTime<FixedOffset>,
}

/// HTTP provider backed by sunrise-sunset.org (or any server speaking its format).
#[derive(Debug, Clone)]
pub struct SunriseSunsetClient {
    client: reqwest::Client,
    base_url: String,
}

impl SunriseSunsetClient {
    /// Build a client whose every request is bounded by `config.timeout`.
    pub fn new(config: &ProviderConfig) -> Result<Self, TwilightError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TwilightError::Transport(format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Full URL of the JSON endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/json", self.base_url.trim_end_matches('/'))
    }

    async fn fetch(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<TwilightBoundaries, TwilightError> {
        let url = self.endpoint();
        let date_param = date.format("%Y-%m-%d").to_string();
        tracing::debug!(
            %url,
            lat = coord.latitude_deg(),
            lon = coord.longitude_deg(),
            date = %date_param,
            "requesting twilight boundaries"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coord.latitude_deg().to_string()),
                ("lng", coord.longitude_deg().to_string()),
                ("date", date_param),
                ("formatted", "0".to_owned()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TwilightError::Status(status.to_string()));
        }

        let body = response.text().await?;
        parse_response(&body, offset)
    }
}

impl TwilightProvider for SunriseSunsetClient {
    fn twilight_boundaries(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send {
        self.fetch(coord, date, offset)
    }
}

/// Decode an API response body into boundaries in the local time of `offset`.
///
/// A missing `solar_noon` is taken as the midpoint of sunrise and sunset.
pub fn parse_response(body: &str, offset: FixedOffset) -> Result<TwilightBoundaries, TwilightError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.status != STATUS_OK {
        return Err(TwilightError::Status(envelope.status));
    }
    let r: Results = serde_json::from_value(envelope.results)?;

    let solar_noon = r
        .solar_noon
        .unwrap_or_else(|| r.sunrise + (r.sunset - r.sunrise) / 2);

    let local = |t: DateTime<FixedOffset>, name: &'static str| {
        if t.timestamp() <= NO_EVENT_SENTINEL_SECS {
            Err(TwilightError::NoEvent(name))
        } else {
            Ok(t.with_timezone(&offset))
        }
    };

    Ok(TwilightBoundaries {
        astronomical_dawn: local(r.astronomical_twilight_begin, "astronomical_twilight_begin")?,
        nautical_dawn: local(r.nautical_twilight_begin, "nautical_twilight_begin")?,
        civil_dawn: local(r.civil_twilight_begin, "civil_twilight_begin")?,
        sunrise: local(r.sunrise, "sunrise")?,
        solar_noon: local(solar_noon, "solar_noon")?,
        sunset: local(r.sunset, "sunset")?,
        civil_dusk: local(r.civil_twilight_end, "civil_twilight_end")?,
        nautical_dusk: local(r.nautical_twilight_end, "nautical_twilight_end")?,
        astronomical_dusk: local(r.astronomical_twilight_end, "astronomical_twilight_end")?,
    })
}
