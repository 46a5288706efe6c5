//! Runtime selection between the HTTP authority and the local solar provider.

use std::future::Future;

use chrono::{FixedOffset, NaiveDate};
use miqat_solar::{GeoCoordinate, TwilightBoundaries};
use miqat_twilight::{
    ProviderConfig, SolarTwilightProvider, SunriseSunsetClient, TwilightError, TwilightProvider,
};

/// The provider picked by `--offline`.
#[derive(Debug, Clone)]
pub enum AnyProvider {
    Http(SunriseSunsetClient),
    Local(SolarTwilightProvider),
}

impl AnyProvider {
    pub fn new(offline: bool, config: &ProviderConfig) -> Result<Self, TwilightError> {
        if offline {
            Ok(Self::Local(SolarTwilightProvider))
        } else {
            SunriseSunsetClient::new(config).map(Self::Http)
        }
    }

    /// Short label for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Http(_) => "sunrise-sunset",
            Self::Local(_) => "local-solar",
        }
    }
}

impl TwilightProvider for AnyProvider {
    fn twilight_boundaries(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> impl Future<Output = Result<TwilightBoundaries, TwilightError>> + Send {
        async move {
            match self {
                Self::Http(client) => client.twilight_boundaries(coord, date, offset).await,
                Self::Local(local) => local.twilight_boundaries(coord, date, offset).await,
            }
        }
    }
}
