//! Environment configuration for the `miqat` binary.
//!
//! Every variable is optional; command-line flags take precedence over
//! whatever is loaded here.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;
use miqat_prayer::{AsrMethod, DEFAULT_LEAD_IN_MINUTES, ResolverConfig};
use miqat_twilight::{DEFAULT_BASE_URL, ProviderConfig};

use crate::error::CliError;

/// Fallback location when no coordinates are supplied: the Kaaba, Mecca.
pub const DEFAULT_LATITUDE: f64 = 21.4225;
pub const DEFAULT_LONGITUDE: f64 = 39.8262;

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Twilight authority endpoint and timeout.
    pub provider: ProviderConfig,
    pub resolver: ResolverConfig,
    /// Used unless `--hanafi` is passed.
    pub asr_method: AsrMethod,
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            resolver: ResolverConfig::default(),
            asr_method: AsrMethod::default(),
            default_latitude: DEFAULT_LATITUDE,
            default_longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `MIQAT_TWILIGHT_URL` -- twilight authority base URL (default sunrise-sunset.org)
    /// - `MIQAT_HTTP_TIMEOUT_MS` -- request timeout in milliseconds (default 5000)
    /// - `MIQAT_LEAD_IN_MINUTES` -- period lead-in (default 10)
    /// - `MIQAT_ASR_METHOD` -- `standard` or `hanafi` (default `standard`)
    /// - `MIQAT_DEFAULT_LATITUDE` / `MIQAT_DEFAULT_LONGITUDE` -- location used
    ///   when `--lat`/`--lon` are omitted (default Mecca)
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MIQAT_TWILIGHT_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout_ms: u64 = parse_var(&lookup, "MIQAT_HTTP_TIMEOUT_MS", 5000)?;
        let lead_in_minutes: i64 =
            parse_var(&lookup, "MIQAT_LEAD_IN_MINUTES", DEFAULT_LEAD_IN_MINUTES)?;
        if lead_in_minutes < 0 {
            return Err(CliError::Config(format!(
                "invalid MIQAT_LEAD_IN_MINUTES: {lead_in_minutes} is negative"
            )));
        }

        let asr_method = match lookup("MIQAT_ASR_METHOD") {
            Some(key) => AsrMethod::from_key(&key)
                .ok_or_else(|| CliError::Config(format!("invalid MIQAT_ASR_METHOD: {key}")))?,
            None => AsrMethod::default(),
        };

        Ok(Self {
            provider: ProviderConfig {
                base_url,
                timeout: Duration::from_millis(timeout_ms),
            },
            resolver: ResolverConfig {
                lead_in: TimeDelta::minutes(lead_in_minutes),
            },
            asr_method,
            default_latitude: parse_var(&lookup, "MIQAT_DEFAULT_LATITUDE", DEFAULT_LATITUDE)?,
            default_longitude: parse_var(&lookup, "MIQAT_DEFAULT_LONGITUDE", DEFAULT_LONGITUDE)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CliError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CliError::Config(format!("invalid {key}: {e}"))),
        None => Ok(default),
    }
}
