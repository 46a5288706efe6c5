//! Error types for twilight providers.

use miqat_solar::SolarError;

/// Reasons a provider could not deliver twilight boundaries.
///
/// Every variant means "twilight unavailable": callers are expected to fall
/// back to the self-contained formula path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TwilightError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("twilight request failed: {0}")]
    Transport(String),
    /// The authority answered with a non-success HTTP or API status.
    #[error("twilight authority returned status {0}")]
    Status(String),
    /// The response body could not be decoded.
    #[error("twilight response parse error: {0}")]
    Parse(String),
    /// The authority reports that a boundary does not occur on this day.
    #[error("twilight boundary does not occur: {0}")]
    NoEvent(&'static str),
    /// Local computation failed.
    #[error(transparent)]
    Solar(#[from] SolarError),
}

impl From<reqwest::Error> for TwilightError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TwilightError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
