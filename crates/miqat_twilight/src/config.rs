//! Provider configuration.

use std::time::Duration;

/// Default base URL of the sunrise-sunset.org API.
pub const DEFAULT_BASE_URL: &str = "https://api.sunrise-sunset.org";

/// Default transport timeout for one boundary request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the HTTP twilight provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL; `/json` is appended for requests.
    pub base_url: String,
    /// Whole-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ProviderConfig::default();
        assert_eq!(c.base_url, "https://api.sunrise-sunset.org");
        assert_eq!(c.timeout, Duration::from_secs(5));
    }
}
