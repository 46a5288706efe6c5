//! Error type for the command-line front end.

use miqat_prayer::PrayerError;
use miqat_solar::SolarError;
use miqat_twilight::TwilightError;

/// Errors that end a CLI invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An environment variable could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-line value is out of range.
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Solar(#[from] SolarError),

    #[error(transparent)]
    Twilight(#[from] TwilightError),

    #[error(transparent)]
    Prayer(#[from] PrayerError),
}
