//! Twilight boundary providers.
//!
//! This crate provides:
//! - The [`TwilightProvider`] trait, the asynchronous seam in front of any
//!   boundary source
//! - [`SunriseSunsetClient`], an HTTP client for the sunrise-sunset.org API
//! - [`SolarTwilightProvider`], a local closed-form fallback
//!
//! Providers never retry. Any failure is a [`TwilightError`] and callers are
//! expected to fall back to the self-contained prayer formulas.

pub mod config;
pub mod error;
pub mod provider;
pub mod sunrise_sunset;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ProviderConfig};
pub use error::TwilightError;
pub use provider::{SolarTwilightProvider, TwilightProvider};
pub use sunrise_sunset::{SunriseSunsetClient, parse_response};
