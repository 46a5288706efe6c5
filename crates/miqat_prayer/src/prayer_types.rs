//! Types for prayer-time calculation inputs and results.

use chrono::{Days, FixedOffset, NaiveDate};
use miqat_solar::{GeoCoordinate, LocalTime};

/// Juristic method fixing the Asr shadow ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrMethod {
    /// Shafi, Maliki, Hanbali: shadow equals object height (factor 1).
    #[default]
    Standard,
    /// Hanafi: shadow equals twice the object height (factor 2).
    Hanafi,
}

impl AsrMethod {
    /// Shadow length as a multiple of object height, beyond the noon shadow.
    pub fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    /// Stable lowercase identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hanafi => "hanafi",
        }
    }

    /// Parse a key produced by [`AsrMethod::key`] (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "standard" | "shafi" => Some(Self::Standard),
            "hanafi" => Some(Self::Hanafi),
            _ => None,
        }
    }
}

/// The six canonical daily prayer instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// All six prayers in daily order.
pub const ALL_PRAYERS: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// Stable lowercase identifier (`fajr`, `sunrise`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Inverse of [`Prayer::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_PRAYERS.into_iter().find(|p| p.key() == key)
    }
}

/// Every explicit input to one prayer-schedule calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerRequest {
    pub coordinate: GeoCoordinate,
    /// Local calendar date.
    pub date: NaiveDate,
    /// Offset of local wall-clock time from UTC.
    pub utc_offset: FixedOffset,
    pub asr_method: AsrMethod,
}

impl PrayerRequest {
    pub fn new(
        coordinate: GeoCoordinate,
        date: NaiveDate,
        utc_offset: FixedOffset,
        asr_method: AsrMethod,
    ) -> Self {
        Self {
            coordinate,
            date,
            utc_offset,
            asr_method,
        }
    }

    /// The same request for the following calendar day.
    ///
    /// `None` only at the end of chrono's representable range.
    pub fn next_day(&self) -> Option<Self> {
        let date = self.date.checked_add_days(Days::new(1))?;
        Some(Self { date, ..*self })
    }
}

/// Which algorithm produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleSource {
    /// Anchored on externally supplied (or locally computed) twilight boundaries.
    TwilightAnchored,
    /// Self-contained closed-form formulas, minute resolution.
    Formula,
}

impl ScheduleSource {
    /// Whether the schedule should be presented as approximate.
    pub fn is_reduced_accuracy(self) -> bool {
        matches!(self, Self::Formula)
    }
}

/// The six prayer instants of one day, in local wall-clock time.
///
/// Built once per (location, date) and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerSchedule {
    pub fajr: LocalTime,
    pub sunrise: LocalTime,
    pub dhuhr: LocalTime,
    pub asr: LocalTime,
    pub maghrib: LocalTime,
    pub isha: LocalTime,
    /// Inputs the schedule was computed from.
    pub request: PrayerRequest,
    pub source: ScheduleSource,
}

impl PrayerSchedule {
    /// Time of a single prayer.
    pub fn get(&self, prayer: Prayer) -> LocalTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// All six prayers with their times, in daily order.
    pub fn times(&self) -> [(Prayer, LocalTime); 6] {
        ALL_PRAYERS.map(|p| (p, self.get(p)))
    }

    /// Whether `fajr < sunrise < dhuhr < asr < maghrib < isha` strictly.
    pub fn is_ordered(&self) -> bool {
        self.times().windows(2).all(|w| w[0].1 < w[1].1)
    }
}
