//! Types for current-period resolution and day partitioning.

use chrono::TimeDelta;
use miqat_solar::LocalTime;

use crate::prayer_types::Prayer;

/// Default lead-in: a period counts as entered this long before its start.
pub const DEFAULT_LEAD_IN_MINUTES: i64 = 10;

/// Named period containing a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerPeriod {
    /// From midnight until the Fajr lead-in.
    Night,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    /// From Isha until local midnight.
    Isha,
}

/// All seven periods, from the start of the local day.
pub const ALL_PRAYER_PERIODS: [PrayerPeriod; 7] = [
    PrayerPeriod::Night,
    PrayerPeriod::Fajr,
    PrayerPeriod::Sunrise,
    PrayerPeriod::Dhuhr,
    PrayerPeriod::Asr,
    PrayerPeriod::Maghrib,
    PrayerPeriod::Isha,
];

impl PrayerPeriod {
    /// Stable lowercase identifier.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    /// The prayer that opens this period, if any.
    pub const fn prayer(self) -> Option<Prayer> {
        match self {
            Self::Night => None,
            Self::Fajr => Some(Prayer::Fajr),
            Self::Sunrise => Some(Prayer::Sunrise),
            Self::Dhuhr => Some(Prayer::Dhuhr),
            Self::Asr => Some(Prayer::Asr),
            Self::Maghrib => Some(Prayer::Maghrib),
            Self::Isha => Some(Prayer::Isha),
        }
    }
}

/// The next prayer instant after the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub prayer: Prayer,
    pub time: LocalTime,
}

/// Resolver tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// How early a period is considered entered. Does not apply to Isha.
    pub lead_in: TimeDelta,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            lead_in: TimeDelta::minutes(DEFAULT_LEAD_IN_MINUTES),
        }
    }
}

/// Segment of the 24 h dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriodKind {
    Night,
    Fajr,
    Sunrise,
    Morning,
    Dhuhr,
    Asr,
    Maghrib,
}

impl DayPeriodKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Morning => "Morning",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
        }
    }
}

/// A named half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPeriod {
    pub kind: DayPeriodKind,
    pub start: LocalTime,
    pub end: LocalTime,
}

impl DayPeriod {
    /// Length of the interval; negative for an inconsistent schedule.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Zero or negative width. Such periods should be skipped, not reported.
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `t` lies in `[start, end)`.
    pub fn contains(&self, t: &LocalTime) -> bool {
        self.start <= *t && *t < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use miqat_solar::local_midnight;

    fn at(hours: i64) -> LocalTime {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        local_midnight(date, FixedOffset::east_opt(0).unwrap()) + TimeDelta::hours(hours)
    }

    #[test]
    fn default_lead_in() {
        assert_eq!(ResolverConfig::default().lead_in, TimeDelta::minutes(10));
    }

    #[test]
    fn period_keys_and_prayers() {
        assert_eq!(PrayerPeriod::Night.key(), "night");
        assert_eq!(PrayerPeriod::Night.prayer(), None);
        assert_eq!(PrayerPeriod::Asr.prayer(), Some(Prayer::Asr));
        for p in ALL_PRAYER_PERIODS.iter().skip(1) {
            assert_eq!(p.prayer().map(Prayer::key), Some(p.key()));
        }
    }

    #[test]
    fn half_open_interval() {
        let p = DayPeriod {
            kind: DayPeriodKind::Morning,
            start: at(7),
            end: at(12),
        };
        assert!(p.contains(&at(7)));
        assert!(p.contains(&at(11)));
        assert!(!p.contains(&at(12)));
        assert_eq!(p.duration(), TimeDelta::hours(5));
        assert!(!p.is_degenerate());
    }

    #[test]
    fn degenerate_interval() {
        let p = DayPeriod {
            kind: DayPeriodKind::Sunrise,
            start: at(12),
            end: at(12),
        };
        assert!(p.is_degenerate());
        assert!(!p.contains(&at(12)));
    }
}
