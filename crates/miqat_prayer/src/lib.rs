//! Islamic prayer times and current-period resolution.
//!
//! This crate provides:
//! - The six daily prayer instants, anchored on twilight boundaries or
//!   computed from closed-form formulas
//! - The period containing a given instant, with a configurable lead-in
//! - A contiguous 24 h partition of the day
//! - [`daily_schedule`], which queries a [`miqat_twilight::TwilightProvider`]
//!   and falls back to the formulas when it fails
//!
//! Everything except [`daily_schedule`] is synchronous and pure; `now` is
//! always an explicit argument.

pub mod calculator;
pub mod error;
pub mod period;
pub mod period_types;
pub mod prayer_types;
pub mod schedule;

pub use calculator::{
    SolarSource, asr_offset_hours, calculate_from_formula, calculate_prayer_schedule,
    calculate_with_source, calculate_with_twilight, fajr_adjustment_minutes,
    isha_adjustment_minutes,
};
pub use error::PrayerError;
pub use period::{
    clock_angle_deg, compute_day_periods, day_period_at, next_transition, next_transition_with,
    resolve_current_period, time_remaining,
};
pub use period_types::{
    ALL_PRAYER_PERIODS, DEFAULT_LEAD_IN_MINUTES, DayPeriod, DayPeriodKind, PrayerPeriod,
    ResolverConfig, Transition,
};
pub use prayer_types::{
    ALL_PRAYERS, AsrMethod, Prayer, PrayerRequest, PrayerSchedule, ScheduleSource,
};
pub use schedule::{DailySchedule, daily_schedule};
