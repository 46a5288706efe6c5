//! `miqat`: daily prayer times, twilight boundaries and the current period.
//!
//! Boundaries come from the sunrise-sunset.org authority unless `--offline`
//! is given. When the authority fails, the schedule is recomputed from the
//! closed-form formulas and marked approximate.

mod config;
mod error;
mod provider;

use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Offset, TimeDelta, Utc};
use clap::{Args, Parser, Subcommand};
use miqat_prayer::{
    AsrMethod, DailySchedule, PrayerPeriod, PrayerRequest, PrayerSchedule, ResolverConfig,
    Transition, clock_angle_deg, compute_day_periods, daily_schedule, next_transition,
    resolve_current_period, time_remaining,
};
use miqat_solar::{GeoCoordinate, LocalTime};
use miqat_twilight::TwilightProvider;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::CliError;
use crate::provider::AnyProvider;

#[derive(Parser)]
#[command(name = "miqat", about = "Islamic prayer times and twilight boundaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the six prayer times for a day
    Times {
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Print the nine twilight boundaries for a day
    Twilight {
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Print the 24 h partition of the day
    Periods {
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Print the current period, time remaining and next prayer
    Now {
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Keep printing the current period until interrupted
    Watch {
        #[command(flatten)]
        loc: LocationArgs,
        /// Seconds between updates
        #[arg(long, default_value_t = 60)]
        interval_secs: u64,
    },
}

#[derive(Args, Debug, Clone)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Local date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// UTC offset in hours (e.g. 3, -5, 5.5); defaults to the system offset
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,
    /// Use the Hanafi Asr shadow ratio
    #[arg(long, conflicts_with = "standard")]
    hanafi: bool,
    /// Use the standard Asr shadow ratio, overriding MIQAT_ASR_METHOD
    #[arg(long)]
    standard: bool,
    /// Compute twilight locally instead of querying the authority
    #[arg(long)]
    offline: bool,
}

fn parse_offset(hours: Option<f64>) -> Result<FixedOffset, CliError> {
    let Some(hours) = hours else {
        return Ok(chrono::Local::now().offset().fix());
    };
    let seconds = (hours * 3600.0).round();
    if !seconds.is_finite() || seconds.abs() >= 86_400.0 {
        return Err(CliError::Argument(format!("utc offset {hours} out of range")));
    }
    FixedOffset::east_opt(seconds as i32)
        .ok_or_else(|| CliError::Argument(format!("utc offset {hours} out of range")))
}

fn now_in(offset: FixedOffset) -> LocalTime {
    Utc::now().with_timezone(&offset)
}

fn build_request(loc: &LocationArgs, config: &AppConfig) -> Result<PrayerRequest, CliError> {
    let coordinate = GeoCoordinate::new(
        loc.lat.unwrap_or(config.default_latitude),
        loc.lon.unwrap_or(config.default_longitude),
    )?;
    let utc_offset = parse_offset(loc.utc_offset)?;
    let date = loc.date.unwrap_or_else(|| now_in(utc_offset).date_naive());
    let asr_method = if loc.hanafi {
        AsrMethod::Hanafi
    } else if loc.standard {
        AsrMethod::Standard
    } else {
        config.asr_method
    };
    Ok(PrayerRequest::new(coordinate, date, utc_offset, asr_method))
}

fn hm(t: &LocalTime) -> String {
    t.format("%H:%M").to_string()
}

fn format_remaining(d: TimeDelta) -> String {
    let minutes = d.num_minutes();
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

fn print_header(request: &PrayerRequest) {
    println!(
        "{} at {:.4}, {:.4} (UTC{})",
        request.date,
        request.coordinate.latitude_deg(),
        request.coordinate.longitude_deg(),
        request.utc_offset
    );
}

fn print_times(daily: &DailySchedule) {
    let s = &daily.schedule;
    print_header(&s.request);
    for (prayer, t) in s.times() {
        println!("  {:<8} {}", prayer.name(), hm(&t));
    }
    println!("  Asr method: {}", s.request.asr_method.key());
    match &daily.fallback_reason {
        Some(reason) => println!("  Source: formula, approximate ({reason})"),
        None if s.source.is_reduced_accuracy() => println!("  Source: formula, approximate"),
        None => println!("  Source: twilight boundaries"),
    }
}

fn print_periods(schedule: &PrayerSchedule) {
    print_header(&schedule.request);
    for p in compute_day_periods(schedule) {
        let marker = if p.is_degenerate() { "  (empty)" } else { "" };
        println!(
            "  {:<8} {} - {}  {:>6.1} deg{marker}",
            p.kind.name(),
            hm(&p.start),
            hm(&p.end),
            clock_angle_deg(&p.start)
        );
    }
}

/// One line of `now`/`watch` output.
struct NowReport {
    now: LocalTime,
    period: PrayerPeriod,
    remaining: TimeDelta,
    /// `None` when the following prayer cannot be computed, e.g. tomorrow's
    /// Fajr on a day the Sun stays above 18 deg below the horizon.
    next: Option<Transition>,
}

impl NowReport {
    fn new(schedule: &PrayerSchedule, now: LocalTime, resolver: &ResolverConfig) -> Self {
        let next = match next_transition(schedule, &now, resolver) {
            Ok(t) => Some(t),
            Err(err) => {
                warn!(%err, "next prayer undefined");
                None
            }
        };
        Self {
            now,
            period: resolve_current_period(schedule, &now, resolver),
            remaining: time_remaining(schedule, &now, resolver),
            next,
        }
    }

    fn line(&self) -> String {
        let head = format!(
            "{}  {:<8} {} left",
            hm(&self.now),
            self.period.key(),
            format_remaining(self.remaining)
        );
        match &self.next {
            Some(next) => format!(
                "{head}, next {} at {}",
                next.prayer.name(),
                next.time.format("%Y-%m-%d %H:%M")
            ),
            None => format!("{head}, next prayer undefined"),
        }
    }
}

/// Schedule state carried across `watch` ticks.
struct WatchState {
    request: PrayerRequest,
    daily: DailySchedule,
}

impl WatchState {
    /// Recompute on date rollover, then report. A failed recomputation keeps
    /// the previous schedule and is retried on the next tick.
    async fn tick<P: TwilightProvider>(
        &mut self,
        provider: &P,
        now: LocalTime,
        resolver: &ResolverConfig,
    ) -> NowReport {
        if now.date_naive() != self.request.date {
            let request = PrayerRequest {
                date: now.date_naive(),
                ..self.request
            };
            info!(date = %request.date, "date changed, recomputing schedule");
            match daily_schedule(provider, &request).await {
                Ok(daily) => {
                    self.request = request;
                    self.daily = daily;
                }
                Err(err) => {
                    warn!(date = %request.date, %err, "keeping previous schedule");
                }
            }
        }
        NowReport::new(&self.daily.schedule, now, resolver)
    }
}

async fn watch(
    provider: &AnyProvider,
    request: PrayerRequest,
    resolver: &ResolverConfig,
    interval_secs: u64,
) -> Result<(), CliError> {
    let daily = daily_schedule(provider, &request).await?;
    let mut state = WatchState { request, daily };
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = now_in(state.request.utc_offset);
                println!("{}", state.tick(provider, now, resolver).await.line());
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                return Ok(());
            }
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Times { loc } => {
            let request = build_request(&loc, &config)?;
            let provider = AnyProvider::new(loc.offline, &config.provider)?;
            info!(provider = provider.name(), "computing prayer times");
            print_times(&daily_schedule(&provider, &request).await?);
        }
        Commands::Twilight { loc } => {
            let request = build_request(&loc, &config)?;
            let provider = AnyProvider::new(loc.offline, &config.provider)?;
            let boundaries = provider
                .twilight_boundaries(request.coordinate, request.date, request.utc_offset)
                .await?;
            print_header(&request);
            for (event, t) in boundaries.events() {
                println!("  {:<18} {}", event.name(), t.format("%H:%M:%S"));
            }
        }
        Commands::Periods { loc } => {
            let request = build_request(&loc, &config)?;
            let provider = AnyProvider::new(loc.offline, &config.provider)?;
            print_periods(&daily_schedule(&provider, &request).await?.schedule);
        }
        Commands::Now { loc } => {
            let request = build_request(&loc, &config)?;
            let provider = AnyProvider::new(loc.offline, &config.provider)?;
            let daily = daily_schedule(&provider, &request).await?;
            let now = now_in(request.utc_offset);
            println!("{}", NowReport::new(&daily.schedule, now, &config.resolver).line());
        }
        Commands::Watch { loc, interval_secs } => {
            let request = build_request(&loc, &config)?;
            let provider = AnyProvider::new(loc.offline, &config.provider)?;
            info!(provider = provider.name(), interval_secs, "watching current period");
            watch(&provider, request, &config.resolver, interval_secs).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!(error = %e, "miqat failed");
        return Err(e.into());
    }
    Ok(())
}
