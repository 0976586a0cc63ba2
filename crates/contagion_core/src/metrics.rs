//! Population tallies and tick metrics for the simulation.
//!
//! Provides structured logging and counters for monitoring how an outbreak
//! progresses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use contagion_data::HealthState;

/// Head count per health band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub susceptible: usize,
    pub infected: usize,
    pub immune: usize,
}

impl Census {
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = HealthState>,
    {
        states
            .into_iter()
            .fold(Census::default(), |mut census, state| {
                match state {
                    HealthState::Susceptible => census.susceptible += 1,
                    HealthState::Infected { .. } => census.infected += 1,
                    HealthState::Immune => census.immune += 1,
                }
                census
            })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.immune
    }
}

/// Metrics collector for a single simulation run.
#[derive(Debug)]
pub struct Metrics {
    tick_count: AtomicU64,
    transmissions: AtomicU64,
    reflections: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector that logs every 100 ticks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_log_interval(100)
    }

    #[must_use]
    pub fn with_log_interval(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            transmissions: AtomicU64::new(0),
            reflections: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, census: Census, new_infections: u64) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.transmissions
            .fetch_add(new_infections, Ordering::Relaxed);

        if tick.is_multiple_of(self.log_interval) {
            tracing::info!(
                tick = tick,
                susceptible = census.susceptible,
                infected = census.infected,
                immune = census.immune,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_reflection(&self) {
        self.reflections.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Total disease transfers since creation.
    #[must_use]
    pub fn transmissions(&self) -> u64 {
        self.transmissions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn reflections(&self) -> u64 {
        self.reflections.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG` and defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
