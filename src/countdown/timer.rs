//! Periodic countdown refresh.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{Phase, compute};
use crate::dom::Document;

/// Refresh interval of the page countdown.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Result of a finished timer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSummary {
    pub ticks: u64,
    pub phase: Phase,
}

/// Refreshes the countdown targets once immediately and then every interval.
pub struct CountdownTimer {
    target: DateTime<Utc>,
    interval: Duration,
    halt_on_expiry: bool,
    max_ticks: Option<u64>,
    clock: Arc<dyn Clock>,
}

impl CountdownTimer {
    /// A zero interval falls back to one second.
    pub fn new(target: DateTime<Utc>, interval: Duration) -> Self {
        Self {
            target,
            interval: if interval.is_zero() {
                DEFAULT_INTERVAL
            } else {
                interval
            },
            halt_on_expiry: true,
            max_ticks: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Keep ticking after expiry instead of stopping once zeros are shown.
    pub fn with_halt_on_expiry(mut self, halt: bool) -> Self {
        self.halt_on_expiry = halt;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs one refresh against the document.
    pub async fn tick(&self, document: &Mutex<Document>) -> Phase {
        let (phase, shown) = compute(self.target, self.clock.now());
        document.lock().await.apply(shown.mutations());
        debug!(
            days = %shown.days,
            hours = %shown.hours,
            minutes = %shown.minutes,
            seconds = %shown.seconds,
            "Countdown tick"
        );
        phase
    }

    /// Ticks until the tick cap is reached or, when halting is enabled,
    /// until the expired display has been rendered.
    pub async fn run(self, document: Arc<Mutex<Document>>) -> TimerSummary {
        let mut interval = tokio::time::interval(self.interval);
        let mut ticks = 0;

        info!(target_at = %self.target, interval = ?self.interval, "Countdown started");

        let phase = loop {
            // The first tick completes immediately.
            interval.tick().await;
            let phase = self.tick(&document).await;
            ticks += 1;

            if phase == Phase::Expired && self.halt_on_expiry {
                info!(ticks, "Countdown finished");
                break phase;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break phase;
            }
        };

        TimerSummary { ticks, phase }
    }
}
