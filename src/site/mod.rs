//! Page bootstrap.
//!
//! Loads the content documents, starts the countdown and wires navigation,
//! in that order.

mod config;
mod error;

pub use config::SiteConfig;
pub use error::SiteError;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::{Config, SourceKind};
use crate::countdown::{
    self, Clock, CountdownTimer, DEFAULT_INTERVAL, DEFAULT_TARGET_DAYS, SystemClock, TimerSummary,
};
use crate::dom::Document;
use crate::loader::{ConfigLoader, DEFAULT_TIMEOUT, FileSource, HttpSource, LoadState, Source};
use crate::navigation;

/// The rendered landing page and its running countdown.
pub struct Site {
    cfg: Config,
    loader: ConfigLoader,
    clock: Arc<dyn Clock>,
    document: Arc<Mutex<Document>>,

    // Runtime state
    started: Mutex<bool>,
    state: Mutex<LoadState>,
    countdown_target: Mutex<Option<DateTime<Utc>>>,
    timer: Mutex<Option<JoinHandle<TimerSummary>>>,
}

impl Site {
    /// Creates a site reading content from the configured source.
    pub fn new(cfg: SiteConfig) -> Result<Self, SiteError> {
        let source = build_source(&cfg.app_config)?;
        Ok(Self::with_source(cfg, source))
    }

    /// Creates a site reading content from the given source.
    pub fn with_source(cfg: SiteConfig, source: Box<dyn Source>) -> Self {
        Self {
            cfg: cfg.app_config,
            loader: ConfigLoader::new(source),
            clock: Arc::new(SystemClock),
            document: Arc::new(Mutex::new(cfg.document)),
            started: Mutex::new(false),
            state: Mutex::new(LoadState::Loading),
            countdown_target: Mutex::new(None),
            timer: Mutex::new(None),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the page-ready sequence: load content (or fall back), start the
    /// countdown, then attach smooth scrolling to the navigation links.
    pub async fn start(&self) -> Result<(), SiteError> {
        {
            let mut started = self.started.lock().await;
            if *started {
                return Err(SiteError::AlreadyStarted);
            }
            *started = true;
        }

        info!(name = %self.cfg.app.name, "Kids Gaming Site initializing...");

        let state = {
            let mut document = self.document.lock().await;
            self.loader.load(&mut document).await
        };

        let timer = self.countdown_timer(&state);
        *self.countdown_target.lock().await = Some(timer.target());
        *self.state.lock().await = state;
        *self.timer.lock().await = Some(tokio::spawn(timer.run(Arc::clone(&self.document))));

        let attached = navigation::attach_smooth_scroll(&mut *self.document.lock().await);
        info!(nav_links = attached, "Site ready");

        Ok(())
    }

    /// Waits for the countdown to finish.
    pub async fn wait(&self) -> Result<TimerSummary, SiteError> {
        let handle = self.timer.lock().await.take().ok_or(SiteError::NotStarted)?;
        handle
            .await
            .map_err(|e| SiteError::Countdown(e.to_string()))
    }

    /// Stops the countdown if it is still running.
    pub async fn stop(&self) {
        if let Some(handle) = self.timer.lock().await.take() {
            handle.abort();
            info!("Countdown stopped");
        }
    }

    /// Shared handle to the page.
    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.document)
    }

    /// Returns true if the content documents were loaded and applied.
    pub async fn content_applied(&self) -> bool {
        self.state.lock().await.is_applied()
    }

    /// Instant the countdown runs towards, once started.
    pub async fn countdown_target(&self) -> Option<DateTime<Utc>> {
        *self.countdown_target.lock().await
    }

    fn countdown_timer(&self, state: &LoadState) -> CountdownTimer {
        let countdown = &self.cfg.countdown;
        let site_info = state.snapshot().and_then(|s| s.site());
        let target = countdown::resolve_target(
            site_info,
            self.clock.now(),
            countdown.default_days.unwrap_or(DEFAULT_TARGET_DAYS),
        );

        CountdownTimer::new(target, countdown.interval.unwrap_or(DEFAULT_INTERVAL))
            .with_halt_on_expiry(countdown.halt_on_expiry.unwrap_or(true))
            .with_max_ticks(countdown.max_ticks)
            .with_clock(Arc::clone(&self.clock))
    }
}

/// Builds the content source named by the configuration.
fn build_source(cfg: &Config) -> Result<Box<dyn Source>, SiteError> {
    match cfg.source.kind {
        SourceKind::File => Ok(Box::new(FileSource::new(&cfg.source.base))),
        SourceKind::Http => HttpSource::new(
            cfg.source.base.clone(),
            cfg.source.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )
            .map(|s| Box::new(s) as Box<dyn Source>)
            .map_err(|e| {
                warn!(error = %e, "Failed to create HTTP source");
                SiteError::Config(e.to_string())
            }),
    }
}
