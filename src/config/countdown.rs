//! Countdown scheduling configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Countdown settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountdownConfig {
    /// Refresh interval (default: 1s).
    #[serde(default, deserialize_with = "duration::positive")]
    pub interval: Option<Duration>,
    /// Days ahead of startup used when no target is configured (default: 30).
    pub default_days: Option<i64>,
    /// Stop ticking once the expired display is shown (default: true).
    pub halt_on_expiry: Option<bool>,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
}
