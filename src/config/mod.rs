//! Runtime configuration for the site renderer.
//!
//! Uses serde_yaml to load a YAML file, with an environment variable
//! override for the content source location.

mod app;
mod countdown;
mod duration;
mod error;
mod source;

pub use app::AppConfig;
pub use countdown::CountdownConfig;
pub use error::ConfigError;
pub use source::{SourceConfig, SourceKind};

use serde::Deserialize;
use std::{env, fs};

/// Environment variable overriding `source.base`.
pub const SOURCE_BASE_ENV: &str = "SITE_SOURCE_BASE";

/// Largest accepted `countdown.default_days` (about a century).
pub const MAX_DEFAULT_DAYS: i64 = 36_500;

/// Root configuration structure.
///
/// Required sections: app.
/// Optional sections: source, countdown.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Where the content documents are read from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Countdown scheduling.
    #[serde(default)]
    pub countdown: CountdownConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present) so that `SITE_SOURCE_BASE` can be
    /// set there.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;

        config.apply_source_override(env::var(SOURCE_BASE_ENV).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a YAML string without validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replaces `source.base` when an override is set and non-empty.
    fn apply_source_override(&mut self, base: Option<String>) {
        if let Some(base) = base.filter(|b| !b.trim().is_empty()) {
            self.source.base = base;
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.source.base.trim().is_empty() {
            return Err(ConfigError::Validation("source.base is required".into()));
        }

        if self.source.kind == SourceKind::Http
            && !(self.source.base.starts_with("http://") || self.source.base.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "source.base must be an http(s) URL for http sources, got {}",
                self.source.base
            )));
        }

        if let Some(days) = self.countdown.default_days {
            if !(0..=MAX_DEFAULT_DAYS).contains(&days) {
                return Err(ConfigError::Validation(format!(
                    "countdown.default_days must be between 0 and {}, got {}",
                    MAX_DEFAULT_DAYS, days
                )));
            }
        }

        if self.countdown.max_ticks == Some(0) {
            return Err(ConfigError::Validation(
                "countdown.max_ticks must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
