//! Content source configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Transport used to fetch the content documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Read from a local directory.
    #[default]
    File,
    /// Fetch over HTTP(S).
    Http,
}

/// Content source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Directory or base URL that `data/*.json` resolves against
    /// (overridable with SITE_SOURCE_BASE).
    #[serde(default = "default_base")]
    pub base: String,
    /// HTTP request timeout (default: 10s).
    #[serde(default, deserialize_with = "duration::positive")]
    pub timeout: Option<Duration>,
}

fn default_base() -> String {
    ".".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::File,
            base: default_base(),
            timeout: None,
        }
    }
}
