//! Loading of the three content documents.
//!
//! Documents are fetched and decoded one after another (branding, theme,
//! games). The first failure ends the sequence: nothing is applied and the
//! built-in games are rendered instead.

mod file;
mod http;

pub use file::FileSource;
pub use http::{DEFAULT_TIMEOUT, HttpSource};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

use crate::content::SiteSnapshot;
use crate::dom::Document;
use crate::render;

/// Relative location of the branding document.
pub const BRANDING_PATH: &str = "./data/branding.json";
/// Relative location of the theme document.
pub const THEME_PATH: &str = "./data/theme.json";
/// Relative location of the games document.
pub const GAMES_PATH: &str = "./data/games.json";

/// Content loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fetching {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

/// Where content documents come from.
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch returns the raw body of the document at a relative path such
    /// as `./data/games.json`.
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;

    /// Human readable location for logs.
    fn describe(&self) -> String;
}

/// Progress of the one-shot load.
#[derive(Debug, Default)]
pub enum LoadState {
    /// Nothing has been loaded yet.
    #[default]
    Loading,
    /// All documents loaded and applied.
    Applied(SiteSnapshot),
    /// A fetch or decode failed. The snapshot holds whatever was decoded
    /// before the failure; only the default games were rendered.
    FailedFallback {
        snapshot: SiteSnapshot,
        error: LoadError,
    },
}

impl LoadState {
    /// Snapshot the rest of the page (countdown) reads from.
    pub fn snapshot(&self) -> Option<&SiteSnapshot> {
        match self {
            LoadState::Loading => None,
            LoadState::Applied(snapshot) | LoadState::FailedFallback { snapshot, .. } => {
                Some(snapshot)
            }
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, LoadState::Applied(_))
    }
}

/// Loads content documents from a [`Source`] and applies them.
pub struct ConfigLoader {
    source: Box<dyn Source>,
}

impl ConfigLoader {
    pub fn new(source: Box<dyn Source>) -> Self {
        Self { source }
    }

    /// Fetches all three documents, then applies branding, theme, games and
    /// site content. On any failure the default games are rendered and the
    /// error is logged; this never fails.
    pub async fn load(&self, document: &mut Document) -> LoadState {
        let mut snapshot = SiteSnapshot::default();

        match self.fetch_all(&mut snapshot).await {
            Ok(()) => {
                render::apply_snapshot(&snapshot, document);
                LoadState::Applied(snapshot)
            }
            Err(e) => {
                error!(source = %self.source.describe(), error = %e, "Error loading JSON data");
                render::apply_fallback(document);
                LoadState::FailedFallback { snapshot, error: e }
            }
        }
    }

    async fn fetch_all(&self, snapshot: &mut SiteSnapshot) -> Result<(), LoadError> {
        snapshot.branding = self.fetch_json(BRANDING_PATH).await?;
        info!(path = BRANDING_PATH, "Branding data loaded");

        snapshot.theme = self.fetch_json(THEME_PATH).await?;
        info!(path = THEME_PATH, "Theme data loaded");

        snapshot.games = self.fetch_json(GAMES_PATH).await?;
        info!(path = GAMES_PATH, "Games data loaded");

        Ok(())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let body = self.source.fetch(path).await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Strips the leading `./` of a relative document path.
pub(crate) fn relative(path: &str) -> &str {
    path.trim_start_matches("./")
}
