//! Documents read from a local directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{LoadError, Source, relative};

/// Reads documents relative to a base directory.
pub struct FileSource {
    base: PathBuf,
}

impl FileSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait]
impl Source for FileSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let full = self.base.join(relative(path));
        debug!(path = %full.display(), "Reading document");
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|source| LoadError::Io {
                path: full.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.base.display().to_string()
    }
}
