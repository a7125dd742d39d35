//! Documents fetched over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::{LoadError, Source, relative};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches documents relative to a base URL.
pub struct HttpSource {
    base_url: String,
    http_client: HttpClient,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), relative(path))
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.url_for(path);
        debug!(url = %url, "Fetching document");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_relative_path() {
        let source = HttpSource::new("https://kids.example/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            source.url_for("./data/games.json"),
            "https://kids.example/data/games.json"
        );
    }
}
