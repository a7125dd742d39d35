//! Configuration error types.

use thiserror::Error;

/// Runtime configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read site config: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("invalid site config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("site config rejected: {0}")]
    Validation(String),
}
