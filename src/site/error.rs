//! Site error types.

/// Site error type.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("site is already started")]
    AlreadyStarted,
    #[error("site is not started")]
    NotStarted,
    #[error("config error: {0}")]
    Config(String),
    #[error("countdown task failed: {0}")]
    Countdown(String),
}
