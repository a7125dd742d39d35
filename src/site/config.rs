//! Site configuration.

use crate::config::Config;
use crate::dom::Document;

/// Site construction options.
pub struct SiteConfig {
    /// Application configuration.
    pub app_config: Config,
    /// Page the content is rendered into.
    pub document: Document,
}
