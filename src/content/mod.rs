//! Site content documents: branding, theme and games.
//!
//! Each document is decoded from JSON once at startup and never mutated
//! afterwards. Every top-level section is optional; a missing section means
//! "nothing to apply", never an error.

mod branding;
mod games;
mod theme;

pub use branding::{Brand, BrandingConfig, Logo, SocialMedia};
pub use games::{Game, GameId, GamesConfig, SiteInfo, default_games};
pub use theme::{Colors, Font, Theme, ThemeConfig};

/// Immutable snapshot of the three content documents produced by one load.
///
/// Documents that were not loaded stay at their empty default.
#[derive(Debug, Clone, Default)]
pub struct SiteSnapshot {
    pub branding: BrandingConfig,
    pub theme: ThemeConfig,
    pub games: GamesConfig,
}

impl SiteSnapshot {
    /// Returns the `site` section of the games document, if any.
    pub fn site(&self) -> Option<&SiteInfo> {
        self.games.site.as_ref()
    }
}

/// Returns the value if it is set and non-empty.
///
/// Empty strings count as absent for every optional field.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests;
