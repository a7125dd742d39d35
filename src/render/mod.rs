//! Appliers that turn content documents into page mutations.
//!
//! Each applier is a pure function of its document and a [`TargetLookup`];
//! [`apply_snapshot`] and [`apply_fallback`] run them against a [`Document`].

pub mod branding;
pub mod games;
pub mod site_content;
pub mod social;
pub mod theme;

pub use branding::branding_mutations;
pub use games::{default_games_mutations, game_card, games_mutations, render_games};
pub use site_content::site_content_mutations;
pub use social::{build_social_links, display_name, social_links_mutations};
pub use theme::theme_mutations;

use tracing::{debug, info};

use crate::content::SiteSnapshot;
use crate::dom::{Document, TargetLookup};

/// Applies branding, theme, games and site content, in that order.
pub fn apply_snapshot(snapshot: &SiteSnapshot, document: &mut Document) {
    let mutations = branding_mutations(&snapshot.branding, &*document);
    let applied = document.apply(mutations);
    debug!(applied, "Branding applied");

    let applied = document.apply(theme_mutations(&snapshot.theme));
    info!(applied, "Theme applied successfully");

    let mutations = render_games(&snapshot.games, &*document);
    document.apply(mutations);
    if let Some(games) = snapshot.games.games.as_ref() {
        info!(count = games.len(), "{} games loaded", games.len());
    }

    let mutations = site_content_mutations(&snapshot.games, &*document);
    let applied = document.apply(mutations);
    debug!(applied, "Site content updated");
}

/// Renders the built-in games. Branding and theme are left untouched.
pub fn apply_fallback(document: &mut Document) {
    info!("Loading default content...");
    let mutations = default_games_mutations(&*document);
    document.apply(mutations);
}

/// Convenience for appliers that only emit when a target exists.
pub(crate) fn when_present<T: TargetLookup + ?Sized>(
    targets: &T,
    target: crate::dom::Target,
    mutations: impl IntoIterator<Item = crate::dom::Mutation>,
) -> Vec<crate::dom::Mutation> {
    if targets.has(target) {
        mutations.into_iter().collect()
    } else {
        Vec::new()
    }
}
