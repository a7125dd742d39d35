//! Page title and tagline from the games document.

use crate::content::{GamesConfig, present};
use crate::dom::{Mutation, Target, TargetLookup};

pub fn site_content_mutations(config: &GamesConfig, targets: &dyn TargetLookup) -> Vec<Mutation> {
    let mut out = Vec::new();
    let Some(site) = config.site.as_ref() else {
        return out;
    };

    if let Some(title) = present(&site.title) {
        out.push(Mutation::SetDocumentTitle {
            title: title.to_string(),
        });
        if targets.has(Target::SiteTitle) {
            out.push(Mutation::text(Target::SiteTitle, title));
        }
    }

    if let Some(tagline) = present(&site.tagline) {
        if targets.has(Target::SiteTagline) {
            out.push(Mutation::text(Target::SiteTagline, tagline));
        }
    }

    out
}
