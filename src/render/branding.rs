//! Logo, favicon, contact details, slogan and social links.

use crate::content::{BrandingConfig, present};
use crate::dom::{Mutation, Target, TargetLookup};

use super::{social, when_present};

/// Alt text used when the organization name is missing.
pub const LOGO_ALT_FALLBACK: &str = "Site Logo";

/// Computes the branding mutations. Absent fields and missing targets
/// produce nothing.
pub fn branding_mutations(config: &BrandingConfig, targets: &dyn TargetLookup) -> Vec<Mutation> {
    let mut out = Vec::new();
    let Some(brand) = config.brand.as_ref() else {
        return out;
    };

    let logo = brand.logo.as_ref();

    if let Some(src) = logo.and_then(|l| present(&l.title)) {
        let alt = present(&brand.organization_name).unwrap_or(LOGO_ALT_FALLBACK);
        out.extend(when_present(
            targets,
            Target::SiteLogo,
            [
                Mutation::attr(Target::SiteLogo, "src", src),
                Mutation::attr(Target::SiteLogo, "alt", alt),
            ],
        ));
    }

    if let Some(href) = logo.and_then(|l| present(&l.favicon)) {
        out.extend(when_present(
            targets,
            Target::Favicon,
            [Mutation::attr(Target::Favicon, "href", href)],
        ));
    }

    if let Some(email) = present(&brand.email) {
        out.extend(contact(targets, Target::ContactEmail, "mailto", email));
    }

    if let Some(mobile) = present(&brand.mobile) {
        out.extend(contact(targets, Target::ContactPhone, "tel", mobile));
    }

    if let Some(slogan) = present(&brand.slogan) {
        out.extend(when_present(
            targets,
            Target::FooterSlogan,
            [Mutation::text(Target::FooterSlogan, slogan)],
        ));
    }

    if let Some(social_media) = brand.social_media.as_ref() {
        out.extend(social::social_links_mutations(social_media, targets));
    }

    out
}

fn contact(targets: &dyn TargetLookup, target: Target, scheme: &str, value: &str) -> Vec<Mutation> {
    when_present(
        targets,
        target,
        [
            Mutation::attr(target, "href", format!("{}:{}", scheme, value)),
            Mutation::text(target, value),
        ],
    )
}
