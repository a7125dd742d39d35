//! Named page locations the renderer mutates.

use serde::Serialize;
use std::fmt;

/// A page element looked up by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    SiteLogo,
    Favicon,
    ContactEmail,
    ContactPhone,
    FooterSlogan,
    SocialContainer,
    GamesContainer,
    SiteTitle,
    SiteTagline,
    CountdownDays,
    CountdownHours,
    CountdownMinutes,
    CountdownSeconds,
}

impl Target {
    pub const ALL: [Target; 13] = [
        Target::SiteLogo,
        Target::Favicon,
        Target::ContactEmail,
        Target::ContactPhone,
        Target::FooterSlogan,
        Target::SocialContainer,
        Target::GamesContainer,
        Target::SiteTitle,
        Target::SiteTagline,
        Target::CountdownDays,
        Target::CountdownHours,
        Target::CountdownMinutes,
        Target::CountdownSeconds,
    ];

    /// CSS selector of the element in the page markup.
    pub fn selector(&self) -> &'static str {
        match self {
            Target::SiteLogo => "#site-logo",
            Target::Favicon => "link[rel=\"icon\"]",
            Target::ContactEmail => "#contact-email",
            Target::ContactPhone => "#contact-phone",
            Target::FooterSlogan => "#footer-slogan",
            Target::SocialContainer => "#social-container",
            Target::GamesContainer => "#games-container",
            Target::SiteTitle => ".site-title",
            Target::SiteTagline => "#site-tagline",
            Target::CountdownDays => "#days",
            Target::CountdownHours => "#hours",
            Target::CountdownMinutes => "#minutes",
            Target::CountdownSeconds => "#seconds",
        }
    }

    /// Tag of the element as it appears in the page markup.
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            Target::SiteLogo => "img",
            Target::Favicon => "link",
            Target::ContactEmail | Target::ContactPhone => "a",
            Target::FooterSlogan | Target::SiteTagline => "p",
            Target::SocialContainer | Target::GamesContainer => "div",
            Target::SiteTitle => "h1",
            Target::CountdownDays
            | Target::CountdownHours
            | Target::CountdownMinutes
            | Target::CountdownSeconds => "span",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
