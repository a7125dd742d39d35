//! Branding document (`data/branding.json`).

use serde::Deserialize;

/// Platform key to URL, in document order.
pub type SocialMedia = serde_json::Map<String, serde_json::Value>;

/// Root of the branding document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandingConfig {
    pub brand: Option<Brand>,
}

/// Organization identity and contact details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub organization_name: Option<String>,
    pub logo: Option<Logo>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub slogan: Option<String>,
    pub social_media: Option<SocialMedia>,
}

/// Logo image references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logo {
    /// Main logo image shown in the header.
    pub title: Option<String>,
    /// Favicon image.
    pub favicon: Option<String>,
}
