//! Theme document (`data/theme.json`).

use serde::Deserialize;

/// Root of the theme document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    pub colors: Option<Colors>,
    pub font: Option<Font>,
}

/// Color scheme. Values are passed through to CSS as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub text_light: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Font {
    pub family: Option<String>,
}
