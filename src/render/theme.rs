//! CSS custom properties from the theme document.

use crate::content::{ThemeConfig, present};
use crate::dom::Mutation;

/// Computes root style variables. Only present values are emitted.
pub fn theme_mutations(config: &ThemeConfig) -> Vec<Mutation> {
    let mut out = Vec::new();
    let Some(theme) = config.theme.as_ref() else {
        return out;
    };

    if let Some(colors) = theme.colors.as_ref() {
        let vars = [
            ("--primary", &colors.primary),
            ("--accent", &colors.accent),
            ("--bg", &colors.background),
            ("--text", &colors.text),
            ("--text-light", &colors.text_light),
        ];
        for (name, value) in vars {
            if let Some(value) = present(value) {
                out.push(Mutation::style_var(name, value));
            }
        }
    }

    if let Some(family) = theme.font.as_ref().and_then(|f| present(&f.family)) {
        out.push(Mutation::style_var("--font-family", family));
    }

    out
}
