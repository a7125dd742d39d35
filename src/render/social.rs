//! Social link builder.

use serde_json::Value;

use crate::content::SocialMedia;
use crate::dom::{Element, Mutation, Target, TargetLookup};

/// Canonical names of the known platforms.
const PLATFORM_NAMES: [(&str, &str); 6] = [
    ("x", "Twitter/X"),
    ("youtube", "YouTube"),
    ("linkedin", "LinkedIn"),
    ("instagram", "Instagram"),
    ("github", "GitHub"),
    ("blog", "Blog"),
];

/// Returns the canonical display name of a known platform key.
pub fn platform_name(key: &str) -> Option<&'static str> {
    PLATFORM_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Display name for a platform key: the canonical name if known, otherwise
/// the key with its first character upper-cased.
pub fn display_name(key: &str) -> String {
    match platform_name(key) {
        Some(name) => name.to_string(),
        None => capitalize_first(key),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds a single social link opening in a new tab.
pub fn social_link(key: &str, url: &str) -> Element {
    let name = display_name(key);
    Element::new("a")
        .attr("href", url)
        .class("social-link")
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("aria-label", format!("Visit our {} page", name))
        .text(name)
}

/// Builds links for every entry with a usable URL, in document order.
pub fn build_social_links(social_media: &SocialMedia) -> Vec<Element> {
    social_media
        .iter()
        .filter_map(|(key, value)| link_url(value).map(|url| social_link(key, &url)))
        .collect()
}

/// Replaces the social container contents with freshly built links.
pub fn social_links_mutations(
    social_media: &SocialMedia,
    targets: &dyn TargetLookup,
) -> Vec<Mutation> {
    if !targets.has(Target::SocialContainer) {
        return Vec::new();
    }
    vec![Mutation::ReplaceChildren {
        target: Target::SocialContainer,
        children: build_social_links(social_media),
    }]
}

/// Truthy scalars become the link target; null, false, zero, empty strings
/// and nested objects or arrays produce no link.
fn link_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) if !url.is_empty() => Some(url.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
