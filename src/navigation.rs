//! Smooth scrolling for same-page navigation links.

use serde::Serialize;
use tracing::debug;

use crate::dom::{ClickHandler, Document};

/// Class carried by header navigation links.
pub const NAV_LINK_CLASS: &str = "nav-link";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Start,
}

/// Request to scroll an element into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollIntent {
    pub element_id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Outcome of a click on a navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub scroll: Option<ScrollIntent>,
}

/// Attaches the smooth-scroll handler to every navigation link whose href
/// is a same-page anchor. Returns the number of links wired.
///
/// Only links present at call time are affected.
pub fn attach_smooth_scroll(document: &mut Document) -> usize {
    let mut attached = 0;
    for link in document.nav_links_mut() {
        if link.class.split_whitespace().any(|c| c == NAV_LINK_CLASS) && link.href.starts_with('#')
        {
            if !link.handlers.contains(&ClickHandler::SmoothScroll) {
                link.handlers.push(ClickHandler::SmoothScroll);
            }
            attached += 1;
        }
    }
    debug!(attached, "Smooth scroll handlers attached");
    attached
}

/// Handles a click on an anchor link: default navigation is suppressed and
/// the referenced element, if it exists, is scrolled into view.
pub fn handle_smooth_scroll(href: &str, document: &Document) -> ClickOutcome {
    let id = href.strip_prefix('#').unwrap_or(href);
    let scroll = document.has_id(id).then(|| ScrollIntent {
        element_id: id.to_string(),
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    });
    ClickOutcome {
        default_prevented: true,
        scroll,
    }
}

/// Dispatches a click on the navigation link at `index`.
pub fn click(document: &Document, index: usize) -> ClickOutcome {
    let Some(link) = document.nav_links().get(index) else {
        return ClickOutcome::default();
    };
    let mut outcome = ClickOutcome::default();
    for handler in &link.handlers {
        match handler {
            ClickHandler::SmoothScroll => outcome = handle_smooth_scroll(&link.href, document),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NavLink;

    fn page() -> Document {
        Document::new()
            .with_nav_link(NavLink::new("nav-link", "#games"))
            .with_nav_link(NavLink::new("nav-link", "/about.html"))
            .with_nav_link(NavLink::new("footer-link", "#contact"))
            .with_nav_link(NavLink::new("nav-link active", "#missing"))
            .with_section("games")
            .with_section("contact")
    }

    #[test]
    fn test_attach_only_anchor_nav_links() {
        let mut doc = page();
        assert_eq!(attach_smooth_scroll(&mut doc), 2);

        let wired: Vec<bool> = doc
            .nav_links()
            .iter()
            .map(|l| l.handlers.contains(&ClickHandler::SmoothScroll))
            .collect();
        assert_eq!(wired, vec![true, false, false, true]);
    }

    #[test]
    fn test_attach_twice_does_not_duplicate() {
        let mut doc = page();
        attach_smooth_scroll(&mut doc);
        attach_smooth_scroll(&mut doc);
        assert_eq!(doc.nav_links()[0].handlers.len(), 1);
    }

    #[test]
    fn test_click_scrolls_to_existing_section() {
        let mut doc = page();
        attach_smooth_scroll(&mut doc);

        let outcome = click(&doc, 0);
        assert!(outcome.default_prevented);
        assert_eq!(
            outcome.scroll,
            Some(ScrollIntent {
                element_id: "games".into(),
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Start,
            })
        );
    }

    #[test]
    fn test_click_missing_section_only_prevents_default() {
        let mut doc = page();
        attach_smooth_scroll(&mut doc);

        let outcome = click(&doc, 3);
        assert!(outcome.default_prevented);
        assert!(outcome.scroll.is_none());
    }

    #[test]
    fn test_click_unwired_link_does_nothing() {
        let mut doc = page();
        attach_smooth_scroll(&mut doc);
        assert_eq!(click(&doc, 1), ClickOutcome::default());
        assert_eq!(click(&doc, 42), ClickOutcome::default());
    }

    #[test]
    fn test_links_added_after_attach_are_not_wired() {
        let mut doc = page();
        attach_smooth_scroll(&mut doc);
        let doc = doc.with_nav_link(NavLink::new("nav-link", "#games"));
        assert_eq!(click(&doc, 4), ClickOutcome::default());
    }
}
