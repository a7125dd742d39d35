//! In-memory document holding the targeted elements.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use super::{Element, Mutation, Target, TargetLookup};

/// Click handler attached to a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickHandler {
    SmoothScroll,
}

/// A navigation link in the page header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub class: String,
    pub href: String,
    pub handlers: Vec<ClickHandler>,
}

impl NavLink {
    pub fn new(class: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            href: href.into(),
            handlers: Vec::new(),
        }
    }
}

/// Page model: document title, root style variables, the targeted elements,
/// navigation links and the ids of scrollable sections.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    title: String,
    root_style: BTreeMap<String, String>,
    elements: BTreeMap<Target, Element>,
    nav_links: Vec<NavLink>,
    sections: BTreeSet<String>,
}

impl Document {
    /// Creates an empty document with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// The landing page layout: every target present, header navigation
    /// links and the sections they point at.
    pub fn landing_page() -> Self {
        let mut doc = Target::ALL
            .iter()
            .fold(Self::new(), |doc, t| doc.with_target(*t))
            .with_title("Kids Gaming");

        for id in ["home", "games", "countdown", "contact"] {
            doc = doc
                .with_nav_link(NavLink::new("nav-link", format!("#{}", id)))
                .with_section(id);
        }

        for t in [
            Target::CountdownDays,
            Target::CountdownHours,
            Target::CountdownMinutes,
            Target::CountdownSeconds,
        ] {
            if let Some(el) = doc.elements.get_mut(&t) {
                el.set_text("00");
            }
        }

        doc
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds an empty element for `target`.
    pub fn with_target(mut self, target: Target) -> Self {
        let mut element = Element::new(target.tag());
        if target == Target::Favicon {
            element.set_attribute("rel", "icon");
        }
        self.elements.insert(target, element);
        self
    }

    pub fn without_target(mut self, target: Target) -> Self {
        self.elements.remove(&target);
        self
    }

    pub fn with_nav_link(mut self, link: NavLink) -> Self {
        self.nav_links.push(link);
        self
    }

    /// Registers an element id that scroll intents can land on.
    pub fn with_section(mut self, id: impl Into<String>) -> Self {
        self.sections.insert(id.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn element(&self, target: Target) -> Option<&Element> {
        self.elements.get(&target)
    }

    pub fn element_mut(&mut self, target: Target) -> Option<&mut Element> {
        self.elements.get_mut(&target)
    }

    /// Text content of a target, if the target exists.
    pub fn text_of(&self, target: Target) -> Option<String> {
        self.element(target).map(Element::text_content)
    }

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.root_style.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> &BTreeMap<String, String> {
        &self.root_style
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn nav_links_mut(&mut self) -> &mut [NavLink] {
        &mut self.nav_links
    }

    /// Returns true if an element with this id exists.
    pub fn has_id(&self, id: &str) -> bool {
        self.sections.contains(id)
            || self
                .elements
                .keys()
                .any(|t| t.selector().strip_prefix('#') == Some(id))
    }

    /// Applies mutations in order and returns how many took effect.
    /// Mutations aimed at a missing target are skipped.
    pub fn apply<I>(&mut self, mutations: I) -> usize
    where
        I: IntoIterator<Item = Mutation>,
    {
        let mut applied = 0;
        for mutation in mutations {
            if self.apply_one(mutation) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_one(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::SetStyleVar { name, value } => {
                self.root_style.insert(name, value);
                true
            }
            Mutation::SetDocumentTitle { title } => {
                self.title = title;
                true
            }
            Mutation::SetAttribute {
                target,
                name,
                value,
            } => self.with_element(target, |el| el.set_attribute(name, value)),
            Mutation::SetText { target, text } => self.with_element(target, |el| el.set_text(text)),
            Mutation::ReplaceChildren { target, children } => self.with_element(target, |el| {
                el.children = children.into_iter().map(super::Node::Element).collect();
            }),
        }
    }

    fn with_element(&mut self, target: Target, f: impl FnOnce(&mut Element)) -> bool {
        match self.elements.get_mut(&target) {
            Some(el) => {
                f(el);
                true
            }
            None => {
                debug!(selector = %target, "Target missing, mutation skipped");
                false
            }
        }
    }
}

impl Document {
    /// Static HTML for the page: the title, then a root element carrying
    /// the style variables and every targeted element in selector order.
    pub fn to_html(&self) -> String {
        let mut root = Element::new("html");
        if !self.root_style.is_empty() {
            let style = self
                .root_style
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            root = root.attr("style", style);
        }
        let root = self
            .elements
            .values()
            .fold(root, |root, element| root.child(element.clone()));

        let title = Element::new("title").text(self.title.as_str());
        format!("<!DOCTYPE html>\n{}\n{}\n", title.to_html(), root.to_html())
    }
}

impl TargetLookup for Document {
    fn has(&self, target: Target) -> bool {
        self.elements.contains_key(&target)
    }
}
