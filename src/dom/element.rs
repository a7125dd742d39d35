//! Element trees built by the renderer (cards, social links).

use serde::Serialize;

/// Child of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A detached element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First descendant (depth-first, self excluded) carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_class(class) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            if let Node::Element(e) = child {
                if e.has_class(class) {
                    return Some(e);
                }
                if let Some(found) = e.find_class_mut(class) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Serializes the element as HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        out.push('>');
        if is_void(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&html_escape(t)),
                Node::Element(e) => e.write_html(out),
            }
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "link" | "br" | "hr" | "input" | "meta")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
