//! Mutation intents produced by the appliers.

use serde::Serialize;

use super::{Element, Target};

/// A single change to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Set an attribute on a target element.
    SetAttribute {
        target: Target,
        name: String,
        value: String,
    },
    /// Replace the text content of a target element.
    SetText { target: Target, text: String },
    /// Set a custom property on the document root style.
    SetStyleVar { name: String, value: String },
    /// Set the document title.
    SetDocumentTitle { title: String },
    /// Discard the children of a target and insert new ones.
    ReplaceChildren {
        target: Target,
        children: Vec<Element>,
    },
}

impl Mutation {
    pub fn attr(target: Target, name: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetAttribute {
            target,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Mutation::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn style_var(name: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetStyleVar {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the element this mutation touches, or `None` for
    /// document-level changes.
    pub fn target(&self) -> Option<Target> {
        match self {
            Mutation::SetAttribute { target, .. }
            | Mutation::SetText { target, .. }
            | Mutation::ReplaceChildren { target, .. } => Some(*target),
            Mutation::SetStyleVar { .. } | Mutation::SetDocumentTitle { .. } => None,
        }
    }
}
