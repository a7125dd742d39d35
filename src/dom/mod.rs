//! In-memory page model.
//!
//! Appliers never touch the page directly: they look targets up through
//! [`TargetLookup`] and return [`Mutation`] intents, which a [`Document`]
//! applies. A mutation aimed at a missing target is skipped.

mod document;
mod element;
mod mutation;
mod target;

pub use document::{ClickHandler, Document, NavLink};
pub use element::{Element, Node};
pub use mutation::Mutation;
pub use target::Target;

/// Capability to ask whether a target exists on the page.
pub trait TargetLookup {
    fn has(&self, target: Target) -> bool;
}

#[cfg(test)]
mod tests;
