//! Data-driven renderer for the kids gaming landing page.
//!
//! Three JSON documents (branding, theme, games) are loaded once and applied
//! to an in-memory page model; a countdown then refreshes four digit targets
//! every second.

pub mod config;
pub mod content;
pub mod countdown;
pub mod dom;
pub mod loader;
pub mod navigation;
pub mod render;
pub mod site;
