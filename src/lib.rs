//! # landing-forge – static landing page renderer
//!
//! Renders the single-page portfolio site of a PR and media-placement
//! consultant. The page is a fixed sequence of nine sections, each a pure
//! function from literal content to markup:
//!
//! 1. **Configure** – optional TOML site config ([`config`])
//! 2. **Render** – sections build a markup tree ([`sections`], [`dom`])
//! 3. **Serialize** – the tree becomes an HTML5 document ([`pipeline`])
//! 4. **Summarise** – a JSON manifest of the page ([`manifest`])
//!
//! The footer's copyright year is read from a [`clock::Clock`] on every render.

pub mod clock;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod icons;
pub mod manifest;
pub mod pipeline;
pub mod sections;
pub mod style;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SiteConfig;
pub use pipeline::{
    build_document, compute_manifest, render_default, render_html, render_page, RenderedPage,
};
