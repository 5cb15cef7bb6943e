//! Page sections, rendered top to bottom in [`Section::ALL`] order.
//!
//! Each section owns its literal content and is a pure function of the
//! [`RenderContext`]; none depends on another's output.

use crate::config::LinkSettings;
use crate::dom::ElementNode;

pub mod about;
pub mod cta;
pub mod events;
pub mod footer;
pub mod hero;
pub mod logos;
pub mod process;
pub mod results;
pub mod services;

/// Per-render inputs shared by all sections.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub links: &'a LinkSettings,
    /// Calendar year read from the clock for this render.
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Logos,
    About,
    Services,
    Results,
    ExpoEvents,
    HowItWorks,
    FinalCta,
    Footer,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::Logos,
        Section::About,
        Section::Services,
        Section::Results,
        Section::ExpoEvents,
        Section::HowItWorks,
        Section::FinalCta,
        Section::Footer,
    ];

    /// Stable id written to the section's `id` and `data-section` attributes.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Logos => "logos",
            Section::About => "about",
            Section::Services => "services",
            Section::Results => "results",
            Section::ExpoEvents => "expo-events",
            Section::HowItWorks => "how-it-works",
            Section::FinalCta => "final-cta",
            Section::Footer => "footer",
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> ElementNode {
        match self {
            Section::Hero => hero::render(ctx),
            Section::Logos => logos::render(),
            Section::About => about::render(),
            Section::Services => services::render(),
            Section::Results => results::render(ctx),
            Section::ExpoEvents => events::render(),
            Section::HowItWorks => process::render(),
            Section::FinalCta => cta::render(ctx),
            Section::Footer => footer::render(ctx),
        }
    }
}
