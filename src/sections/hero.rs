//! Hero banner: credentials eyebrow, headline, and the first call-to-action.

use crate::components::{button, div, p, section, ButtonVariant};
use crate::dom::{ElementNode, Tag};

use super::RenderContext;

pub const EYEBROW: [&str; 3] = ["Cisco", "ASER Experience", "Expo & Global Event Coverage"];

/// Headline lines, broken on medium screens and up.
pub const HEADLINE: [&str; 3] = [
    "Get Featured in Global Tier-1",
    "Media Without PR Agency",
    "Retainers",
];

pub const SUBHEADING: &str = "Strategic press release distribution and media placement across \
global publications — helping founders, startups, and brands build authority fast.";

pub const CTA_LABEL: &str = "Book a Strategy Call";

pub fn render(ctx: &RenderContext<'_>) -> ElementNode {
    let mut eyebrow = div(
        "flex flex-wrap justify-center gap-2 mb-8 text-xs font-bold tracking-widest uppercase text-gray-400",
    );
    for (i, item) in EYEBROW.iter().enumerate() {
        if i > 0 {
            eyebrow = eyebrow.child(ElementNode::new(Tag::Span).text("•"));
        }
        eyebrow = eyebrow.child(ElementNode::new(Tag::Span).text(*item));
    }

    let mut headline =
        ElementNode::new(Tag::H1).class("text-4xl md:text-6xl lg:text-7xl font-black leading-tight mb-8");
    for (i, line) in HEADLINE.iter().enumerate() {
        if i > 0 {
            headline = headline.child(ElementNode::new(Tag::Br).class("hidden md:block"));
        }
        headline = headline.text(*line);
    }

    section("hero", "bg-navy text-white pt-24 pb-32 px-4").child(
        div("max-w-6xl mx-auto text-center")
            .child(eyebrow)
            .child(headline)
            .child(p(
                "text-xl md:text-2xl text-gray-400 max-w-3xl mx-auto mb-12 leading-relaxed tracking-wide font-medium",
                SUBHEADING,
            ))
            .child(div("flex justify-center").child(button(
                CTA_LABEL,
                ButtonVariant::Primary,
                "",
                "ml-2 w-5 h-5",
                &ctx.links.scheduling(),
            ))),
    )
}
