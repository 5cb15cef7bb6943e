//! Bio: monogram tile, role, four paragraphs, and background tags.

use crate::components::{div, heading, p, section};
use crate::content::OWNER_NAME;
use crate::dom::{ElementNode, Tag};

pub const MONOGRAM: &str = "AG";

pub const ROLE: &str = "Global Press Release & Media Placement Specialist";

pub const BIO: [&str; 4] = [
    "With extensive experience in global PR distribution, I help startups and established brands \
achieve strategic media visibility across international digital channels.",
    "My background includes work with major technology companies like Cisco and ASER, where I \
developed a deep understanding of corporate communications and media strategy.",
    "Through attendance at multiple international expos and direct connections with founders \
worldwide, I've built a comprehensive network for media placement and brand amplification.",
    "My approach focuses on strategic positioning over volume, ensuring every press release and \
media placement serves your broader business objectives.",
];

pub const TAGS: [&str; 4] = ["Cisco", "ASER", "Global PR Networks", "International Expos"];

pub fn render() -> ElementNode {
    let portrait = div("relative group")
        .child(
            div("w-full aspect-square bg-navy flex items-center justify-center text-accent text-7xl font-bold rounded-2xl shadow-2xl overflow-hidden")
                .child(
                    ElementNode::new(Tag::Span)
                        .class("group-hover:scale-110 transition-transform duration-500")
                        .text(MONOGRAM),
                ),
        )
        .child(div("absolute -bottom-6 -right-6 w-32 h-32 bg-accent/20 rounded-full blur-3xl"));

    let bio = div("space-y-6 text-slate-900 leading-relaxed tracking-wide text-lg font-medium")
        .with_children(BIO.into_iter().map(|para| p("", para)));

    let tags = div("mt-10 flex flex-wrap gap-3").with_children(TAGS.into_iter().map(|tag| {
        ElementNode::new(Tag::Span)
            .class("px-5 py-2.5 bg-slate-100 text-navy font-black text-xs uppercase tracking-wider rounded-full border border-slate-200")
            .attr("data-tag", tag)
            .text(tag)
    }));

    section("about", "py-24 px-4 bg-white").child(
        div("max-w-6xl mx-auto grid md:grid-cols-2 gap-16 items-start")
            .child(portrait)
            .child(
                div("")
                    .child(heading(
                        Tag::H2,
                        "text-4xl font-black text-navy mb-2 tracking-tight",
                        &format!("Meet {OWNER_NAME}"),
                    ))
                    .child(p(
                        "text-lg font-bold text-gray-500 mb-8 uppercase tracking-widest",
                        ROLE,
                    ))
                    .child(bio)
                    .child(tags),
            ),
    )
}
