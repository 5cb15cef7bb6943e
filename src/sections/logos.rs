//! Media outlet strip: five outlets on the first row, three centered below.

use crate::components::{div, section};
use crate::content::LogoEntry;
use crate::dom::{ElementNode, Tag};

pub const HEADING: &str = "Trusted Distribution Across Leading Global Media Platforms";

pub const ROW1: [LogoEntry; 5] = [
    "Forbes",
    "TechCrunch",
    "Yahoo Finance",
    "Business Insider",
    "Bloomberg",
];

pub const ROW2: [LogoEntry; 3] = ["Reuters", "Associated Press", "MarketWatch"];

const OUTLET_CLASS: &str = "text-center font-bold text-lg md:text-xl text-gray-700 hover:text-navy cursor-default";

fn outlet(name: LogoEntry) -> ElementNode {
    div(OUTLET_CLASS).attr("data-outlet", name).text(name)
}

pub fn render() -> ElementNode {
    section("logos", "py-20 bg-gray-50 border-b border-gray-100").child(
        div("max-w-6xl mx-auto px-4")
            .child(
                ElementNode::new(Tag::H3)
                    .class("text-2xl md:text-3xl font-black text-navy text-center mb-16 tracking-tight")
                    .text(HEADING),
            )
            .child(
                div("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-8 items-center justify-items-center mb-10 opacity-70 grayscale hover:grayscale-0 transition-all duration-500")
                    .attr("data-group", "row1")
                    .with_children(ROW1.into_iter().map(outlet)),
            )
            .child(
                div("flex flex-wrap justify-center gap-x-12 md:gap-x-20 gap-y-8 items-center opacity-70 grayscale hover:grayscale-0 transition-all duration-500")
                    .attr("data-group", "row2")
                    .with_children(ROW2.into_iter().map(outlet)),
            ),
    )
}
