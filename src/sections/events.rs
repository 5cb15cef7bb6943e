//! Expo and event history cards.

use crate::components::{div, heading, p, section, section_heading};
use crate::content::EventEntry;
use crate::dom::{ElementNode, Tag};

pub const HEADING: &str = "Global Expo & Event Experience";

pub const EVENTS: [EventEntry; 4] = [
    EventEntry {
        year: "2024",
        name: "Web Summit Lisbon",
        description: "Provided media coverage and press release distribution for attending startups",
        impact_note: "Helped 15+ founders achieve event-related media visibility",
    },
    EventEntry {
        year: "2024",
        name: "TechCrunch Disrupt",
        description: "Connected with founders and facilitated post-event media amplification",
        impact_note: "Secured coverage for multiple participating companies",
    },
    EventEntry {
        year: "2023",
        name: "CES Las Vegas",
        description: "Media strategy consulting for technology product launches",
        impact_note: "Coordinated press releases timing with event announcements",
    },
    EventEntry {
        year: "2023",
        name: "SXSW Austin",
        description: "PR support for emerging startups in interactive and music tech",
        impact_note: "Generated sustained media coverage beyond event dates",
    },
];

fn event_card(event: &EventEntry) -> ElementNode {
    div("bg-white p-10 rounded-3xl border border-gray-200 shadow-sm hover:shadow-lg transition-all")
        .attr("data-event", event.name)
        .child(
            div("inline-block px-4 py-1.5 bg-accent/30 text-navy text-xs font-black rounded-lg mb-6 uppercase tracking-wider")
                .text(event.year),
        )
        .child(heading(
            Tag::H3,
            "text-2xl font-black text-navy mb-4 tracking-tight",
            event.name,
        ))
        .child(p(
            "text-slate-700 mb-6 leading-relaxed tracking-wide font-medium",
            event.description,
        ))
        .child(p(
            "text-slate-500 text-sm font-semibold italic border-l-4 border-accent pl-6 py-1 bg-slate-50 rounded-r-xl leading-relaxed tracking-wide",
            event.impact_note,
        ))
}

pub fn render() -> ElementNode {
    section("expo-events", "py-24 px-4 bg-gray-50").child(
        div("max-w-6xl mx-auto")
            .child(section_heading(HEADING, ""))
            .child(div("grid md:grid-cols-2 gap-8").with_children(EVENTS.iter().map(event_card))),
    )
}
