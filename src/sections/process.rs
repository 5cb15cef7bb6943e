//! "How It Works": four numbered steps.

use crate::components::{div, heading, p, section, section_heading};
use crate::content::ProcessStep;
use crate::dom::{ElementNode, Tag};
use crate::icons::Icon;

pub const HEADING: &str = "How It Works";

pub const STEPS: [ProcessStep; 4] = [
    ProcessStep {
        ordinal: "01",
        icon: Icon::Calendar,
        title: "Book Strategy Call",
        description: "We discuss your goals, target audience, and media objectives to determine \
the right approach.",
    },
    ProcessStep {
        ordinal: "02",
        icon: Icon::FileText,
        title: "Media Planning",
        description: "I develop your media strategy, craft compelling angles, and identify \
optimal outlets for placement.",
    },
    ProcessStep {
        ordinal: "03",
        icon: Icon::Megaphone,
        title: "Distribution",
        description: "Strategic press release distribution and direct pitching to targeted media \
networks for coverage.",
    },
    ProcessStep {
        ordinal: "04",
        icon: Icon::Search,
        title: "Amplification",
        description: "Comprehensive coverage reports with links, metrics, and guidance on \
amplifying results across channels.",
    },
];

fn step(step: &ProcessStep) -> ElementNode {
    div("relative group")
        .attr("data-step", step.ordinal)
        .child(
            div("text-8xl font-black text-slate-100 absolute -top-12 -left-4 -z-10 group-hover:text-accent/10 transition-colors")
                .text(step.ordinal),
        )
        .child(
            div("bg-navy w-14 h-14 rounded-2xl flex items-center justify-center text-accent mb-8 shadow-xl")
                .child(step.icon.render("w-6 h-6")),
        )
        .child(heading(
            Tag::H3,
            "text-xl font-black text-navy mb-4 tracking-tight",
            step.title,
        ))
        .child(p(
            "text-slate-600 font-medium leading-relaxed tracking-wide",
            step.description,
        ))
}

pub fn render() -> ElementNode {
    section("how-it-works", "py-32 px-4 bg-white").child(
        div("max-w-6xl mx-auto")
            .child(section_heading(HEADING, ""))
            .child(div("grid md:grid-cols-4 gap-12").with_children(STEPS.iter().map(step))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_ordinals_are_sequential() {
        for (i, s) in STEPS.iter().enumerate() {
            assert_eq!(s.ordinal, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn watermark_matches_ordinal() {
        let root = render();
        for el in root.find_all(&|e| e.get_attr("data-step").is_some()) {
            let watermark = el.element_children().next().unwrap();
            assert_eq!(Some(watermark.text_content().as_str()), el.get_attr("data-step"));
        }
    }
}
