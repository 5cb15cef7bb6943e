//! Case studies: challenge / result panels and three stat tiles each.

use crate::components::{button, div, heading, p, section, section_heading, ButtonVariant};
use crate::content::{CaseStudy, Stat};
use crate::dom::{ElementNode, Tag};

use super::RenderContext;

pub const HEADING: &str = "Real Media Visibility. Real Outcomes.";

pub const CTA_LABEL: &str = "Book Your Strategy Call";

pub const CASES: [CaseStudy; 3] = [
    CaseStudy {
        client: "SaaS Founder - Project Management Platform",
        challenge: "New product launch needed global visibility to attract early adopters and investors.",
        result: "Featured across 50+ high-authority publications including major tech and business \
outlets. 300% increase in website traffic and 5 investor meetings within 30 days.",
        stats: [
            Stat { label: "PLACEMENTS", value: "50+" },
            Stat { label: "REACH", value: "15M+" },
            Stat { label: "TRAFFIC", value: "+300%" },
        ],
    },
    CaseStudy {
        client: "EdTech Startup - Learning Platform",
        challenge: "Post-expo visibility needed to capitalize on event momentum and establish \
market presence.",
        result: "Secured coverage in education technology publications and mainstream business \
media. Generated qualified B2B leads and partnership inquiries.",
        stats: [
            Stat { label: "PLACEMENTS", value: "35+" },
            Stat { label: "REACH", value: "8M+" },
            Stat { label: "LEADS", value: "120+" },
        ],
    },
    CaseStudy {
        client: "FinTech Company - Payment Solutions",
        challenge: "Entering new markets required credibility and brand recognition in financial \
services sector.",
        result: "Strategic placement in finance and technology media created trust signals for \
enterprise prospects. Contributed to 2 major partnership agreements.",
        stats: [
            Stat { label: "PLACEMENTS", value: "40+" },
            Stat { label: "REACH", value: "12M+" },
            Stat { label: "PARTNERSHIPS", value: "2" },
        ],
    },
];

const PANEL_LABEL: &str = "text-sm font-black text-navy uppercase tracking-widest mb-4 opacity-80";
const PANEL_BODY: &str = "text-slate-950 leading-relaxed tracking-wide font-semibold text-xl";

fn panel(label: &str, body: &str) -> ElementNode {
    div("").child(p(PANEL_LABEL, label)).child(p(PANEL_BODY, body))
}

fn stat_tile(stat: &Stat) -> ElementNode {
    div("text-center")
        .attr("data-stat", stat.label)
        .child(div("text-3xl md:text-5xl font-black text-navy mb-2").text(stat.value))
        .child(
            div("text-[10px] md:text-xs font-black text-slate-500 uppercase tracking-widest")
                .text(stat.label),
        )
}

fn case_card(case: &CaseStudy) -> ElementNode {
    div("border-2 border-slate-100 rounded-[2.5rem] p-8 md:p-14 bg-white shadow-xl")
        .attr("data-case", case.client)
        .child(heading(
            Tag::H3,
            "text-3xl font-black text-navy mb-12 tracking-tight",
            case.client,
        ))
        .child(
            div("grid md:grid-cols-2 gap-16 mb-12")
                .child(panel("CHALLENGE", case.challenge))
                .child(panel("RESULT", case.result)),
        )
        .child(
            div("grid grid-cols-3 gap-4 pt-12 border-t border-slate-100")
                .with_children(case.stats.iter().map(stat_tile)),
        )
}

pub fn render(ctx: &RenderContext<'_>) -> ElementNode {
    section("results", "py-24 px-4 bg-white").child(
        div("max-w-6xl mx-auto")
            .child(section_heading(HEADING, ""))
            .child(div("space-y-16").with_children(CASES.iter().map(case_card)))
            .child(div("mt-24 flex justify-start pl-4 md:pl-0").child(button(
                CTA_LABEL,
                ButtonVariant::Primary,
                "",
                "ml-2 w-5 h-5",
                &ctx.links.scheduling(),
            ))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkSettings;

    #[test]
    fn every_case_has_three_tiles_in_order() {
        let links = LinkSettings::default();
        let root = render(&RenderContext { links: &links, year: 2025 });
        let cards = root.find_all(&|e| e.get_attr("data-case").is_some());
        assert_eq!(cards.len(), 3);
        for (card, case) in cards.iter().zip(CASES.iter()) {
            let tiles = card.find_all(&|e| e.get_attr("data-stat").is_some());
            assert_eq!(tiles.len(), 3);
            for (tile, stat) in tiles.iter().zip(case.stats.iter()) {
                assert_eq!(tile.text_content(), format!("{} {}", stat.value, stat.label));
            }
        }
    }

    #[test]
    fn ends_with_cta() {
        let links = LinkSettings::default();
        let root = render(&RenderContext { links: &links, year: 2025 });
        let container = root.element_children().next().unwrap();
        let last = container.element_children().last().unwrap();
        let cta = last.element_children().next().unwrap();
        assert_eq!(cta.get_attr("data-cta"), Some(CTA_LABEL));
    }
}
