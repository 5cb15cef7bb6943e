//! Closing call-to-action band.

use crate::components::{button, div, heading, p, section, ButtonVariant};
use crate::dom::{ElementNode, Tag};

use super::RenderContext;

pub const HEADING: &str = "Ready to Get Your Brand Featured?";
pub const SUBTEXT: &str = "Let's map the right media strategy for your goals.";
pub const CTA_LABEL: &str = "Schedule Consultation";
pub const DISCLAIMER: &str = "Serious inquiries only — focused strategy discussions.";

pub fn render(ctx: &RenderContext<'_>) -> ElementNode {
    section("final-cta", "bg-navy py-32 px-4 text-white").child(
        div("max-w-4xl mx-auto text-center")
            .child(heading(
                Tag::H2,
                "text-4xl md:text-6xl font-black mb-8 tracking-tight",
                HEADING,
            ))
            .child(p(
                "text-xl md:text-2xl text-gray-400 mb-16 font-medium leading-relaxed tracking-wide",
                SUBTEXT,
            ))
            .child(
                div("flex flex-col items-center")
                    .child(button(
                        CTA_LABEL,
                        ButtonVariant::Primary,
                        "w-full md:w-auto mb-8 px-12 py-5 text-xl",
                        "ml-3 w-6 h-6",
                        &ctx.links.scheduling(),
                    ))
                    .child(p(
                        "text-sm text-gray-500 font-bold uppercase tracking-widest leading-relaxed",
                        DISCLAIMER,
                    )),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkSettings;

    #[test]
    fn wired_cta_points_at_scheduler() {
        let links = LinkSettings {
            scheduling_url: Some("https://cal.example.com/ag".to_string()),
            ..LinkSettings::default()
        };
        let root = render(&RenderContext { links: &links, year: 2025 });
        let cta = root.find_first(&|e| e.get_attr("data-cta").is_some()).unwrap();
        assert_eq!(cta.tag, Tag::A);
        assert_eq!(cta.href(), Some("https://cal.example.com/ag"));
    }
}
