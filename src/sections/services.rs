//! Service cards.

use crate::components::{div, heading, p, section, section_heading};
use crate::content::ServiceItem;
use crate::dom::{ElementNode, Tag};
use crate::icons::Icon;

pub const HEADING: &str = "Strategic Media Visibility Services";

/// Per-card link label. The cards have no detail pages, so it always points at `#`.
pub const LEARN_MORE: &str = "Learn More";

pub const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        icon: Icon::Globe,
        title: "Global Press Release Distribution",
        description: "Strategic distribution across 300+ global media channels with targeted \
placement in your industry verticals.",
    },
    ServiceItem {
        icon: Icon::Target,
        title: "Tier-1 Media Placement Strategy",
        description: "Secure coverage in top-tier publications through relationship-driven \
pitching and newsworthy angle development.",
    },
    ServiceItem {
        icon: Icon::Megaphone,
        title: "Event & Expo Media Amplification",
        description: "Turn conference appearances and product launches into sustained media \
visibility and thought leadership.",
    },
    ServiceItem {
        icon: Icon::UserCheck,
        title: "Founder Branding & Authority Building",
        description: "Position executives as industry experts through strategic media presence \
and consistent messaging.",
    },
];

fn card(item: &ServiceItem) -> ElementNode {
    let learn_more = ElementNode::new(Tag::A)
        .attr("href", "#")
        .class("inline-flex items-center text-navy font-black hover:text-accent transition-colors uppercase text-sm tracking-wider")
        .text(LEARN_MORE)
        .child(Icon::ArrowRight.render(
            "ml-2 w-4 h-4 group-hover:translate-x-1 transition-transform",
        ));

    div("bg-white p-10 rounded-2xl shadow-sm border border-gray-100 hover:shadow-xl transition-all duration-300 group")
        .attr("data-service", item.title)
        .child(
            div("bg-navy p-4 rounded-xl inline-block mb-6 shadow-md")
                .child(item.icon.render("w-8 h-8 text-accent")),
        )
        .child(heading(
            Tag::H3,
            "text-2xl font-black text-navy mb-4 tracking-tight",
            item.title,
        ))
        .child(p(
            "text-slate-800 mb-8 leading-relaxed tracking-wide font-medium",
            item.description,
        ))
        .child(learn_more)
}

pub fn render() -> ElementNode {
    section("services", "py-24 px-4 bg-gray-50").child(
        div("max-w-6xl mx-auto")
            .child(section_heading(HEADING, ""))
            .child(div("grid md:grid-cols-2 gap-8").with_children(SERVICES.iter().map(card))),
    )
}
