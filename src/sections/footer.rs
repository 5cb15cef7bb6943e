//! Footer: bio blurb, contact channels, and the copyright line.

use crate::components::{div, heading, p};
use crate::config::Destination;
use crate::content::OWNER_NAME;
use crate::dom::{ElementNode, Tag};
use crate::icons::Icon;

use super::RenderContext;

pub const BLURB: &str = "Ankit Gautam specializes in global press release distribution and media \
placement, helping startups and brands achieve strategic visibility in tier-1 publications.";

/// A contact channel shown under "Connect".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Linkedin,
    Schedule,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Linkedin, Channel::Schedule];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Linkedin => "LinkedIn",
            Channel::Schedule => "Schedule Call",
        }
    }

    fn icon(&self) -> Icon {
        match self {
            Channel::Email => Icon::Mail,
            Channel::Linkedin => Icon::Linkedin,
            Channel::Schedule => Icon::Calendar,
        }
    }

    pub fn destination(&self, ctx: &RenderContext<'_>) -> Destination {
        match self {
            Channel::Email => ctx.links.email(),
            Channel::Linkedin => ctx.links.linkedin(),
            Channel::Schedule => ctx.links.scheduling(),
        }
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER_NAME}. All rights reserved.")
}

fn contact_link(channel: Channel, ctx: &RenderContext<'_>) -> ElementNode {
    let dest = channel.destination(ctx);
    let mut link = ElementNode::new(Tag::A)
        .attr("href", dest.href())
        .attr("data-channel", channel.label())
        .class("flex items-center text-gray-400 hover:text-white transition-all font-bold group");
    if dest.url().is_some_and(|u| u.starts_with("http")) {
        link = link.attr("target", "_blank").attr("rel", "noopener noreferrer");
    }
    link.child(channel.icon().render(
        "w-5 h-5 mr-4 text-accent group-hover:scale-110 transition-transform",
    ))
    .text(channel.label())
}

pub fn render(ctx: &RenderContext<'_>) -> ElementNode {
    ElementNode::new(Tag::Footer)
        .attr("id", "footer")
        .attr("data-section", "footer")
        .class("bg-navy border-t border-white/5 pt-24 pb-12 px-4 text-white")
        .child(
            div("max-w-6xl mx-auto grid md:grid-cols-2 gap-20 mb-20")
                .child(
                    div("")
                        .child(heading(Tag::H3, "text-2xl font-black mb-6 tracking-tight", OWNER_NAME))
                        .child(p(
                            "text-gray-400 leading-relaxed tracking-wide font-medium max-w-sm",
                            BLURB,
                        )),
                )
                .child(
                    div("grid grid-cols-1 gap-8")
                        .child(heading(
                            Tag::H4,
                            "text-xs font-black uppercase tracking-[0.2em] text-gray-500",
                            "Connect",
                        ))
                        .child(
                            div("space-y-6")
                                .with_children(Channel::ALL.into_iter().map(|c| contact_link(c, ctx))),
                        ),
                ),
        )
        .child(
            div("max-w-6xl mx-auto pt-10 border-t border-white/5 text-center text-xs font-bold text-gray-600 uppercase tracking-widest")
                .attr("data-copyright", ctx.year.to_string())
                .text(copyright(ctx.year)),
        )
}
