//! Reusable building blocks shared by several sections.

use crate::config::Destination;
use crate::dom::{ElementNode, Tag};
use crate::icons::Icon;
use crate::style::join_classes;

const BUTTON_BASE: &str = "px-8 py-4 rounded-lg font-extrabold flex items-center justify-center \
transition-all duration-300 shadow-sm hover:shadow-md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Dark navy text on the accent yellow.
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-accent text-navy hover:bg-yellow-500",
            ButtonVariant::Secondary => "bg-white text-navy border border-gray-200 hover:border-accent",
        }
    }
}

/// A call-to-action control with a trailing arrow.
///
/// Inert destinations render a `<button type="button">` with nothing bound to
/// it; real ones render an anchor with the same look.
pub fn button(
    label: &str,
    variant: ButtonVariant,
    extra_class: &str,
    arrow_class: &str,
    destination: &Destination,
) -> ElementNode {
    let class = join_classes(&[BUTTON_BASE, variant.classes(), extra_class]);
    let el = match destination {
        Destination::Inert => ElementNode::new(Tag::Button).attr("type", "button"),
        Destination::Url(url) => ElementNode::new(Tag::A)
            .attr("href", url.as_str())
            .attr("role", "button"),
    };
    el.class(class)
        .attr("data-cta", label)
        .text(label)
        .child(Icon::ArrowRight.render(arrow_class))
}

/// Centered `h2` used by most sections.
pub fn section_heading(text: &str, extra_class: &str) -> ElementNode {
    ElementNode::new(Tag::H2)
        .class(join_classes(&[
            "text-3xl md:text-5xl font-black text-center text-navy mb-16 tracking-tight",
            extra_class,
        ]))
        .text(text)
}

/// Root element of a page section, tagged with a stable `data-section` id.
pub fn section(id: &str, class: &str) -> ElementNode {
    ElementNode::new(Tag::Section)
        .attr("id", id)
        .attr("data-section", id)
        .class(class)
}

pub fn div(class: &str) -> ElementNode {
    ElementNode::new(Tag::Div).class(class)
}

pub fn p(class: &str, text: &str) -> ElementNode {
    ElementNode::new(Tag::P).class(class).text(text)
}

pub fn heading(tag: Tag, class: &str, text: &str) -> ElementNode {
    debug_assert!(tag.is_heading());
    ElementNode::new(tag).class(class).text(text)
}
