//! Inline SVG icons (Lucide outlines, 24×24 viewBox, stroke-based).

use crate::dom::{ElementNode, Tag};

/// Symbolic icon reference carried by content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    Globe,
    Target,
    Megaphone,
    UserCheck,
    Mail,
    Linkedin,
    Calendar,
    FileText,
    Search,
}

/// One SVG shape: element name plus attributes.
type Shape = (&'static str, &'static [(&'static str, &'static str)]);

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::Globe => "globe",
            Icon::Target => "target",
            Icon::Megaphone => "megaphone",
            Icon::UserCheck => "user-check",
            Icon::Mail => "mail",
            Icon::Linkedin => "linkedin",
            Icon::Calendar => "calendar",
            Icon::FileText => "file-text",
            Icon::Search => "search",
        }
    }

    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::ArrowRight => &[
                ("path", &[("d", "M5 12h14")]),
                ("path", &[("d", "m12 5 7 7-7 7")]),
            ],
            Icon::Globe => &[
                ("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]),
                ("path", &[("d", "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20")]),
                ("path", &[("d", "M2 12h20")]),
            ],
            Icon::Target => &[
                ("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]),
                ("circle", &[("cx", "12"), ("cy", "12"), ("r", "6")]),
                ("circle", &[("cx", "12"), ("cy", "12"), ("r", "2")]),
            ],
            Icon::Megaphone => &[
                ("path", &[("d", "m3 11 18-5v12L3 14v-3z")]),
                ("path", &[("d", "M11.6 16.8a3 3 0 1 1-5.8-1.6")]),
            ],
            Icon::UserCheck => &[
                ("path", &[("d", "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2")]),
                ("circle", &[("cx", "9"), ("cy", "7"), ("r", "4")]),
                ("polyline", &[("points", "16 11 18 13 22 9")]),
            ],
            Icon::Mail => &[
                ("rect", &[("width", "20"), ("height", "16"), ("x", "2"), ("y", "4"), ("rx", "2")]),
                ("path", &[("d", "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7")]),
            ],
            Icon::Linkedin => &[
                ("path", &[("d", "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z")]),
                ("rect", &[("width", "4"), ("height", "12"), ("x", "2"), ("y", "9")]),
                ("circle", &[("cx", "4"), ("cy", "4"), ("r", "2")]),
            ],
            Icon::Calendar => &[
                ("rect", &[("width", "18"), ("height", "18"), ("x", "3"), ("y", "4"), ("rx", "2"), ("ry", "2")]),
                ("line", &[("x1", "16"), ("x2", "16"), ("y1", "2"), ("y2", "6")]),
                ("line", &[("x1", "8"), ("x2", "8"), ("y1", "2"), ("y2", "6")]),
                ("line", &[("x1", "3"), ("x2", "21"), ("y1", "10"), ("y2", "10")]),
            ],
            Icon::FileText => &[
                ("path", &[("d", "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z")]),
                ("polyline", &[("points", "14 2 14 8 20 8")]),
                ("line", &[("x1", "16"), ("x2", "8"), ("y1", "13"), ("y2", "13")]),
                ("line", &[("x1", "16"), ("x2", "8"), ("y1", "17"), ("y2", "17")]),
                ("line", &[("x1", "10"), ("x2", "8"), ("y1", "9"), ("y2", "9")]),
            ],
            Icon::Search => &[
                ("circle", &[("cx", "11"), ("cy", "11"), ("r", "8")]),
                ("path", &[("d", "m21 21-4.3-4.3")]),
            ],
        }
    }

    /// Render as an inline `<svg>` carrying `class`. Decorative, so hidden
    /// from assistive tech.
    pub fn render(&self, class: &str) -> ElementNode {
        let svg = ElementNode::new(Tag::Svg)
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "24")
            .attr("height", "24")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("aria-hidden", "true")
            .attr("data-icon", self.name())
            .class(class);

        svg.with_children(self.shapes().iter().map(|(name, attrs)| {
            attrs
                .iter()
                .fold(ElementNode::new(Tag::from_name(name)), |el, (k, v)| {
                    el.attr(*k, *v)
                })
        }))
    }
}
