//! Markup tree – builds, serializes, and re-parses the HTML subset the page
//! is made of.
//!
//! Sections construct [`ElementNode`] trees with the builder methods and the
//! pipeline serializes the root with [`ElementNode::to_html`]. The parser reads
//! the same subset back, which is how rendered output is verified:
//! - Document: html, head, body, title, meta, link, script, style
//! - Structural: section, footer, div, p, h1-h4
//! - Interactive: a, button
//! - Inline: span, br, and inline SVG icons

use std::collections::BTreeMap;
use std::fmt::Write;

// ---------------------------------------------------------------------------
// DOM types
// ---------------------------------------------------------------------------

/// The tag name of a supported element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Html,
    Head,
    Body,
    Title,
    Meta,
    Link,
    Script,
    Style,
    Section,
    Footer,
    Div,
    P,
    H1,
    H2,
    H3,
    H4,
    A,
    Button,
    Span,
    Br,
    Svg,
    /// Anything else (SVG shapes mostly). Kept verbatim by name.
    Unknown(String),
}

impl Tag {
    pub fn from_name(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "html" => Tag::Html,
            "head" => Tag::Head,
            "body" => Tag::Body,
            "title" => Tag::Title,
            "meta" => Tag::Meta,
            "link" => Tag::Link,
            "script" => Tag::Script,
            "style" => Tag::Style,
            "section" => Tag::Section,
            "footer" => Tag::Footer,
            "div" => Tag::Div,
            "p" => Tag::P,
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "h4" => Tag::H4,
            "a" => Tag::A,
            "button" => Tag::Button,
            "span" => Tag::Span,
            "br" => Tag::Br,
            "svg" => Tag::Svg,
            _ => Tag::Unknown(s.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Html => "html",
            Tag::Head => "head",
            Tag::Body => "body",
            Tag::Title => "title",
            Tag::Meta => "meta",
            Tag::Link => "link",
            Tag::Script => "script",
            Tag::Style => "style",
            Tag::Section => "section",
            Tag::Footer => "footer",
            Tag::Div => "div",
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::A => "a",
            Tag::Button => "button",
            Tag::Span => "span",
            Tag::Br => "br",
            Tag::Svg => "svg",
            Tag::Unknown(name) => name,
        }
    }

    /// Elements that never have children or a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Meta | Tag::Link | Tag::Br)
    }

    /// Elements whose text content is written without escaping.
    pub fn is_raw_text(&self) -> bool {
        matches!(self, Tag::Script | Tag::Style)
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4)
    }
}

/// A node in our DOM tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element(ElementNode),
    Text(String),
}

impl From<ElementNode> for DomNode {
    fn from(e: ElementNode) -> Self {
        DomNode::Element(e)
    }
}

/// An element node carrying tag, attributes, and children.
///
/// Attributes are kept sorted so serialization is byte-stable.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag: Tag,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<DomNode>,
}

impl ElementNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    // -- builder ------------------------------------------------------------

    /// Set the `class` attribute. Empty strings leave the element unclassed.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.trim().is_empty() {
            return self;
        }
        self.attr("class", class)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: impl Into<DomNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(DomNode::Text(text.into()));
        self
    }

    pub fn with_children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<DomNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn classes(&self) -> Vec<&str> {
        self.attributes
            .get("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    pub fn href(&self) -> Option<&str> {
        self.get_attr("href")
    }

    /// Child elements, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|c| match c {
            DomNode::Element(e) => Some(e),
            DomNode::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes, whitespace-collapsed.
    pub fn text_content(&self) -> String {
        let mut raw = String::new();
        collect_text(&self.children, &mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Every descendant element (depth-first, document order) matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&ElementNode) -> bool) -> Vec<&'a ElementNode> {
        let mut out = Vec::new();
        for child in self.element_children() {
            if pred(child) {
                out.push(child);
            }
            out.extend(child.find_all(pred));
        }
        out
    }

    pub fn find_first<'a>(&'a self, pred: &dyn Fn(&ElementNode) -> bool) -> Option<&'a ElementNode> {
        self.find_all(pred).into_iter().next()
    }

    // -- serialization ------------------------------------------------------

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag.name());
        for (key, value) in &self.attributes {
            // Writing into a String cannot fail.
            let _ = write!(out, " {}=\"{}\"", key, escape_attr(value));
        }

        let svg_leaf = matches!(self.tag, Tag::Unknown(_)) && self.children.is_empty();
        if self.tag.is_void() || svg_leaf {
            out.push_str(" />");
            return;
        }
        out.push('>');

        for child in &self.children {
            match child {
                DomNode::Element(e) => e.write_html(out),
                DomNode::Text(t) if self.tag.is_raw_text() => out.push_str(t),
                DomNode::Text(t) => out.push_str(&escape_text(t)),
            }
        }

        out.push_str("</");
        out.push_str(self.tag.name());
        out.push('>');
    }
}

fn collect_text(nodes: &[DomNode], out: &mut String) {
    for node in nodes {
        match node {
            DomNode::Text(t) => {
                out.push_str(t);
                out.push(' ');
            }
            DomNode::Element(e) => collect_text(&e.children, out),
        }
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Parse markup into DOM nodes.
///
/// Covers what [`ElementNode::to_html`] writes: elements, quoted or bare
/// attributes, void tags, comments and `<!DOCTYPE>`. Not an HTML5 parser.
pub fn parse_html(html: &str) -> Vec<DomNode> {
    Cursor { rest: html }.nodes()
}

/// Reader over the unparsed tail of the input.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn nodes(&mut self) -> Vec<DomNode> {
        let mut out = Vec::new();
        loop {
            // Whitespace-only runs between tags are layout, not content.
            let trimmed = self.rest.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('<') {
                self.rest = trimmed;
            }
            if self.rest.is_empty() || self.rest.starts_with("</") {
                return out;
            }
            if self.eat("<!--") {
                self.skip_past("-->");
            } else if self.rest.starts_with("<!") || self.rest.starts_with("<?") {
                self.skip_past(">");
            } else if self.eat("<") {
                out.push(DomNode::Element(self.element()));
            } else {
                let text = self.take_while(|c| c != '<');
                out.push(DomNode::Text(decode_entities(text)));
            }
        }
    }

    /// Everything after the opening `<`, through the matching close tag.
    fn element(&mut self) -> ElementNode {
        let mut elem = ElementNode::new(Tag::from_name(self.name()));

        loop {
            self.skip_space();
            if self.rest.is_empty() || self.rest.starts_with('>') || self.rest.starts_with("/>") {
                break;
            }
            let key = self.name();
            if key.is_empty() {
                self.bump();
                continue;
            }
            self.skip_space();
            let value = if self.eat("=") {
                self.skip_space();
                self.attr_value()
            } else {
                String::new()
            };
            elem.attributes.insert(key.to_string(), value);
        }

        if self.eat("/>") {
            return elem;
        }
        self.eat(">");
        if elem.tag.is_void() {
            return elem;
        }

        elem.children = self.nodes();
        if self.eat("</") {
            self.name();
            self.skip_space();
            self.eat(">");
        }
        elem
    }

    fn name(&mut self) -> &'a str {
        self.take_while(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ':'))
    }

    fn attr_value(&mut self) -> String {
        match self.rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let raw = self.take_while(|c| c != quote);
                self.bump();
                decode_entities(raw)
            }
            _ => self
                .take_while(|c| !c.is_whitespace() && c != '>' && c != '/')
                .to_string(),
        }
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c| !keep(c)).unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    fn eat(&mut self, prefix: &str) -> bool {
        match self.rest.strip_prefix(prefix) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Drop input up to and including `marker`, or all of it if unterminated.
    fn skip_past(&mut self, marker: &str) {
        self.rest = match self.rest.find(marker) {
            Some(at) => &self.rest[at + marker.len()..],
            None => "",
        };
    }

    fn skip_space(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn bump(&mut self) {
        let mut chars = self.rest.chars();
        chars.next();
        self.rest = chars.as_str();
    }
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{00A0}")
        .replace("&amp;", "&")
}

/// Children of the first `<body>`, looking inside `<html>`; all of `nodes`
/// when there is no body.
pub fn body_children(nodes: &[DomNode]) -> Vec<DomNode> {
    for node in nodes {
        let DomNode::Element(e) = node else { continue };
        match e.tag {
            Tag::Body => return e.children.clone(),
            Tag::Html => {
                let inner = body_children(&e.children);
                if !inner.is_empty() {
                    return inner;
                }
            }
            _ => {}
        }
    }
    nodes.to_vec()
}
