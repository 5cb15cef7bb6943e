//! Pipeline – ties together configuration, the clock, and the sections into
//! a complete HTML document.

use crate::clock::{Clock, SystemClock};
use crate::config::{Destination, SiteConfig};
use crate::content::OWNER_NAME;
use crate::dom::{ElementNode, Tag};
use crate::manifest::{ActionManifest, PageManifest, SectionManifest};
use crate::sections::footer::Channel;
use crate::sections::{
    about, cta, events, hero, logos, process, results, services, RenderContext, Section,
};

/// Tailwind play CDN, used when the theme does not ship its own build.
pub const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";

const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Build the full `<html>` tree. The clock is read once per call.
pub fn build_document<C: Clock + ?Sized>(site: &SiteConfig, clock: &C) -> ElementNode {
    document_for_year(site, clock.current_year())
}

fn document_for_year(site: &SiteConfig, year: i32) -> ElementNode {
    log::debug!("rendering page for year {year}");
    let ctx = RenderContext {
        links: &site.links,
        year,
    };

    let page = ElementNode::new(Tag::Div)
        .class("min-h-screen bg-white")
        .with_children(Section::ALL.iter().map(|section| {
            log::trace!("rendering section {}", section.id());
            section.render(&ctx)
        }));

    ElementNode::new(Tag::Html)
        .attr("lang", "en")
        .child(build_head(site))
        .child(ElementNode::new(Tag::Body).child(page))
}

fn build_head(site: &SiteConfig) -> ElementNode {
    let mut head = ElementNode::new(Tag::Head)
        .child(ElementNode::new(Tag::Meta).attr("charset", "utf-8"))
        .child(
            ElementNode::new(Tag::Meta)
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(ElementNode::new(Tag::Title).text(site.title.as_str()))
        .child(
            ElementNode::new(Tag::Meta)
                .attr("name", "description")
                .attr("content", site.description.as_str()),
        );

    if site.theme.tailwind_cdn {
        head = head
            .child(ElementNode::new(Tag::Script).attr("src", TAILWIND_CDN_URL))
            .child(ElementNode::new(Tag::Script).text(site.palette().tailwind_config_script()));
    }
    if let Some(sheet) = &site.theme.stylesheet {
        head = head.child(
            ElementNode::new(Tag::Link)
                .attr("rel", "stylesheet")
                .attr("href", sheet.as_str()),
        );
    }
    head
}

/// Full pipeline: config + clock → HTML document string.
pub fn render_html<C: Clock + ?Sized>(site: &SiteConfig, clock: &C) -> String {
    serialize(&build_document(site, clock))
}

fn serialize(doc: &ElementNode) -> String {
    let mut html = String::from(DOCTYPE);
    html.push_str(&doc.to_html());
    html.push('\n');
    log::info!("rendered {} sections ({} bytes)", Section::ALL.len(), html.len());
    html
}

/// Convenience: default configuration, wall-clock date.
pub fn render_default() -> String {
    render_html(&SiteConfig::default(), &SystemClock)
}

/// Summarise what [`render_html`] would put on the page, without rendering.
pub fn compute_manifest<C: Clock + ?Sized>(site: &SiteConfig, clock: &C) -> PageManifest {
    manifest_for_year(site, clock.current_year())
}

fn manifest_for_year(site: &SiteConfig, year: i32) -> PageManifest {
    let ctx = RenderContext {
        links: &site.links,
        year,
    };
    PageManifest {
        title: site.title.clone(),
        year,
        sections: Section::ALL.iter().map(|s| summarize(*s, &ctx)).collect(),
    }
}

/// A page and its manifest, rendered against a single clock reading.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub manifest: PageManifest,
}

/// Render HTML and manifest together so both carry the same year.
pub fn render_page<C: Clock + ?Sized>(site: &SiteConfig, clock: &C) -> RenderedPage {
    let year = clock.current_year();
    RenderedPage {
        html: serialize(&document_for_year(site, year)),
        manifest: manifest_for_year(site, year),
    }
}

fn action(label: &str, dest: &Destination) -> ActionManifest {
    ActionManifest {
        label: label.to_string(),
        href: dest.url().map(str::to_string),
    }
}

fn summarize(section: Section, ctx: &RenderContext<'_>) -> SectionManifest {
    let scheduling = ctx.links.scheduling();
    let (heading, items, actions): (String, Vec<String>, Vec<ActionManifest>) = match section {
        Section::Hero => (
            hero::HEADLINE.join(" "),
            hero::EYEBROW.iter().map(|s| s.to_string()).collect(),
            vec![action(hero::CTA_LABEL, &scheduling)],
        ),
        Section::Logos => (
            logos::HEADING.to_string(),
            logos::ROW1
                .iter()
                .chain(logos::ROW2.iter())
                .map(|s| s.to_string())
                .collect(),
            Vec::new(),
        ),
        Section::About => (
            format!("Meet {OWNER_NAME}"),
            about::TAGS.iter().map(|s| s.to_string()).collect(),
            Vec::new(),
        ),
        Section::Services => (
            services::HEADING.to_string(),
            services::SERVICES.iter().map(|s| s.title.to_string()).collect(),
            services::SERVICES
                .iter()
                .map(|s| {
                    let label = format!("{}: {}", services::LEARN_MORE, s.title);
                    action(&label, &Destination::Inert)
                })
                .collect(),
        ),
        Section::Results => (
            results::HEADING.to_string(),
            results::CASES.iter().map(|c| c.client.to_string()).collect(),
            vec![action(results::CTA_LABEL, &scheduling)],
        ),
        Section::ExpoEvents => (
            events::HEADING.to_string(),
            events::EVENTS
                .iter()
                .map(|e| format!("{} ({})", e.name, e.year))
                .collect(),
            Vec::new(),
        ),
        Section::HowItWorks => (
            process::HEADING.to_string(),
            process::STEPS
                .iter()
                .map(|s| format!("{} {}", s.ordinal, s.title))
                .collect(),
            Vec::new(),
        ),
        Section::FinalCta => (
            cta::HEADING.to_string(),
            Vec::new(),
            vec![action(cta::CTA_LABEL, &scheduling)],
        ),
        Section::Footer => (
            OWNER_NAME.to_string(),
            Vec::new(),
            Channel::ALL
                .iter()
                .map(|c| action(c.label(), &c.destination(ctx)))
                .collect(),
        ),
    };
    SectionManifest {
        id: section.id().to_string(),
        heading,
        items,
        actions,
    }
}
