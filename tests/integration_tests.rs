//! Integration tests for the landing page pipeline.
//!
//! These tests render the full document, parse it back with the crate's own
//! parser, and validate:
//! - Section order and uniqueness
//! - Per-section item counts and literal content
//! - Footer year tracking the clock across a year boundary
//! - Link wiring from configuration, and byte-stable output

use std::io::Write;

use sha2::{Digest, Sha256};

use landing_forge::clock::ManualClock;
use landing_forge::config::SiteConfig;
use landing_forge::dom::{body_children, parse_html, DomNode, ElementNode, Tag};
use landing_forge::manifest::PageManifest;
use landing_forge::pipeline::{compute_manifest, render_html, render_page};
use landing_forge::sections::Section;

// =====================================================================
// Helpers
// =====================================================================

fn clock() -> ManualClock {
    ManualClock::at(2025, 3, 14).unwrap()
}

fn render(site: &SiteConfig) -> String {
    render_html(site, &clock())
}

/// Parse rendered HTML and return the `min-h-screen` page wrapper.
fn page_root(html: &str) -> ElementNode {
    let body = body_children(&parse_html(html));
    let root = body
        .into_iter()
        .find_map(|n| match n {
            DomNode::Element(e) => Some(e),
            DomNode::Text(_) => None,
        })
        .expect("body should contain the page wrapper");
    assert!(root.has_class("min-h-screen"));
    root
}

fn section<'a>(root: &'a ElementNode, id: &str) -> &'a ElementNode {
    root.element_children()
        .find(|e| e.get_attr("data-section") == Some(id))
        .unwrap_or_else(|| panic!("section '{id}' missing"))
}

fn texts_with_attr(root: &ElementNode, attr: &str) -> Vec<String> {
    root.find_all(&|e| e.get_attr(attr).is_some())
        .iter()
        .map(|e| e.text_content())
        .collect()
}

// =====================================================================
// Composition
// =====================================================================

#[test]
fn sections_render_once_in_fixed_order() {
    let root = page_root(&render(&SiteConfig::default()));
    let ids: Vec<&str> = root
        .element_children()
        .filter_map(|e| e.get_attr("data-section"))
        .collect();
    assert_eq!(
        ids,
        vec![
            "hero",
            "logos",
            "about",
            "services",
            "results",
            "expo-events",
            "how-it-works",
            "final-cta",
            "footer",
        ]
    );
    let expected: Vec<&str> = Section::ALL.iter().map(Section::id).collect();
    assert_eq!(ids, expected);
    assert_eq!(root.element_children().count(), 9);
}

#[test]
fn footer_is_a_footer_element() {
    let root = page_root(&render(&SiteConfig::default()));
    assert_eq!(section(&root, "footer").tag, Tag::Footer);
    assert_eq!(section(&root, "hero").tag, Tag::Section);
}

#[test]
fn final_cta_heading_appears_exactly_once() {
    let html = render(&SiteConfig::default());
    assert_eq!(html.matches("Ready to Get Your Brand Featured?").count(), 1);
}

#[test]
fn document_head_registers_theme() {
    let html = render(&SiteConfig::default());
    let nodes = parse_html(&html);
    let DomNode::Element(doc) = &nodes[0] else {
        panic!("Expected <html>");
    };
    assert_eq!(doc.tag, Tag::Html);
    let title = doc.find_first(&|e| e.tag == Tag::Title).unwrap();
    assert_eq!(
        title.text_content(),
        "Ankit Gautam | Global Press Release & Media Placement"
    );
    let scripts = doc.find_all(&|e| e.tag == Tag::Script);
    assert_eq!(scripts.len(), 2);
    assert!(scripts[1].text_content().contains("\"navy\":\"#0b1f3a\""));
}

// =====================================================================
// Section content
// =====================================================================

#[test]
fn logos_split_five_then_three() {
    let root = page_root(&render(&SiteConfig::default()));
    let logos = section(&root, "logos");
    let groups = logos.find_all(&|e| e.get_attr("data-group").is_some());
    assert_eq!(groups.len(), 2);
    let row1: Vec<String> = groups[0].element_children().map(|e| e.text_content()).collect();
    let row2: Vec<String> = groups[1].element_children().map(|e| e.text_content()).collect();
    assert_eq!(
        row1,
        vec!["Forbes", "TechCrunch", "Yahoo Finance", "Business Insider", "Bloomberg"]
    );
    assert_eq!(row2, vec!["Reuters", "Associated Press", "MarketWatch"]);
    assert_eq!(texts_with_attr(logos, "data-outlet").len(), 8);
}

#[test]
fn about_has_bio_and_tags() {
    let root = page_root(&render(&SiteConfig::default()));
    let about = section(&root, "about");
    assert_eq!(
        texts_with_attr(about, "data-tag"),
        vec!["Cisco", "ASER", "Global PR Networks", "International Expos"]
    );
    let paragraphs = about
        .find_first(&|e| e.has_class("space-y-6"))
        .unwrap()
        .element_children()
        .count();
    assert_eq!(paragraphs, 4);
}

#[test]
fn services_titles_are_verbatim() {
    let root = page_root(&render(&SiteConfig::default()));
    let services = section(&root, "services");
    let titles: Vec<String> = services
        .find_all(&|e| e.tag == Tag::H3)
        .iter()
        .map(|h| h.text_content())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Global Press Release Distribution",
            "Tier-1 Media Placement Strategy",
            "Event & Expo Media Amplification",
            "Founder Branding & Authority Building",
        ]
    );
    let learn_more = services.find_all(&|e| e.tag == Tag::A);
    assert_eq!(learn_more.len(), 4);
    assert!(learn_more.iter().all(|a| a.text_content() == "Learn More"));
}

#[test]
fn results_have_three_cases_with_three_tiles() {
    let root = page_root(&render(&SiteConfig::default()));
    let results = section(&root, "results");
    let cases = results.find_all(&|e| e.get_attr("data-case").is_some());
    assert_eq!(cases.len(), 3);
    for case in &cases {
        assert_eq!(case.find_all(&|e| e.get_attr("data-stat").is_some()).len(), 3);
    }

    let first_tile = cases[0]
        .find_first(&|e| e.get_attr("data-stat").is_some())
        .unwrap();
    let mut parts = first_tile.element_children();
    assert_eq!(parts.next().unwrap().text_content(), "50+");
    assert_eq!(parts.next().unwrap().text_content(), "PLACEMENTS");

    let last_tile = cases[2]
        .find_all(&|e| e.get_attr("data-stat").is_some())
        .pop()
        .unwrap();
    assert_eq!(last_tile.text_content(), "2 PARTNERSHIPS");

    let ctas = texts_with_attr(results, "data-cta");
    assert_eq!(ctas, vec!["Book Your Strategy Call"]);
}

#[test]
fn expo_events_in_literal_order() {
    let root = page_root(&render(&SiteConfig::default()));
    let events = section(&root, "expo-events");
    let cards = events.find_all(&|e| e.get_attr("data-event").is_some());
    let seen: Vec<(String, String)> = cards
        .iter()
        .map(|c| {
            let year = c.element_children().next().unwrap().text_content();
            let name = c.find_first(&|e| e.tag == Tag::H3).unwrap().text_content();
            (name, year)
        })
        .collect();
    let expected = [
        ("Web Summit Lisbon", "2024"),
        ("TechCrunch Disrupt", "2024"),
        ("CES Las Vegas", "2023"),
        ("SXSW Austin", "2023"),
    ];
    assert_eq!(seen.len(), expected.len());
    for ((name, year), (want_name, want_year)) in seen.iter().zip(expected) {
        assert_eq!(name, want_name);
        assert_eq!(year, want_year);
    }
}

#[test]
fn how_it_works_ordinals_are_strictly_sequential() {
    let root = page_root(&render(&SiteConfig::default()));
    let steps = section(&root, "how-it-works");
    let ordinals: Vec<&str> = steps
        .find_all(&|e| e.get_attr("data-step").is_some())
        .iter()
        .filter_map(|s| s.get_attr("data-step"))
        .collect();
    assert_eq!(ordinals, vec!["01", "02", "03", "04"]);
    let titles: Vec<String> = steps
        .find_all(&|e| e.tag == Tag::H3)
        .iter()
        .map(|h| h.text_content())
        .collect();
    assert_eq!(
        titles,
        vec!["Book Strategy Call", "Media Planning", "Distribution", "Amplification"]
    );
}

#[test]
fn final_cta_has_one_control_and_disclaimer() {
    let root = page_root(&render(&SiteConfig::default()));
    let cta = section(&root, "final-cta");
    assert_eq!(texts_with_attr(cta, "data-cta"), vec!["Schedule Consultation"]);
    assert!(cta
        .text_content()
        .contains("Serious inquiries only — focused strategy discussions."));
}

// =====================================================================
// Clock
// =====================================================================

#[test]
fn footer_year_follows_clock_across_new_year() {
    let site = SiteConfig::default();
    let clock = ManualClock::at(2025, 12, 31).unwrap();

    let before = render_html(&site, &clock);
    assert!(before.contains("© 2025 Ankit Gautam. All rights reserved."));

    clock.advance_days(1);
    let after = render_html(&site, &clock);
    assert!(after.contains("© 2026 Ankit Gautam. All rights reserved."));
    assert!(!after.contains("© 2025"));

    let root = page_root(&after);
    let line = section(&root, "footer")
        .find_first(&|e| e.get_attr("data-copyright").is_some())
        .unwrap();
    assert_eq!(line.get_attr("data-copyright"), Some("2026"));
}

// =====================================================================
// Links
// =====================================================================

#[test]
fn placeholders_render_inert_controls() {
    let root = page_root(&render(&SiteConfig::default()));
    let ctas = root.find_all(&|e| e.get_attr("data-cta").is_some());
    assert_eq!(ctas.len(), 3);
    for cta in ctas {
        assert_eq!(cta.tag, Tag::Button);
        assert!(cta.href().is_none());
    }
    let channels = root.find_all(&|e| e.get_attr("data-channel").is_some());
    assert!(channels.iter().all(|a| a.href() == Some("#")));
}

#[test]
fn config_file_wires_every_destination() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
[links]
scheduling_url = "https://cal.example.com/ankit"
email = "ankit@example.com"
linkedin_url = "https://www.linkedin.com/in/example"
"##
    )
    .unwrap();
    let site = SiteConfig::load(file.path()).unwrap();
    let root = page_root(&render(&site));

    for cta in root.find_all(&|e| e.get_attr("data-cta").is_some()) {
        assert_eq!(cta.tag, Tag::A);
        assert_eq!(cta.href(), Some("https://cal.example.com/ankit"));
    }
    let hrefs: Vec<&str> = root
        .find_all(&|e| e.get_attr("data-channel").is_some())
        .iter()
        .filter_map(|a| a.href())
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "mailto:ankit@example.com",
            "https://www.linkedin.com/in/example",
            "https://cal.example.com/ankit",
        ]
    );
    // Only the service cards' "Learn More" links have nothing to point at.
    let manifest = compute_manifest(&site, &clock());
    let inert: Vec<&str> = manifest
        .inert_actions()
        .into_iter()
        .map(|(section, _)| section)
        .collect();
    assert_eq!(inert, vec!["services"; 4]);
}

#[test]
fn page_and_manifest_share_one_year() {
    let page = render_page(&SiteConfig::default(), &clock());
    assert_eq!(page.manifest.year, 2025);
    let root = page_root(&page.html);
    let line = section(&root, "footer")
        .find_first(&|e| e.get_attr("data-copyright").is_some())
        .unwrap();
    assert_eq!(
        line.get_attr("data-copyright"),
        Some(page.manifest.year.to_string().as_str())
    );
}

// =====================================================================
// Manifest and stability
// =====================================================================

#[test]
fn manifest_mirrors_page() {
    let manifest = compute_manifest(&SiteConfig::default(), &clock());
    let back = PageManifest::from_json(&manifest.to_json().unwrap()).unwrap();
    assert_eq!(back, manifest);
    assert_eq!(back.year, 2025);
    assert_eq!(back.section("logos").unwrap().items.len(), 8);
    assert_eq!(
        back.section("expo-events").unwrap().items[0],
        "Web Summit Lisbon (2024)"
    );
    assert_eq!(
        back.section("final-cta").unwrap().heading,
        "Ready to Get Your Brand Featured?"
    );
}

#[test]
fn output_is_byte_stable_for_a_given_day() {
    let site = SiteConfig::default();
    let a = Sha256::digest(render(&site).as_bytes());
    let b = Sha256::digest(render(&site).as_bytes());
    assert_eq!(a, b);

    let later = ManualClock::at(2027, 1, 1).unwrap();
    let c = Sha256::digest(render_html(&site, &later).as_bytes());
    assert_ne!(a, c);
}
