//! Content records shown on the page.
//!
//! Every record is a compile-time literal owned by the section that declares
//! it (see [`crate::sections`]). Fixed-size arrays pin the counts the layout
//! depends on: a case study always carries exactly three stat tiles.

use serde::Serialize;

use crate::icons::Icon;

/// A media outlet named in the logo strip.
pub type LogoEntry = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// One headline figure on a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub client: &'static str,
    pub challenge: &'static str,
    pub result: &'static str,
    pub stats: [Stat; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    pub year: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub impact_note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    /// Two-digit display ordinal, "01" onwards.
    pub ordinal: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Name used for the bio heading, footer, and copyright line.
pub const OWNER_NAME: &str = "Ankit Gautam";

/// Default `<title>` when configuration does not override it.
pub const DEFAULT_TITLE: &str = "Ankit Gautam | Global Press Release & Media Placement";

pub const DEFAULT_DESCRIPTION: &str = "Strategic press release distribution and media placement \
across global publications for founders, startups, and brands.";
