//! Page manifest – a serialisable summary of what a render put on the page.
//!
//! The manifest mirrors the section order and records, per section, the
//! visible item labels and every call-to-action with its destination. It is
//! what the CLI writes with `--manifest` and what the placeholder audit reads.

use serde::{Deserialize, Serialize};

/// Summary of one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    pub title: String,
    /// Year shown in the footer copyright line.
    pub year: i32,
    pub sections: Vec<SectionManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionManifest {
    pub id: String,
    pub heading: String,
    /// Ordered labels of the repeated items (outlets, services, cases, ...).
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ActionManifest>,
}

/// A link or call-to-action control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionManifest {
    pub label: String,
    /// `None` while the control is an inert placeholder.
    pub href: Option<String>,
}

impl PageManifest {
    /// Serialise to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn section(&self, id: &str) -> Option<&SectionManifest> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Every action still lacking a destination, as `(section id, label)`.
    pub fn inert_actions(&self) -> Vec<(&str, &str)> {
        self.sections
            .iter()
            .flat_map(|s| {
                s.actions
                    .iter()
                    .filter(|a| a.href.is_none())
                    .map(move |a| (s.id.as_str(), a.label.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageManifest {
        PageManifest {
            title: "t".to_string(),
            year: 2025,
            sections: vec![
                SectionManifest {
                    id: "hero".to_string(),
                    heading: "h".to_string(),
                    items: vec![],
                    actions: vec![ActionManifest {
                        label: "Book a Strategy Call".to_string(),
                        href: None,
                    }],
                },
                SectionManifest {
                    id: "footer".to_string(),
                    heading: "f".to_string(),
                    items: vec![],
                    actions: vec![ActionManifest {
                        label: "Email".to_string(),
                        href: Some("mailto:a@b.c".to_string()),
                    }],
                },
            ],
        }
    }

    #[test]
    fn inert_actions_lists_only_placeholders() {
        assert_eq!(sample().inert_actions(), vec![("hero", "Book a Strategy Call")]);
    }

    #[test]
    fn json_keeps_section_order() {
        let json = sample().to_json().unwrap();
        let back = PageManifest::from_json(&json).unwrap();
        assert_eq!(back.sections[0].id, "hero");
        assert_eq!(back, sample());
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let back = PageManifest::from_json(
            r#"{"title":"t","year":2024,"sections":[{"id":"logos","heading":"x"}]}"#,
        )
        .unwrap();
        assert!(back.sections[0].items.is_empty());
        assert!(back.section("logos").is_some());
    }
}
