//! Theme – the brand palette and Tailwind class plumbing.
//!
//! The page is styled entirely with Tailwind utility classes. Two of them are
//! brand colours (`navy`, `accent`) that Tailwind does not ship, so they are
//! registered through the runtime `tailwind.config` object emitted in the
//! document head.

use serde_json::json;

/// RGB colour (0 – 255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const NAVY: Self = Self {
        r: 0x0B,
        g: 0x1F,
        b: 0x3A,
    };
    pub const ACCENT: Self = Self {
        r: 0xFA,
        g: 0xCC,
        b: 0x15,
    };

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Self { r, g, b })
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Self { r, g, b })
        } else {
            None
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Brand colours referenced by `*-navy` and `*-accent` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub navy: Color,
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: Color::NAVY,
            accent: Color::ACCENT,
        }
    }
}

impl Palette {
    /// Tailwind runtime config registering the brand colours.
    pub fn tailwind_config(&self) -> serde_json::Value {
        json!({
            "theme": {
                "extend": {
                    "colors": {
                        "navy": self.navy.to_hex(),
                        "accent": self.accent.to_hex(),
                    }
                }
            }
        })
    }

    /// Body of the inline `<script>` that must follow the Tailwind CDN tag.
    pub fn tailwind_config_script(&self) -> String {
        format!("tailwind.config = {};", self.tailwind_config())
    }
}

/// Join class fragments with single spaces, dropping empty ones.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
