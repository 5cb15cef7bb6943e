//! Site configuration loaded from TOML.
//!
//! Everything is optional. Without a file the page renders with the built-in
//! title and palette, and every call-to-action stays an inert placeholder:
//! destinations are only ever taken from the site owner's configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::content::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::style::{Color, Palette};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub links: LinkSettings,
    pub theme: ThemeSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            links: LinkSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

/// Real destinations supplied by the site owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkSettings {
    /// Booking page used by every call-to-action and the footer.
    pub scheduling_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub navy: String,
    pub accent: String,
    /// Load Tailwind from its play CDN and register the palette at runtime.
    pub tailwind_cdn: bool,
    /// Extra stylesheet linked from the head (e.g. a precompiled Tailwind build).
    pub stylesheet: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            navy: Color::NAVY.to_hex(),
            accent: Color::ACCENT.to_hex(),
            tailwind_cdn: true,
            stylesheet: None,
        }
    }
}

/// Where a link or call-to-action control points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Placeholder with no bound action.
    Inert,
    Url(String),
}

impl Destination {
    pub fn url(&self) -> Option<&str> {
        match self {
            Destination::Inert => None,
            Destination::Url(u) => Some(u),
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Destination::Inert)
    }

    /// Value for an `href` attribute; placeholders keep the `#` anchor.
    pub fn href(&self) -> &str {
        self.url().unwrap_or("#")
    }
}

impl LinkSettings {
    pub fn scheduling(&self) -> Destination {
        to_destination(self.scheduling_url.as_deref())
    }

    pub fn email(&self) -> Destination {
        match self.email.as_deref().map(str::trim) {
            Some(addr) if !addr.is_empty() => Destination::Url(format!("mailto:{addr}")),
            _ => Destination::Inert,
        }
    }

    pub fn linkedin(&self) -> Destination {
        to_destination(self.linkedin_url.as_deref())
    }
}

fn to_destination(value: Option<&str>) -> Destination {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Destination::Url(v.to_string()),
        _ => Destination::Inert,
    }
}

impl SiteConfig {
    /// Read, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded site config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML held in memory.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("title must not be blank".to_string());
        }
        if self.description.trim().is_empty() {
            problems.push("description must not be blank".to_string());
        }
        if let Some(url) = &self.links.scheduling_url {
            check_url("links.scheduling_url", url, &mut problems);
        }
        if let Some(url) = &self.links.linkedin_url {
            check_url("links.linkedin_url", url, &mut problems);
        }
        if let Some(email) = &self.links.email {
            if !is_plausible_email(email) {
                problems.push(format!("links.email `{email}` is not an email address"));
            }
        }
        for (key, value) in [("theme.navy", &self.theme.navy), ("theme.accent", &self.theme.accent)] {
            if Color::from_hex(value).is_none() {
                problems.push(format!("{key} `{value}` is not a #rgb or #rrggbb colour"));
            }
        }
        if let Some(sheet) = &self.theme.stylesheet {
            if sheet.trim().is_empty() {
                problems.push("theme.stylesheet must not be blank".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }

    /// Palette resolved from the theme; invalid colours fall back to defaults.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            navy: Color::from_hex(&self.theme.navy).unwrap_or(defaults.navy),
            accent: Color::from_hex(&self.theme.accent).unwrap_or(defaults.accent),
        }
    }
}

fn check_url(key: &str, url: &str, problems: &mut Vec<String>) {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {}
        _ => problems.push(format!("{key} `{url}` must be an absolute http(s) URL")),
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
