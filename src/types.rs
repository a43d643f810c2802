//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → sidebar) and
//! form the public data model for library callers that supply their own
//! page collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A documentation page discovered by the scan stage (or supplied directly
/// by a library caller).
///
/// Only the metadata the sidebar pipeline reads is carried here; everything
/// else in a page's front matter is ignored at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Site-relative source path with a leading slash
    /// (e.g. `/manuals/1.0/en/01-intro.md`).
    pub path: String,
    /// Resolved URL: the front-matter permalink when present, otherwise the
    /// pretty URL derived from the path.
    pub url: String,
    /// Front-matter `category:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Front-matter `layout:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Front-matter `title:`. Pages without one never reach the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Front-matter `permalink:`, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// Front-matter `sidebar:` flag. Absent means visible; only an explicit
    /// `false` hides the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<bool>,
}

impl Page {
    /// Base filename without its extension
    /// (`/manuals/1.0/en/01-intro.md` → `01-intro`).
    pub fn basename_without_ext(&self) -> &str {
        let base = self.path.rsplit('/').next().unwrap_or(&self.path);
        match base.rfind('.') {
            Some(dot) if dot > 0 => &base[..dot],
            _ => base,
        }
    }
}

/// One rendered navigation record: the reduced shape the template layer
/// consumes.
///
/// `permalink` is serialized even when absent: consumers receive an
/// explicit `null` rather than a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub title: String,
    pub url: String,
    pub permalink: Option<String>,
}

/// Supported manual languages.
///
/// The set is closed: each language pins both a path segment in the manual
/// tree and the layout value required by strict selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
}

impl Language {
    /// All supported languages, in build order.
    pub const ALL: [Language; 2] = [Language::En, Language::Ja];

    /// Two-letter language code used in manual paths and registry keys.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Layout value a page must declare to pass strict selection.
    pub fn layout(self) -> &'static str {
        match self {
            Language::En => "docs-en",
            Language::Ja => "docs-ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
