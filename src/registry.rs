//! Site data registry and sidebar data emit.
//!
//! The pipeline in [`crate::sidebar`] returns pure values; this module is
//! the thin adapter that assigns those values into the site-wide data
//! registry and persists them. Each language gets one named entry
//! (`sidebar_en`, `sidebar_ja`), written once per build, and one JSON data
//! file for the template layer to pick up.

use crate::sidebar::Selector;
use crate::types::{Language, Page, SidebarEntry};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry key for a language's sidebar data.
pub fn registry_key(lang: Language) -> String {
    format!("sidebar_{}", lang.code())
}

/// Site-wide key-value data registry.
///
/// Keys are stable-ordered; each holds the ordered sidebar entries for one
/// language. The registry lives only for the remainder of a build.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DataRegistry {
    #[serde(flatten)]
    entries: BTreeMap<String, Vec<SidebarEntry>>,
}

impl DataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value under a registry key, replacing any previous value.
    pub fn insert(&mut self, key: String, items: Vec<SidebarEntry>) {
        self.entries.insert(key, items);
    }

    /// The sidebar list for a language, if one has been assigned.
    pub fn sidebar(&self, lang: Language) -> Option<&[SidebarEntry]> {
        self.entries.get(&registry_key(lang)).map(Vec::as_slice)
    }

    /// Registry keys in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key-value pairs in stable key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarEntry])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Run the sidebar pipeline for every supported language and assign the
/// results into the registry.
///
/// An empty result for a language is assigned as an empty list, not
/// skipped: the template layer always finds both keys.
pub fn populate(registry: &mut DataRegistry, pages: &[Page], selector: &Selector) {
    for lang in Language::ALL {
        registry.insert(registry_key(lang), selector.entries(pages, lang));
    }
}

/// Write one pretty-printed JSON data file per registry key into `dir`.
///
/// `sidebar_en` becomes `<dir>/sidebar_en.json`, and so on.
pub fn write_data_files(registry: &DataRegistry, dir: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(dir)?;
    for (key, items) in registry.iter() {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(dir.join(format!("{key}.json")), json)?;
    }
    Ok(())
}
