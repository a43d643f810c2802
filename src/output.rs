//! CLI output formatting for both pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O.
//!
//! ## Scan
//!
//! ```text
//! Pages
//!     14 markdown pages
//!     en: 9 in manual tree, 5 in sidebar
//!     ja: 2 in manual tree, 2 in sidebar
//! ```
//!
//! ## Sidebar
//!
//! ```text
//! sidebar_en
//!     001 Getting Started → /manuals/1.0/en/01-getting-started/
//!     002 Configuration → /manuals/1.0/en/02-configuration/
//! sidebar_ja
//!     (empty)
//! ```
//!
//! ## Check
//!
//! ```text
//! Language en
//!     included /manuals/1.0/en/01-getting-started.md
//!     excluded /manuals/1.0/en/index.md (index page)
//! ```
//!
//! The check report carries the per-page diagnostics; it is observability
//! only, never part of the functional contract.

use crate::registry::DataRegistry;
use crate::scan::Manifest;
use crate::types::Language;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Scan summary: total page count plus per-language selection counts.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let selector = manifest.config.selector();
    let mut lines = vec![
        "Pages".to_string(),
        format!("    {} markdown pages", manifest.pages.len()),
    ];
    for lang in Language::ALL {
        let in_tree = manifest
            .pages
            .iter()
            .filter(|p| selector.in_language_tree(p, lang))
            .count();
        let selected = selector.select(&manifest.pages, lang).len();
        lines.push(format!(
            "    {lang}: {in_tree} in manual tree, {selected} in sidebar"
        ));
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

/// Emitted sidebar listing, one block per registry key.
pub fn format_sidebar_output(registry: &DataRegistry) -> Vec<String> {
    let mut lines = Vec::new();
    for (key, items) in registry.iter() {
        lines.push(key.to_string());
        if items.is_empty() {
            lines.push("    (empty)".to_string());
        }
        for (pos, entry) in items.iter().enumerate() {
            lines.push(format!(
                "    {} {} → {}",
                format_index(pos + 1),
                entry.title,
                entry.url
            ));
        }
    }
    lines
}

pub fn print_sidebar_output(registry: &DataRegistry) {
    for line in format_sidebar_output(registry) {
        println!("{line}");
    }
}

/// Per-language selection report with exclusion reasons.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let selector = manifest.config.selector();
    let mut lines = Vec::new();
    for lang in Language::ALL {
        lines.push(format!("Language {lang}"));
        let mut any = false;
        for page in &manifest.pages {
            if !selector.in_language_tree(page, lang) {
                continue;
            }
            any = true;
            match selector.exclusion(page, lang) {
                None => lines.push(format!("    included {}", page.path)),
                Some(reason) => lines.push(format!("    excluded {} ({reason})", page.path)),
            }
        }
        if !any {
            lines.push("    no pages in manual tree".to_string());
        }
    }
    lines
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{line}");
    }
}
