//! Shared test utilities for the manual-nav test suite.
//!
//! Provides in-memory page builders and extractors for pipeline-level
//! assertions. Tests that need a real content tree build one with
//! `tempfile` directly (see the scan tests and `tests/sidebar_pipeline.rs`).

use crate::sidebar::Selector;
use crate::types::{Language, Page, SidebarEntry};

/// A fully-eligible manual page for `lang` at
/// `/manuals/1.0/{lang}/{file}`.
///
/// Tests override individual fields to probe each selection rule:
///
/// ```rust
/// let mut page = manual_page(Language::En, "01-intro.md", "Intro");
/// page.sidebar = Some(false);
/// ```
pub fn manual_page(lang: Language, file: &str, title: &str) -> Page {
    let path = format!("/manuals/1.0/{}/{}", lang.code(), file);
    let url = format!("{}/", path.strip_suffix(".md").unwrap_or(&path));
    Page {
        path,
        url,
        category: Some("Manual".to_string()),
        layout: Some(lang.layout().to_string()),
        title: Some(title.to_string()),
        permalink: None,
        sidebar: None,
    }
}

/// Entry titles, in order.
pub fn entry_titles(entries: &[SidebarEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// Paths of the pages a selector picks for `lang`, in input order.
pub fn selected_paths<'a>(
    selector: &Selector,
    pages: &'a [Page],
    lang: Language,
) -> Vec<&'a str> {
    selector
        .select(pages, lang)
        .iter()
        .map(|p| p.path.as_str())
        .collect()
}
