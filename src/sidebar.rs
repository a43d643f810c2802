//! Sidebar derivation: the select → order → project pipeline.
//!
//! Stage 2 of the manual-nav build pipeline. For each supported language,
//! the page collection is filtered down to the eligible manual pages,
//! ordered by numeric filename prefix, and reduced to
//! `{title, url, permalink}` records for template consumption.
//!
//! ## Selection
//!
//! A page belongs in a language's sidebar when all of these hold:
//!
//! - its `category` is `Manual`
//! - it lives in the language's manual tree (see [`Strictness`])
//! - it is not an `index.md`
//! - it is not under a `convention/` directory
//! - its front matter does not set `sidebar: false`
//! - it has a non-empty title
//!
//! ## Strictness
//!
//! Two matching modes exist for the manual-tree test. [`Strictness::Strict`]
//! accepts only direct-child markdown files whose layout matches the
//! language (`docs-en` / `docs-ja`). [`Strictness::Loose`] accepts any page
//! whose path contains the language directory, at any depth, with no layout
//! requirement. Strict is the default; loose exists for site trees that
//! rely on the historical superset behavior.
//!
//! ## Purity
//!
//! Everything in this module is a pure function of its inputs: no I/O, no
//! shared state, no error path. An empty result for a language is a valid
//! outcome, not a failure. Assigning results into the site data registry is
//! the [`crate::registry`] module's job.

use crate::naming;
use crate::types::{Language, Page, SidebarEntry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default path prefix of the versioned manual tree.
pub const DEFAULT_MANUAL_PATH: &str = "manuals/1.0";

/// The category value marking a page as part of the manual.
pub const MANUAL_CATEGORY: &str = "Manual";

/// How strictly pages are matched into a language's manual tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Direct-child markdown files only, and the page layout must match the
    /// language.
    #[default]
    Strict,
    /// Any page under the language tree, regardless of depth or layout.
    Loose,
}

/// Why a page in a language's manual tree was left out of the sidebar.
///
/// Surfaced by the `check` command; diagnostic only, not part of the
/// functional contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    NotManualCategory,
    NotDirectChild,
    WrongLayout,
    IndexPage,
    ConventionPage,
    SidebarDisabled,
    MissingTitle,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Exclusion::NotManualCategory => "category is not \"Manual\"",
            Exclusion::NotDirectChild => "not a direct child of the language directory",
            Exclusion::WrongLayout => "layout does not match the language",
            Exclusion::IndexPage => "index page",
            Exclusion::ConventionPage => "convention page",
            Exclusion::SidebarDisabled => "sidebar disabled in front matter",
            Exclusion::MissingTitle => "missing title",
        };
        f.write_str(msg)
    }
}

/// The selection predicate, compiled once per site from the manual path
/// prefix and the strictness mode.
#[derive(Debug, Clone)]
pub struct Selector {
    strictness: Strictness,
    manual_path: String,
    direct_child: [Regex; 2],
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(Strictness::default())
    }
}

impl Selector {
    /// A selector for the default manual tree (`manuals/1.0`).
    pub fn new(strictness: Strictness) -> Self {
        Self::with_manual_path(strictness, DEFAULT_MANUAL_PATH)
    }

    /// A selector for a custom manual tree prefix.
    ///
    /// Leading and trailing slashes in `manual_path` are ignored.
    pub fn with_manual_path(strictness: Strictness, manual_path: &str) -> Self {
        let manual_path = manual_path.trim_matches('/').to_string();
        let direct_child = Language::ALL.map(|lang| {
            let pattern = format!(
                r"/{}/{}/[^/]+\.md$",
                regex::escape(&manual_path),
                lang.code()
            );
            Regex::new(&pattern).unwrap()
        });
        Self {
            strictness,
            manual_path,
            direct_child,
        }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// The directory substring placing a page in `lang`'s manual tree,
    /// e.g. `/manuals/1.0/en/`.
    fn language_dir(&self, lang: Language) -> String {
        format!("/{}/{}/", self.manual_path, lang.code())
    }

    /// Whether the page lives anywhere under `lang`'s manual tree.
    ///
    /// This is the loose containment test; strict mode narrows it further
    /// via [`Selector::exclusion`].
    pub fn in_language_tree(&self, page: &Page, lang: Language) -> bool {
        page.path.contains(&self.language_dir(lang))
    }

    /// Why a page in `lang`'s tree is left out, or `None` if it belongs in
    /// the sidebar.
    pub fn exclusion(&self, page: &Page, lang: Language) -> Option<Exclusion> {
        if page.category.as_deref() != Some(MANUAL_CATEGORY) {
            return Some(Exclusion::NotManualCategory);
        }
        if self.strictness == Strictness::Strict {
            if !self.direct_child[lang as usize].is_match(&page.path) {
                return Some(Exclusion::NotDirectChild);
            }
            if page.layout.as_deref() != Some(lang.layout()) {
                return Some(Exclusion::WrongLayout);
            }
        }
        if page.path.ends_with("/index.md") {
            return Some(Exclusion::IndexPage);
        }
        if page.path.contains("/convention/") {
            return Some(Exclusion::ConventionPage);
        }
        if page.sidebar == Some(false) {
            return Some(Exclusion::SidebarDisabled);
        }
        if page.title.as_deref().is_none_or(str::is_empty) {
            return Some(Exclusion::MissingTitle);
        }
        None
    }

    /// Whether the page belongs in `lang`'s sidebar.
    pub fn is_selected(&self, page: &Page, lang: Language) -> bool {
        self.in_language_tree(page, lang) && self.exclusion(page, lang).is_none()
    }

    /// Filter the page collection down to the sidebar pages for one
    /// language. Returns an empty vec, never an error, when nothing
    /// matches.
    pub fn select<'a>(&self, pages: &'a [Page], lang: Language) -> Vec<&'a Page> {
        pages
            .iter()
            .filter(|page| self.is_selected(page, lang))
            .collect()
    }

    /// Select, order, and project in one call: the sidebar for one
    /// language.
    pub fn entries(&self, pages: &[Page], lang: Language) -> Vec<SidebarEntry> {
        project(&order(self.select(pages, lang)))
    }
}

/// Sort selected pages by chapter order (see [`naming`]).
///
/// The sort is stable, so pages with equal keys keep their input order.
pub fn order<'a>(mut pages: Vec<&'a Page>) -> Vec<&'a Page> {
    pages.sort_by(|a, b| naming::chapter_order(a.basename_without_ext(), b.basename_without_ext()));
    pages
}

/// Map each page to its sidebar record.
///
/// Fields are copied verbatim: no transformation, truncation, or escaping.
/// An absent permalink passes through as `None`. Callers pass selected
/// pages, which always carry a title.
pub fn project(pages: &[&Page]) -> Vec<SidebarEntry> {
    pages
        .iter()
        .map(|page| SidebarEntry {
            title: page.title.clone().unwrap_or_default(),
            url: page.url.clone(),
            permalink: page.permalink.clone(),
        })
        .collect()
}

/// Build the sidebar entries for one language with the default selector.
///
/// The inline-template entry point: callable anywhere a page collection is
/// at hand, with no registry or I/O involved.
pub fn sidebar_entries(pages: &[Page], lang: Language) -> Vec<SidebarEntry> {
    Selector::default().entries(pages, lang)
}
