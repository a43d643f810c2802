//! # manual-nav
//!
//! A minimal sidebar navigation generator for bilingual versioned manuals.
//! Given a tree of markdown documentation pages, it derives the per-language
//! sidebar data that drives a site's navigation template: which manual
//! chapters appear, in what order, with what titles and URLs.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content flows through two independent stages, joined by a JSON manifest:
//!
//! ```text
//! 1. Scan     content/  →  manifest.json            (filesystem → pages)
//! 2. Sidebar  manifest  →  sidebar_{en,ja}.json     (pages → nav data)
//! ```
//!
//! The sidebar stage itself is three pure steps, run once per language:
//!
//! ```text
//! select  — keep the eligible manual pages for the language
//! order   — sort by numeric filename prefix (01-, 02-, 10-, ...)
//! project — reduce each page to {title, url, permalink}
//! ```
//!
//! This separation exists for the same reasons the stages exchange a
//! manifest at all: each half is a pure function you can unit test without
//! the other, and the intermediate JSON is human-readable when a sidebar
//! comes out wrong.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content tree, reads front matter, produces the page manifest |
//! | [`sidebar`] | Stage 2 core — the pure select/order/project pipeline and its [`sidebar::Selector`] |
//! | [`registry`] | Stage 2 adapter — assigns pipeline output into the site data registry and emits JSON files |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared types serialized between stages (`Page`, `SidebarEntry`, `Language`) |
//! | [`naming`] | `NNN-` chapter-prefix parsing and the sidebar comparator |
//! | [`frontmatter`] | YAML front matter splitting and parsing |
//! | [`output`] | CLI output formatting — per-stage summaries and check diagnostics |
//!
//! # Design Decisions
//!
//! ## One Predicate, Two Strictness Modes
//!
//! Historically two near-identical selection filters existed: one matched
//! any page whose path contained the language directory, the other required
//! a direct-child markdown file with a matching per-language layout. Both
//! behaviors survive here, but as one predicate with an explicit
//! [`sidebar::Strictness`] mode, so the two can never drift apart again.
//! Strict is the default; loose is a deliberate, configured choice.
//!
//! ## Pure Core, Thin Adapter
//!
//! The select/order/project pipeline does no I/O and touches no shared
//! state; it cannot fail, and an empty sidebar is a valid result. The only
//! side effects live at the edges: [`registry::populate`] assigns results
//! into the data registry, and [`registry::write_data_files`] persists
//! them. Anything that consumes pages inline (the library analog of a
//! template filter) calls [`sidebar::sidebar_entries`] directly and skips
//! the registry entirely.
//!
//! ## Explicit Null Permalinks
//!
//! A page without a `permalink:` front matter key produces an entry whose
//! `permalink` serializes as an explicit `null`, not a missing field.
//! Template layers distinguish "no override" from "field absent", so the
//! record shape is kept fixed.
//!
//! ## Two Fixed Languages
//!
//! The language set (`en`, `ja`) is a closed enum, not configuration. Each
//! language pins a path segment and a layout value; generalizing beyond the
//! pair is explicitly out of scope, and the enum keeps every per-language
//! code path exhaustive.

pub mod config;
pub mod frontmatter;
pub mod naming;
pub mod output;
pub mod registry;
pub mod scan;
pub mod sidebar;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
