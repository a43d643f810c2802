//! Content scanning and manifest generation.
//!
//! Stage 1 of the manual-nav build pipeline. Walks the content directory
//! for markdown pages, reads their front matter, and produces a structured
//! manifest the sidebar stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md
//! └── manuals/1.0/
//!     ├── en/
//!     │   ├── index.md             # Never in the sidebar
//!     │   ├── 01-getting-started.md
//!     │   ├── 02-configuration.md
//!     │   ├── appendix.md          # Unprefixed files sort last
//!     │   └── convention/          # Style-guide pages, always excluded
//!     │       └── headings.md
//!     └── ja/
//!         ├── 01-hajimeni.md
//!         └── 02-settei.md
//! ```
//!
//! ## Paths and URLs
//!
//! Page paths are site-relative with a leading slash, so the sidebar
//! matchers behave identically for pages at the content root and pages
//! nested under ancestor directories. URLs are the front-matter `permalink`
//! when present, otherwise the pretty form of the path: `/a/b.md` → `/a/b/`
//! and `/a/index.md` → `/a/`.
//!
//! ## Failure Semantics
//!
//! A file with no front matter is a valid page with absent metadata (the
//! selector excludes it later for lack of a title). A front matter block
//! that fails to parse is a scan error; the scanner refuses to guess.

use crate::config::{self, SiteConfig};
use crate::frontmatter::{self, FrontMatter};
use crate::types::Page;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

/// Scan a content root into a manifest.
///
/// Pages are collected in sorted path order, so repeated scans of an
/// unchanged tree produce identical manifests.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut pages = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            pages.push(build_page(root, entry.path())?);
        }
    }

    Ok(Manifest { pages, config })
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn build_page(root: &Path, file: &Path) -> Result<Page, ScanError> {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let path = format!("/{}", rel.to_string_lossy().replace('\\', "/"));

    let content = fs::read_to_string(file)?;
    let (block, _body) = frontmatter::split(&content);
    let fm = match block {
        Some(yaml) => frontmatter::parse(yaml).map_err(|source| ScanError::FrontMatter {
            path: path.clone(),
            source,
        })?,
        None => FrontMatter::default(),
    };

    let url = fm.permalink.clone().unwrap_or_else(|| pretty_url(&path));
    Ok(Page {
        path,
        url,
        category: fm.category,
        layout: fm.layout,
        title: fm.title,
        permalink: fm.permalink,
        sidebar: fm.sidebar,
    })
}

/// Derive the pretty URL for a source path.
///
/// `/a/b.md` → `/a/b/`, `/a/index.md` → `/a/`, `/index.md` → `/`.
fn pretty_url(path: &str) -> String {
    let stem = match path.rfind('.') {
        Some(dot) if dot > path.rfind('/').unwrap_or(0) => &path[..dot],
        _ => path,
    };
    if let Some(dir) = stem.strip_suffix("/index") {
        if dir.is_empty() {
            "/".to_string()
        } else {
            format!("{dir}/")
        }
    } else {
        format!("{stem}/")
    }
}
