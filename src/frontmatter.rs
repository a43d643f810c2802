//! Front matter extraction and parsing.
//!
//! Documentation pages open with an optional YAML header delimited by `---`
//! lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! category: Manual
//! layout: docs-en
//! ---
//! Body text...
//! ```
//!
//! Only the keys the sidebar pipeline reads are deserialized; every other
//! key in the header is ignored. A document without a header is valid; all
//! metadata fields stay absent.

use serde::Deserialize;

/// The front-matter keys the sidebar pipeline reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub category: Option<String>,
    pub layout: Option<String>,
    pub permalink: Option<String>,
    pub sidebar: Option<bool>,
}

/// Split a document into its front matter block and body.
///
/// Returns `(Some(yaml), body)` when the document opens with a `---` line
/// that is later closed by another `---` line; `(None, content)` otherwise.
/// The delimiter lines are not part of either half.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, content);
    };
    if first.trim_end() != "---" {
        return (None, content);
    }
    let mut offset = first.len();
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &content[first.len()..offset];
            let body = &content[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }
    // Opening delimiter never closed: the whole document is body.
    (None, content)
}

/// Parse a front matter block into the known keys.
///
/// An empty block yields all-absent metadata.
pub fn parse(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extracts_block_and_body() {
        let doc = "---\ntitle: Intro\n---\nBody text.\n";
        let (block, body) = split(doc);
        assert_eq!(block, Some("title: Intro\n"));
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn split_without_header_returns_whole_document() {
        let doc = "# Just markdown\n";
        assert_eq!(split(doc), (None, doc));
    }

    #[test]
    fn split_unclosed_header_returns_whole_document() {
        let doc = "---\ntitle: Intro\nBody without closer\n";
        assert_eq!(split(doc), (None, doc));
    }

    #[test]
    fn split_handles_empty_block() {
        let doc = "---\n---\nBody\n";
        let (block, body) = split(doc);
        assert_eq!(block, Some(""));
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn split_tolerates_crlf_delimiters() {
        let doc = "---\r\ntitle: Intro\r\n---\r\nBody\r\n";
        let (block, body) = split(doc);
        assert_eq!(block, Some("title: Intro\r\n"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn parse_reads_known_keys() {
        let fm = parse("title: Intro\ncategory: Manual\nlayout: docs-en\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Intro"));
        assert_eq!(fm.category.as_deref(), Some("Manual"));
        assert_eq!(fm.layout.as_deref(), Some("docs-en"));
        assert_eq!(fm.permalink, None);
        assert_eq!(fm.sidebar, None);
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let fm = parse("title: Intro\ntoc: true\nauthor: someone\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Intro"));
    }

    #[test]
    fn parse_reads_sidebar_flag() {
        let fm = parse("title: Hidden\nsidebar: false\n").unwrap();
        assert_eq!(fm.sidebar, Some(false));
    }

    #[test]
    fn parse_empty_block_is_default() {
        let fm = parse("").unwrap();
        assert!(fm.title.is_none());
        assert!(fm.category.is_none());
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        assert!(parse("title: [unclosed\n").is_err());
    }
}
