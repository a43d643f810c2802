//! Chapter ordering for the `NNN-name` filename convention.
//!
//! Manual chapters carry a numeric filename prefix (`01-intro.md`,
//! `02-setup.md`, `10-deploy.md`) that fixes their position in the sidebar.
//! The prefix is a leading run of decimal digits followed by a hyphen; the
//! hyphen is required, so `001.md` has no prefix and sorts with the
//! unprefixed files.
//!
//! The resulting order is total:
//! - prefixed files sort strictly before unprefixed ones
//! - prefixed files sort by integer value (`9-` before `10-`)
//! - unprefixed files sort lexicographically by base filename

use std::cmp::Ordering;

/// Extract the numeric chapter prefix from a base filename.
///
/// - `"01-intro"` → `Some(1)`
/// - `"10-deploy"` → `Some(10)`
/// - `"001"` → `None` (no hyphen)
/// - `"readme"` → `None`
///
/// A digit run too long for `u64` is treated as unprefixed rather than
/// failing the build.
pub fn number_prefix(stem: &str) -> Option<u64> {
    let digits_end = stem
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(stem.len());
    if digits_end == 0 || stem.as_bytes().get(digits_end) != Some(&b'-') {
        return None;
    }
    stem[..digits_end].parse().ok()
}

/// Compare two base filenames by chapter order.
///
/// Equal keys compare equal, so a stable sort preserves input order for
/// ties.
pub fn chapter_order(a: &str, b: &str) -> Ordering {
    match (number_prefix(a), number_prefix(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
