//! Entry boundary location
//!
//! Every entrant's data starts with its post position, the horse name and an
//! opening parenthesis for the running-style tag, e.g. `7 Silver Thunder (P 3)`.
//! That marker is the least ambiguous recurring pattern in the layout, so the
//! locator scans line starts for it.

use furlong_domain::EntryBoundary;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Post 1-20, 1-3 whitespace characters, a name run that stays on its line
/// and starts with a letter, optional whitespace, then `(`.
static ENTRY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(20|1[0-9]|[1-9])\s{1,3}([A-Za-z][A-Za-z0-9'’./\- ]*?)\s*\(")
        .expect("valid entry marker regex")
});

/// Find every entry boundary in normalized text
///
/// Offsets are strictly increasing. An empty result means the text has no
/// structural anchor and the caller should fall back to a single
/// unattributed record.
pub fn find_boundaries(text: &str) -> Vec<EntryBoundary> {
    let mut boundaries: Vec<EntryBoundary> = Vec::new();

    for caps in ENTRY_MARKER.captures_iter(text) {
        let (Some(post), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        if boundaries.last().is_some_and(|b| b.offset >= post.start()) {
            continue;
        }

        let Ok(candidate_post) = post.as_str().parse::<u8>() else {
            continue;
        };

        if let Some(boundary) = EntryBoundary::new(post.start(), candidate_post, name.as_str().trim()) {
            boundaries.push(boundary);
        }
    }

    debug!(boundaries = boundaries.len(), "located entry boundaries");
    boundaries
}
