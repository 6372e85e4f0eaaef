//! Output types of a parse

use furlong_domain::EntrantRecord;
use serde::{Deserialize, Serialize};

/// Result of parsing one past-performance document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCard {
    /// Entrants in document order
    pub records: Vec<EntrantRecord>,

    /// Metadata about the parse
    pub metadata: ParseMetadata,
}

/// Counters describing how well the heuristics matched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseMetadata {
    /// Length of the normalized text in bytes
    pub normalized_len: usize,

    /// Entry boundaries found
    pub boundaries: usize,

    /// True when no boundary was found and the whole text became one
    /// unattributed record
    pub structural_miss: bool,

    /// Race lines across all records
    pub race_lines: usize,

    /// Race lines where nothing past the date was recovered
    pub bare_race_lines: usize,
}

impl ParsedCard {
    /// Record for a post position
    pub fn entrant(&self, post: u8) -> Option<&EntrantRecord> {
        self.records.iter().find(|r| r.post.number() == Some(post))
    }
}
