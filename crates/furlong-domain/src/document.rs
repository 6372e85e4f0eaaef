//! Normalized documents and the entry boundaries found inside them

use serde::{Deserialize, Serialize};

/// Lowest post position a track field can use
pub const MIN_POST: u8 = 1;

/// Highest post position a track field can use (fields cap at 20 entrants)
pub const MAX_POST: u8 = 20;

/// The normalized text stream of one input document
///
/// Created once by the normalizer and never mutated afterwards. Every later
/// stage borrows from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    /// Wrap already-normalized text
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// The normalized text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the normalized text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when normalization left nothing behind
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Start of one entrant's data inside a [`RawDocument`]
///
/// Boundaries are produced in strictly increasing `offset` order and a post
/// outside `MIN_POST..=MAX_POST` is never a boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryBoundary {
    /// Byte offset of the post number in the normalized text
    pub offset: usize,

    /// Post position read from the marker
    pub candidate_post: u8,

    /// Horse name read from the marker, trimmed
    pub candidate_name: String,
}

impl EntryBoundary {
    /// Create a boundary, rejecting posts outside the valid range
    pub fn new(offset: usize, candidate_post: u8, candidate_name: impl Into<String>) -> Option<Self> {
        if !Self::is_valid_post(candidate_post) {
            return None;
        }
        Some(Self {
            offset,
            candidate_post,
            candidate_name: candidate_name.into(),
        })
    }

    /// Whether `post` is a usable post position
    pub fn is_valid_post(post: u8) -> bool {
        (MIN_POST..=MAX_POST).contains(&post)
    }
}
