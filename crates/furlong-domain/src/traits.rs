//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the extraction pipeline and the
//! things it does not do itself. Implementations live in other crates.

/// A decoded document that yields text page by page
///
/// Implemented by whatever turns a binary PDF into text fragments. The
/// pipeline only reads pages in order and concatenates them.
pub trait PageSource {
    /// Error type for decode operations
    type Error;

    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Text fragments of a page, in reading order (pages are 1-based)
    fn extract_page_text(&self, page_number: usize) -> Result<Vec<String>, Self::Error>;
}

/// Jockey display name to rating lookup
///
/// Consulted by scoring consumers. The extraction pipeline never loads or
/// queries it.
pub trait JockeyRatings {
    /// Rating for a jockey, if known
    fn rating(&self, jockey_name: &str) -> Option<f64>;
}

impl JockeyRatings for std::collections::HashMap<String, f64> {
    fn rating(&self, jockey_name: &str) -> Option<f64> {
        self.get(jockey_name).copied()
    }
}

/// In-memory page source, one `Vec` of fragments per page
impl PageSource for Vec<Vec<String>> {
    type Error = String;

    fn page_count(&self) -> usize {
        self.len()
    }

    fn extract_page_text(&self, page_number: usize) -> Result<Vec<String>, Self::Error> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.get(idx))
            .cloned()
            .ok_or_else(|| format!("page {} out of range", page_number))
    }
}
