//! PDF page source backed by lopdf.

use crate::error::{CliError, Result};
use furlong_domain::PageSource;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// A loaded PDF whose pages are decoded on demand.
pub struct PdfSource {
    doc: Document,
    page_numbers: Vec<u32>,
}

impl PdfSource {
    /// Load a PDF from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let doc = Document::load(path)
            .map_err(|e| CliError::Pdf(format!("Failed to load {}: {}", path.display(), e)))?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!(page_count = page_numbers.len(), "Loaded PDF");
        Ok(Self { doc, page_numbers })
    }
}

impl PageSource for PdfSource {
    type Error = String;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// Each extracted text line becomes one fragment.
    fn extract_page_text(&self, page_number: usize) -> std::result::Result<Vec<String>, Self::Error> {
        let Some(&number) = page_number.checked_sub(1).and_then(|i| self.page_numbers.get(i)) else {
            return Err(format!("page {} not found", page_number));
        };
        let text = self.doc.extract_text(&[number]).map_err(|e| e.to_string())?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
