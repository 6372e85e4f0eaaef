//! Assemble document text from a page source

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use furlong_domain::PageSource;
use std::fmt::Display;
use tracing::debug;

/// Concatenate every fragment of every page, in page order
///
/// Fragments of a page are joined with `fragment_separator`, pages with
/// `page_break`. A page that fails to decode fails the whole document.
pub fn assemble_text<S>(source: &S, config: &ExtractorConfig) -> Result<String, ExtractorError>
where
    S: PageSource,
    S::Error: Display,
{
    let page_count = source.page_count();
    let mut pages = Vec::with_capacity(page_count);

    for page in 1..=page_count {
        let fragments = source
            .extract_page_text(page)
            .map_err(|e| ExtractorError::Decode(format!("page {}: {}", page, e)))?;
        pages.push(fragments.join(config.fragment_separator.as_str()));
    }

    let text = pages.join(config.page_break.as_str());
    debug!("Assembled {} pages into {} bytes", page_count, text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPdf;

    impl PageSource for BrokenPdf {
        type Error = String;

        fn page_count(&self) -> usize {
            2
        }

        fn extract_page_text(&self, page_number: usize) -> Result<Vec<String>, String> {
            match page_number {
                1 => Ok(vec!["fine".to_string()]),
                _ => Err("corrupt stream".to_string()),
            }
        }
    }

    #[test]
    fn test_pages_and_fragments_joined_in_order() {
        let pages = vec![
            vec!["3 Fast".to_string(), "Rocket (E 4)".to_string()],
            vec!["7 Silver Thunder (P 3)".to_string()],
        ];
        let text = assemble_text(&pages, &ExtractorConfig::default()).unwrap();
        assert_eq!(text, "3 Fast\nRocket (E 4)\n\n7 Silver Thunder (P 3)");
    }

    #[test]
    fn test_empty_source() {
        let pages: Vec<Vec<String>> = Vec::new();
        assert_eq!(assemble_text(&pages, &ExtractorConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_decode_failure_is_fatal() {
        let err = assemble_text(&BrokenPdf, &ExtractorConfig::default()).unwrap_err();
        match err {
            ExtractorError::Decode(msg) => assert_eq!(msg, "page 2: corrupt stream"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
