//! The card parser: the whole pipeline from raw text to records

use crate::boundary::find_boundaries;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fields::FieldExtractors;
use crate::normalize::normalize_document;
use crate::slicer::slice;
use crate::source::assemble_text;
use crate::types::{ParseMetadata, ParsedCard};
use furlong_domain::{EntrantRecord, PageSource, Post, RawDocument};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Turns past-performance text into entrant records
///
/// Parsing is pure: the same input always yields the same card, and no
/// state is kept between calls.
#[derive(Debug, Clone)]
pub struct CardParser {
    config: ExtractorConfig,
    fields: FieldExtractors,
}

impl CardParser {
    /// Create a parser, rejecting invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let fields = FieldExtractors::new(&config);
        Ok(Self { config, fields })
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Normalize `raw` and parse it
    ///
    /// Never fails. A document without entry markers becomes a single
    /// unattributed record holding the whole normalized text.
    pub fn parse(&self, raw: &str) -> ParsedCard {
        self.parse_document(&normalize_document(raw))
    }

    /// Parse text that is already normalized
    pub fn parse_document(&self, document: &RawDocument) -> ParsedCard {
        let text = document.text();
        debug!("Normalized text length: {} bytes", text.len());

        let boundaries = find_boundaries(text);
        let mut metadata = ParseMetadata {
            normalized_len: text.len(),
            boundaries: boundaries.len(),
            ..ParseMetadata::default()
        };

        let records: Vec<EntrantRecord> = if boundaries.is_empty() {
            warn!("No entry markers found; treating the whole text as one unattributed record");
            metadata.structural_miss = true;
            vec![self.fields.extract(Post::Unattributed, text, None)]
        } else {
            let slices = slice(text, &boundaries);
            debug!("Discarded {} bytes before the first entry", slices.prefix.len());
            slices
                .spans
                .iter()
                .map(|span| {
                    let boundary = &span.boundary;
                    let record = self.fields.extract(
                        Post::Assigned(boundary.candidate_post),
                        span.text,
                        Some(boundary.candidate_name.as_str()),
                    );
                    debug!(
                        "Entry {} '{}': {} race lines, {} workouts",
                        boundary.candidate_post,
                        boundary.candidate_name,
                        record.race_history.len(),
                        record.workouts.len()
                    );
                    record
                })
                .collect()
        };

        for line in records.iter().flat_map(|r| &r.race_history) {
            metadata.race_lines += 1;
            if line.is_bare() {
                metadata.bare_race_lines += 1;
            }
        }

        info!(
            "Parsed {} entrants with {} race lines ({} bare)",
            records.len(),
            metadata.race_lines,
            metadata.bare_race_lines
        );

        ParsedCard { records, metadata }
    }

    /// Decode every page of `source`, then parse the assembled text
    ///
    /// A decode failure aborts before any parsing happens.
    pub fn parse_source<S>(&self, source: &S) -> Result<ParsedCard, ExtractorError>
    where
        S: PageSource,
        S::Error: Display,
    {
        let text = assemble_text(source, &self.config)?;
        Ok(self.parse(&text))
    }
}

impl Default for CardParser {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        let fields = FieldExtractors::new(&config);
        Self { config, fields }
    }
}
