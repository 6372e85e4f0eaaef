//! Error types for the Extractor

use thiserror::Error;

/// Errors that can stop a parse
///
/// Missing entries, fields and row parts are not errors; they show up as
/// absent values in the output. Only a failed decode of the input document
/// aborts the pipeline.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The page source could not produce text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
