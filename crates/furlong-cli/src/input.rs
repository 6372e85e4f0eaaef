//! Reading the input document.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use crate::pdf::PdfSource;
use furlong_extractor::{assemble_text, ExtractorConfig};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Whether the input should be decoded as PDF.
pub fn is_pdf(args: &InputArgs) -> bool {
    args.pdf
        || args
            .input
            .as_deref()
            .and_then(Path::extension)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Raw document text: decoded PDF pages, a text file or stdin.
pub fn read_document(args: &InputArgs, config: &ExtractorConfig) -> Result<String> {
    if is_pdf(args) {
        let Some(path) = args.input.as_deref() else {
            return Err(CliError::InvalidInput("--pdf needs an input file".to_string()));
        };
        let source = PdfSource::open(path)?;
        return Ok(assemble_text(&source, config)?);
    }

    match args.input.as_deref() {
        Some(path) => {
            debug!("Reading text from {}", path.display());
            let bytes = fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            debug!("Reading text from stdin");
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}
