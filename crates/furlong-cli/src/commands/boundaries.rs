//! Boundaries command implementation.

use crate::cli::InputArgs;
use crate::error::Result;
use crate::input::read_document;
use crate::output::Formatter;
use furlong_extractor::{find_boundaries, normalize, ExtractorConfig};

/// Execute the boundaries command.
pub fn execute_boundaries(args: InputArgs, config: &ExtractorConfig, formatter: &Formatter) -> Result<()> {
    let text = normalize(&read_document(&args, config)?);
    let boundaries = find_boundaries(&text);
    println!("{}", formatter.format_boundaries(&boundaries)?);
    Ok(())
}
