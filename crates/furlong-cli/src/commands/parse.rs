//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::input::read_document;
use crate::output::Formatter;
use furlong_extractor::{CardParser, ExtractorConfig, ParsedCard};
use tracing::info;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &ExtractorConfig, formatter: &Formatter) -> Result<()> {
    let parser = CardParser::new(config.clone())?;
    let text = read_document(&args.input, config)?;
    let card = parser.parse(&text);
    info!("Parsed {} record(s)", card.records.len());

    let card = match args.entrant {
        Some(post) => only_entrant(card, post)?,
        None => card,
    };

    println!("{}", formatter.format_card(&card, args.races)?);
    Ok(())
}

/// Keep only the record at `post`.
pub fn only_entrant(card: ParsedCard, post: u8) -> Result<ParsedCard> {
    let ParsedCard { records, metadata } = card;
    let records: Vec<_> = records
        .into_iter()
        .filter(|r| r.post.number() == Some(post))
        .collect();

    if records.is_empty() {
        return Err(CliError::InvalidInput(format!("No entrant at post {}", post)));
    }
    Ok(ParsedCard { records, metadata })
}
