//! Config command implementation.

use crate::error::{CliError, Result};
use furlong_extractor::ExtractorConfig;

/// Print the effective extractor configuration.
pub fn execute_config(config: &ExtractorConfig) -> Result<()> {
    let toml = config.to_toml().map_err(CliError::Config)?;
    print!("{}", toml);
    Ok(())
}
