//! Configuration loading for the CLI.

use crate::cli::PresetArg;
use crate::error::{CliError, Result};
use furlong_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Start from a preset and overlay the keys set in a TOML file.
///
/// Keys missing from the file keep the preset's value. The result is
/// validated before it is returned.
pub fn load_extractor_config(path: Option<&Path>, preset: Option<PresetArg>) -> Result<ExtractorConfig> {
    let base = match preset.unwrap_or(PresetArg::Default) {
        PresetArg::Default => ExtractorConfig::default(),
        PresetArg::Strict => ExtractorConfig::strict(),
        PresetArg::Lenient => ExtractorConfig::lenient(),
    };

    let config = match path {
        Some(path) => {
            debug!("Loading extractor configuration from {}", path.display());
            let contents = fs::read_to_string(path)?;
            overlay(&base, &contents)?
        }
        None => base,
    };

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

fn overlay(base: &ExtractorConfig, contents: &str) -> Result<ExtractorConfig> {
    let overrides: toml::Table = toml::from_str(contents)?;
    let mut merged = toml::Value::try_from(base).map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(table) = merged.as_table_mut() {
        for (key, value) in overrides {
            table.insert(key, value);
        }
    }

    merged
        .try_into()
        .map_err(|e: toml::de::Error| CliError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_file_uses_preset() {
        let config = load_extractor_config(None, Some(PresetArg::Lenient)).unwrap();
        assert_eq!(config, ExtractorConfig::lenient());
        assert_eq!(load_extractor_config(None, None).unwrap(), ExtractorConfig::default());
    }

    #[test]
    fn test_file_overrides_preset() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_top_finishers = 5").unwrap();

        let config = load_extractor_config(Some(file.path()), Some(PresetArg::Strict)).unwrap();
        assert_eq!(config.max_top_finishers, 5);
        assert_eq!(config.jockey_fallback_lines, ExtractorConfig::strict().jockey_fallback_lines);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_leader_times = 9").unwrap();
        let err = load_extractor_config(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_leader_times = [").unwrap();
        let err = load_extractor_config(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_extractor_config(Some(Path::new("/nonexistent/furlong.toml")), None).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
