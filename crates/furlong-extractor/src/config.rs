//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Number of call slots a race line has for leader times
const CALL_TIME_SLOTS: usize = 4;

/// Limits for the positional heuristics
///
/// The defaults match the layout of common past-performance sheets. Missing
/// keys in a TOML file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Lines scanned from the top of a span for the all-caps jockey fallback
    pub jockey_fallback_lines: usize,

    /// Consecutive lines a sex code and the age after it may span
    pub sex_age_max_lines: usize,

    /// Lines at least this long are never workout lines
    pub max_workout_line_len: usize,

    /// Leader call-time slots kept per race line, the finish included
    pub max_leader_times: usize,

    /// Running-position tokens captured per race line
    pub max_call_positions: usize,

    /// Names kept as top finishers per race line
    pub max_top_finishers: usize,

    /// Inserted between the text of consecutive pages
    pub page_break: String,

    /// Inserted between the fragments of one page
    pub fragment_separator: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jockey_fallback_lines == 0 {
            return Err("jockey_fallback_lines must be greater than 0".to_string());
        }
        if self.sex_age_max_lines == 0 {
            return Err("sex_age_max_lines must be greater than 0".to_string());
        }
        if self.max_workout_line_len == 0 {
            return Err("max_workout_line_len must be greater than 0".to_string());
        }
        if self.max_leader_times == 0 || self.max_leader_times > CALL_TIME_SLOTS {
            return Err(format!(
                "max_leader_times must be between 1 and {}",
                CALL_TIME_SLOTS
            ));
        }
        if self.max_call_positions == 0 {
            return Err("max_call_positions must be greater than 0".to_string());
        }
        if self.max_top_finishers == 0 {
            return Err("max_top_finishers must be greater than 0".to_string());
        }
        if !self.page_break.contains('\n') {
            return Err("page_break must contain a line break".to_string());
        }
        if self.fragment_separator.is_empty() {
            return Err("fragment_separator cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            jockey_fallback_lines: 10,
            sex_age_max_lines: 3,
            max_workout_line_len: 200,
            max_leader_times: 4,
            max_call_positions: 5,
            max_top_finishers: 3,
            page_break: "\n\n".to_string(),
            fragment_separator: "\n".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: narrow fallback windows, fewer false positives
    pub fn strict() -> Self {
        Self {
            jockey_fallback_lines: 5,
            sex_age_max_lines: 1,
            max_workout_line_len: 120,
            max_leader_times: 4,
            max_call_positions: 5,
            max_top_finishers: 3,
            ..Self::default()
        }
    }

    /// Lenient preset: wide fallback windows for badly broken extractions
    pub fn lenient() -> Self {
        Self {
            jockey_fallback_lines: 20,
            sex_age_max_lines: 5,
            max_workout_line_len: 400,
            max_leader_times: 4,
            max_call_positions: 6,
            max_top_finishers: 4,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
