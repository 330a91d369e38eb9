//! Analysis configuration.
//!
//! Every numeric knob of the pipeline lives here: scoring threshold,
//! evidence caps, quote truncation, retention limits, and summary lengths.
//! Defaults reproduce the canonical rule set; a JSON file may override any
//! subset. Pattern tables are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Winning document type must score at least this much, else `unknown`.
    pub classifier_min_score: u32,
    /// Evidence entries kept for the winning document type.
    pub classifier_max_evidence: usize,
    /// Consecutive blank lines that end a section.
    pub section_max_blank_lines: usize,
    /// Sections quoted as evidence per field.
    pub field_max_evidence: usize,
    /// Section lines joined into one evidence quote.
    pub quote_max_lines: usize,
    /// Quotes longer than this (in characters) are cut and marked with `…`.
    pub quote_max_chars: usize,
    /// Field evidence entries copied onto a signal.
    pub signal_max_evidence: usize,
    /// Retention of at least this many years is flagged as long.
    pub retention_long_years: u64,
    /// Retention of at least this many months is flagged as long.
    pub retention_long_months: u64,
    /// Items shown per seven-line slot before the "외 N개" suffix.
    pub summary_max_items: usize,
    /// Items shown in the "where" slot.
    pub where_max_items: usize,
    /// Signal titles quoted in the risk summary.
    pub risk_summary_titles: usize,
    /// Detected issuer names are cut to this many characters.
    pub entity_max_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            classifier_min_score: 2,
            classifier_max_evidence: 3,
            section_max_blank_lines: 2,
            field_max_evidence: 3,
            quote_max_lines: 3,
            quote_max_chars: 200,
            signal_max_evidence: 2,
            retention_long_years: 3,
            retention_long_months: 36,
            summary_max_items: 5,
            where_max_items: 3,
            risk_summary_titles: 3,
            entity_max_chars: 80,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════

impl AnalysisConfig {
    /// Parse a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded analysis config");
        Ok(config)
    }

    /// Caps, lengths and retention limits must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("classifier_max_evidence", self.classifier_max_evidence),
            ("section_max_blank_lines", self.section_max_blank_lines),
            ("field_max_evidence", self.field_max_evidence),
            ("quote_max_lines", self.quote_max_lines),
            ("quote_max_chars", self.quote_max_chars),
            ("signal_max_evidence", self.signal_max_evidence),
            ("summary_max_items", self.summary_max_items),
            ("where_max_items", self.where_max_items),
            ("entity_max_chars", self.entity_max_chars),
        ];
        for (name, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be greater than 0")));
            }
        }
        if self.retention_long_years == 0 || self.retention_long_months == 0 {
            return Err(ConfigError::Invalid(
                "retention limits must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
