//! Configuration management and validation.
//!
//! Provides the settings that shape a conversion run: where the JSON output
//! goes, how it is formatted, how failures are handled and how overlapping
//! header rules resolve the Std_Dev column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_JSON_INDENT, DEFAULT_OUTPUT_EXTENSION};
use crate::{Error, Result};

/// How the two header rules combine when both fire on the same `#Shot` row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderPolicy {
    /// A Std_Dev column resolved by the `#Shot`+`Std_Dev` rule is kept
    #[default]
    KeepStdDev,
    /// The generic header rule runs last and always clears Std_Dev
    LastRuleWins,
}

/// Settings for extracting a single export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub header_policy: HeaderPolicy,
}

/// Settings for writing the converted records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension replacing the input extension
    pub extension: String,

    /// Indent width of the JSON document (0 = compact)
    pub json_indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            json_indent: DEFAULT_JSON_INDENT,
        }
    }
}

/// Top-level configuration for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub extractor: ExtractorConfig,
    pub output: OutputConfig,

    /// Continue with the remaining files after a failure
    pub keep_going: bool,
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let extension = self.output.extension.trim();
        if extension.is_empty() {
            return Err(Error::configuration("Output extension must not be empty"));
        }
        if extension.contains(['/', '\\']) {
            return Err(Error::configuration(format!(
                "Output extension must not contain path separators: {}",
                extension
            )));
        }
        if extension.eq_ignore_ascii_case(crate::constants::INPUT_EXTENSION) {
            return Err(Error::configuration(
                "Output extension must differ from the input extension",
            ));
        }
        if self.output.json_indent > 16 {
            return Err(Error::configuration(format!(
                "JSON indent of {} exceeds the maximum of 16",
                self.output.json_indent
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
