//! Configuration for the report pipeline.
//!
//! Use [`ReportConfig::builder()`] for a validated configuration with a
//! fluent API. Configurations also round-trip through JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a report run.
///
/// # Example
///
/// ```rust,ignore
/// use census_report::ReportConfig;
///
/// let config = ReportConfig::builder()
///     .source("data/adult.data.csv")
///     .print_data(false)
///     .save_report(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the headerless census table.
    /// Default: "adult.data.csv"
    pub source: PathBuf,

    /// Field delimiter of the source.
    /// Default: b','
    pub delimiter: u8,

    /// Whether to print the human-readable report block to stdout.
    /// Default: true
    pub print_data: bool,

    /// Directory for report documents and cleaned data.
    /// Default: "./outputs"
    pub output_dir: PathBuf,

    /// Whether to write the JSON report document to `output_dir`.
    /// Default: false
    pub save_report: bool,

    /// Whether to write the cleaned table as CSV to `output_dir`.
    /// Default: false
    pub save_cleaned: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("adult.data.csv"),
            delimiter: b',',
            print_data: true,
            output_dir: PathBuf::from("./outputs"),
            save_report: false,
            save_cleaned: false,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptySource);
        }

        if !self.delimiter.is_ascii()
            || matches!(self.delimiter, b'"' | b'\n' | b'\r')
        {
            return Err(ConfigValidationError::InvalidDelimiter(self.delimiter));
        }

        if (self.save_report || self.save_cleaned) && self.output_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingOutputDir);
        }

        Ok(())
    }

    /// Whether any output file is requested.
    pub fn writes_files(&self) -> bool {
        self.save_report || self.save_cleaned
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Source path must not be empty")]
    EmptySource,

    #[error("Invalid delimiter byte {0:#04x} (must be ASCII and not a quote or newline)")]
    InvalidDelimiter(u8),

    #[error("An output directory is required when writing report files")]
    MissingOutputDir,
}

/// Builder for [`ReportConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    source: Option<PathBuf>,
    delimiter: Option<u8>,
    print_data: Option<bool>,
    output_dir: Option<PathBuf>,
    save_report: Option<bool>,
    save_cleaned: Option<bool>,
}

impl ReportConfigBuilder {
    /// Set the source table path.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enable or disable console output of the report.
    pub fn print_data(mut self, print: bool) -> Self {
        self.print_data = Some(print);
        self
    }

    /// Set the output directory for written files.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Enable or disable writing the JSON report document.
    pub fn save_report(mut self, save: bool) -> Self {
        self.save_report = Some(save);
        self
    }

    /// Enable or disable writing the cleaned table.
    pub fn save_cleaned(mut self, save: bool) -> Self {
        self.save_cleaned = Some(save);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ReportConfig` or an error if validation fails.
    pub fn build(self) -> Result<ReportConfig, ConfigValidationError> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            source: self.source.unwrap_or(defaults.source),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
            print_data: self.print_data.unwrap_or(defaults.print_data),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            save_report: self.save_report.unwrap_or(defaults.save_report),
            save_cleaned: self.save_cleaned.unwrap_or(defaults.save_cleaned),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.source, PathBuf::from("adult.data.csv"));
        assert_eq!(config.delimiter, b',');
        assert!(config.print_data);
        assert!(!config.writes_files());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ReportConfig::builder()
            .source("data/census.tsv")
            .delimiter(b'\t')
            .print_data(false)
            .output_dir("reports")
            .save_report(true)
            .build()
            .unwrap();

        assert_eq!(config.source, PathBuf::from("data/census.tsv"));
        assert_eq!(config.delimiter, b'\t');
        assert!(!config.print_data);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(config.save_report);
        assert!(!config.save_cleaned);
        assert!(config.writes_files());
    }

    #[test]
    fn test_validation_empty_source() {
        let result = ReportConfig::builder().source("").build();
        assert!(matches!(result, Err(ConfigValidationError::EmptySource)));
    }

    #[test]
    fn test_validation_invalid_delimiter() {
        let result = ReportConfig::builder().delimiter(b'"').build();
        assert!(matches!(
            result,
            Err(ConfigValidationError::InvalidDelimiter(b'"'))
        ));

        let result = ReportConfig::builder().delimiter(0xE9).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_missing_output_dir() {
        let result = ReportConfig::builder()
            .output_dir("")
            .save_cleaned(true)
            .build();
        assert!(matches!(result, Err(ConfigValidationError::MissingOutputDir)));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "source": "adult.data.csv",
            "delimiter": 59,
            "print_data": false,
            "output_dir": "custom_output",
            "save_report": true,
            "save_cleaned": false
        }"#;

        let config: ReportConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.delimiter, b';');
        assert!(!config.print_data);
        assert!(config.save_report);
        assert_eq!(config.output_dir.to_str().unwrap(), "custom_output");
        assert!(config.validate().is_ok());
    }
}
