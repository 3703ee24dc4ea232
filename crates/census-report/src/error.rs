//! Error types for the census report pipeline.
//!
//! Loading failures are the only fatal condition of report generation and
//! are grouped under [`DataLoadError`]. [`ReportError`] wraps them together
//! with the configuration and output-file failures of the surrounding
//! pipeline.
//!
//! Errors serialize as `{code, message}` so the CLI can emit them as JSON.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the source table. Fatal; no partial result is produced.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source path does not exist.
    #[error("Source file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source exists but could not be read.
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be tokenized.
    #[error("Malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    /// A record carries the wrong number of fields.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The source holds no records at all.
    #[error("Source contains no records")]
    EmptySource,

    /// The parsed columns could not be assembled into a table.
    #[error("Failed to build table: {0}")]
    Table(#[from] polars::error::PolarsError),
}

impl DataLoadError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "SOURCE_NOT_FOUND",
            Self::Io(_) => "SOURCE_UNREADABLE",
            Self::Csv(_) => "MALFORMED_SOURCE",
            Self::FieldCount { .. } => "FIELD_COUNT_MISMATCH",
            Self::EmptySource => "EMPTY_SOURCE",
            Self::Table(_) => "TABLE_BUILD_FAILED",
        }
    }
}

/// The main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The source table could not be loaded.
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A column expected by the schema is absent or has the wrong type.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// IO error while writing outputs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ReportError>,
    },
}

impl ReportError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ReportError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for machine consumers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DataLoad(e) => e.error_code(),
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error happened while loading the source.
    pub fn is_data_load(&self) -> bool {
        match self {
            Self::DataLoad(_) => true,
            Self::WithContext { source, .. } => source.is_data_load(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for ReportError {
    fn from(e: crate::config::ConfigValidationError) -> Self {
        ReportError::InvalidConfig(e.to_string())
    }
}

impl Serialize for ReportError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ReportError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = ReportError::from(DataLoadError::EmptySource);
        assert_eq!(err.error_code(), "EMPTY_SOURCE");
        assert_eq!(
            ReportError::ColumnNotFound("age".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
    }

    #[test]
    fn test_field_count_message() {
        let err = DataLoadError::FieldCount {
            line: 3,
            expected: 15,
            found: 14,
        };
        assert_eq!(err.to_string(), "Line 3: expected 15 fields, found 14");
        assert_eq!(err.error_code(), "FIELD_COUNT_MISMATCH");
    }

    #[test]
    fn test_is_data_load() {
        assert!(ReportError::from(DataLoadError::EmptySource).is_data_load());
        assert!(
            ReportError::from(DataLoadError::EmptySource)
                .with_context("Loading")
                .is_data_load()
        );
        assert!(!ReportError::InvalidConfig("x".to_string()).is_data_load());
    }

    #[test]
    fn test_error_serialization() {
        let error = ReportError::from(DataLoadError::NotFound(PathBuf::from("adult.csv")));
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("SOURCE_NOT_FOUND"));
        assert!(json.contains("adult.csv"));
    }

    #[test]
    fn test_with_context() {
        let error = ReportError::ColumnNotFound("race".to_string()).with_context("Computing");
        assert!(error.to_string().contains("Computing"));
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
    }
}
