use crate::reporting::Report;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A category together with the number of rows holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// What the cleaning pass did to the loaded table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub rows_loaded: usize,
    pub rows_retained: usize,
    pub rows_dropped: usize,
    /// Numeric fields that were present but failed to parse.
    pub unparseable_numeric: usize,
}

impl CleaningSummary {
    pub fn rows_dropped_percentage(&self) -> f32 {
        if self.rows_loaded == 0 {
            0.0
        } else {
            (self.rows_dropped as f32 / self.rows_loaded as f32) * 100.0
        }
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub report: Report,
    pub cleaning: CleaningSummary,
    pub duration_ms: u64,
    pub report_path: Option<PathBuf>,
    pub cleaned_path: Option<PathBuf>,
}
