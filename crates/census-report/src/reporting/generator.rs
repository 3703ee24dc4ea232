use super::Report;
use crate::error::Result;
use crate::types::CleaningSummary;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// Report Document
// ============================================================================

/// A report together with the metadata of the run that produced it.
///
/// Used for both JSON output (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// What the cleaning pass removed
    pub cleaning: CleaningSummary,
    /// The statistics
    pub report: Report,
}

impl ReportDocument {
    pub fn new(input_file: &Path, cleaning: CleaningSummary, report: Report) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.display().to_string(),
            cleaning,
            report,
        }
    }
}

// ============================================================================
// Report Generator
// ============================================================================

/// Writes report documents and cleaned tables to an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
        }
    }
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Write a report document as pretty JSON.
    ///
    /// If `report_base_name` is "adult", the file is "adult_report.json".
    pub fn write_report_to_file(
        &self,
        document: &ReportDocument,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(document)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }

    /// Write the cleaned table as headerless CSV, in source column order.
    pub fn write_cleaned_dataset(&self, df: &DataFrame, base_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let output_path = self.output_dir.join(format!("{}_cleaned.csv", base_name));
        let mut file = File::create(&output_path)?;
        let mut df = df.clone();

        CsvWriter::new(&mut file)
            .include_header(false)
            .with_separator(b',')
            .finish(&mut df)?;

        info!("Cleaned dataset saved: {}", output_path.display());

        Ok(output_path)
    }
}

/// File stem of the input, used to name output files.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("census")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_stem() {
        assert_eq!(input_stem(Path::new("data/adult.data.csv")), "adult.data");
        assert_eq!(input_stem(Path::new("adult")), "adult");
        assert_eq!(input_stem(Path::new("")), "census");
    }

    #[test]
    fn test_document_metadata() {
        let report = Report {
            race_count: Vec::new(),
            average_age_men: None,
            percentage_bachelors: None,
            higher_education_rich: None,
            lower_education_rich: None,
            min_work_hours: None,
            rich_percentage: None,
            highest_earning_country: None,
            highest_earning_country_percentage: None,
            top_in_occupation: None,
        };
        let doc = ReportDocument::new(Path::new("adult.csv"), CleaningSummary::default(), report);
        assert_eq!(doc.input_file, "adult.csv");
        assert_eq!(doc.generated_at.len(), "2024-01-01 00:00:00".len());
    }
}
