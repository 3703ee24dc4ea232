//! Report values and report outputs.
//!
//! [`Report`] holds the ten statistics and renders the console block.
//! [`ReportDocument`] adds run metadata for JSON output, and
//! [`ReportGenerator`] writes documents and cleaned tables to disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use census_report::reporting::{ReportDocument, ReportGenerator};
//!
//! let document = ReportDocument::new(&source, result.cleaning, result.report);
//! println!("{}", serde_json::to_string_pretty(&document)?);
//!
//! let generator = ReportGenerator::new(PathBuf::from("outputs"));
//! generator.write_report_to_file(&document, "adult")?;
//! ```

mod generator;
mod report;

pub use generator::{ReportDocument, ReportGenerator, input_stem};
pub use report::{NO_VALUE, Report};
