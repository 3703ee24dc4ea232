//! Census Report Library
//!
//! Descriptive statistics over census-style demographic data, built with
//! Rust and Polars.
//!
//! # Overview
//!
//! A report run is a single batch pass over one headerless, fifteen-column
//! source file:
//!
//! - **Loading**: Parse the fixed schema, trimming fields and nulling missing markers
//! - **Cleaning**: Coerce `age` and `hours-per-week`, drop every incomplete row
//! - **Statistics**: Compute the ten report statistics over the cleaned table
//! - **Reporting**: Print the report block, emit JSON, write the cleaned table
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use census_report::generate_report;
//!
//! let report = generate_report("adult.data.csv", true)?;
//! println!("Average age of men: {:?}", report.average_age_men);
//! ```
//!
//! # Configuration
//!
//! Use [`ReportConfig`] with [`ReportPipeline`] for control over the
//! delimiter, console output and written files:
//!
//! ```rust,ignore
//! use census_report::{ReportConfig, ReportPipeline};
//!
//! let config = ReportConfig::builder()
//!     .source("data/adult.data.csv")
//!     .print_data(false)
//!     .output_dir("outputs")
//!     .save_report(true)
//!     .build()?;
//!
//! let result = ReportPipeline::new(config)?.run()?;
//! println!("{} rows dropped", result.cleaning.rows_dropped);
//! ```
//!
//! # Undefined statistics
//!
//! A statistic over an empty subset (no men, no rows from India, nothing left
//! after cleaning) is `None` rather than an error. The only fatal condition
//! is a [`DataLoadError`].

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reporting;
pub mod schema;
pub mod statistics;
pub mod table;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::DataCleaner;
pub use config::{ConfigValidationError, ReportConfig, ReportConfigBuilder};
pub use error::{DataLoadError, ReportError, Result as ReportResult, ResultExt};
pub use loader::CensusLoader;
pub use pipeline::{ReportPipeline, ReportStage, generate_report};
pub use reporting::{NO_VALUE, Report, ReportDocument, ReportGenerator};
pub use statistics::{CensusStatistics, CountryShare};
pub use table::CensusTable;
pub use types::{CategoryCount, CleaningSummary, PipelineResult};
pub use utils::{is_missing_marker, mode, parse_numeric, percentage, round_half_even, safe_ratio, value_counts};
