//! Pipeline module.
//!
//! Runs load → clean → compute over one census source, then prints and
//! writes the outputs the configuration asks for.

mod stage;

pub use stage::ReportStage;

use crate::cleaner::DataCleaner;
use crate::config::ReportConfig;
use crate::error::{Result, ResultExt};
use crate::loader::CensusLoader;
use crate::reporting::{Report, ReportDocument, ReportGenerator, input_stem};
use crate::statistics::CensusStatistics;
use crate::types::PipelineResult;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// The census report pipeline.
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the pipeline to completion.
    ///
    /// Load failures abort before any statistic is computed.
    pub fn run(&self) -> Result<PipelineResult> {
        let start = Instant::now();
        let config = &self.config;

        log_stage(ReportStage::Loading);
        info!("Loading census data from: {}", config.source.display());
        let raw = CensusLoader::new(config.delimiter).load_path(&config.source)?;
        info!("Loaded {} rows", raw.height());

        log_stage(ReportStage::Cleaning);
        let (table, cleaning) = DataCleaner::clean(raw).context("Cleaning census data")?;
        info!(
            "{} of {} rows retained",
            cleaning.rows_retained, cleaning.rows_loaded
        );

        log_stage(ReportStage::Computing);
        let report = CensusStatistics::compute(&table).context("Computing statistics")?;

        if config.print_data {
            print!("{}", report);
        }

        let mut report_path = None;
        let mut cleaned_path = None;

        if config.writes_files() {
            log_stage(ReportStage::Writing);
            let generator = ReportGenerator::new(config.output_dir.clone());
            let stem = input_stem(&config.source);

            if config.save_report {
                let document =
                    ReportDocument::new(&config.source, cleaning.clone(), report.clone());
                report_path = Some(generator.write_report_to_file(&document, &stem)?);
            }

            if config.save_cleaned {
                cleaned_path = Some(generator.write_cleaned_dataset(table.frame(), &stem)?);
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!("Report generated in {}ms", duration_ms);

        Ok(PipelineResult {
            report,
            cleaning,
            duration_ms,
            report_path,
            cleaned_path,
        })
    }
}

fn log_stage(stage: ReportStage) {
    info!(
        "[{}/{}] {}",
        stage.step(),
        ReportStage::COUNT,
        stage.display_name()
    );
}

/// Generate the census report for a source file.
///
/// When `emit_to_console` is set, the report block is printed to stdout.
///
/// # Example
///
/// ```rust,ignore
/// let report = census_report::generate_report("adult.data.csv", true)?;
/// assert_eq!(report.race_count.len(), 5);
/// ```
pub fn generate_report(source: impl AsRef<Path>, emit_to_console: bool) -> Result<Report> {
    let config = ReportConfig::builder()
        .source(source.as_ref())
        .print_data(emit_to_console)
        .build()?;

    Ok(ReportPipeline::new(config)?.run()?.report)
}
