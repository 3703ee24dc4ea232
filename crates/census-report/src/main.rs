//! CLI entry point for the census report.

use anyhow::{Result, anyhow};
use census_report::{ReportConfig, ReportDocument, ReportPipeline};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Demographic summary statistics over census data",
    long_about = "Computes ten descriptive statistics over a headerless, fifteen-column \
                  census file (age, workclass, ..., native-country, salary).\n\n\
                  EXAMPLES:\n  \
                  # Print the report for the default file\n  \
                  census-report\n\n  \
                  # Another source, saving a JSON report and the cleaned rows\n  \
                  census-report -i data/adult.data.csv -r --emit-cleaned -o results/\n\n  \
                  # Machine-readable output\n  \
                  census-report -i data/adult.data.csv --json | jq .report.race_count"
)]
struct Args {
    /// Path to the headerless census file
    #[arg(short, long, default_value = "adult.data.csv")]
    input: String,

    /// Field delimiter of the input
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Output directory for written files
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Write the JSON report document to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Write the cleaned rows to the output directory
    ///
    /// The rows will be saved as <input_name>_cleaned.csv
    #[arg(long)]
    emit_cleaned: bool,

    /// Output JSON to stdout instead of the human-readable report
    ///
    /// Disables all logging; only the final JSON document is written.
    #[arg(long)]
    json: bool,

    /// Suppress the human-readable report (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !args.delimiter.is_ascii() {
        return Err(anyhow!("Delimiter must be an ASCII character: {:?}", args.delimiter));
    }

    let config = ReportConfig::builder()
        .source(&args.input)
        .delimiter(args.delimiter as u8)
        .print_data(!args.json && !args.quiet)
        .output_dir(&args.output)
        .save_report(args.emit_report)
        .save_cleaned(args.emit_cleaned)
        .build()?;

    let result = ReportPipeline::new(config).and_then(|pipeline| pipeline.run());

    match result {
        Ok(result) => {
            if args.json {
                let document = ReportDocument::new(
                    std::path::Path::new(&args.input),
                    result.cleaning,
                    result.report,
                );
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                for path in result.report_path.iter().chain(result.cleaned_path.iter()) {
                    info!("Wrote {}", path.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            } else {
                error!("Report failed: {}", e);
            }
            Err(anyhow!("Report failed: {}", e))
        }
    }
}
