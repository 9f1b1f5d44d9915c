use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_PREVIEW_ROWS: usize = 10;
pub const DEFAULT_SAMPLE_FILE: &str = "satis.xlsx";

#[derive(Parser, Debug)]
#[command(
    name = "profit_report",
    about = "Analyze a sales/cost spreadsheet and produce a profitability and risk report",
    version
)]
pub struct Cli {
    /// Log level or filter directive used when RUST_LOG is unset
    #[arg(long, global = true, env = "PROFIT_REPORT_LOG", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze an Excel workbook or CSV file with Satis and Maliyet columns
    Analyze(AnalyzeArgs),
    /// Write the demo spreadsheet
    Sample {
        /// Destination file; a workbook unless the extension is not a workbook one
        #[arg(default_value = DEFAULT_SAMPLE_FILE)]
        path: PathBuf,
    },
    /// Menu-driven session (default command)
    Interactive,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Workbook (.xlsx, .xls, ...) or CSV file to analyze
    pub input: PathBuf,
    /// Write the Markdown report document to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Write the full analysis as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Write the derived dataset (profit and margin per row) as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
    /// Number of dataset rows shown in the dashboard preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Cli {
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_level: self.log_level.clone(),
        }
    }
}
