use crate::telemetry::TelemetryError;
use thiserror::Error;

/// Fatal outcomes of one analysis run. There is no partial-result mode.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("input could not be read as a table: {0}")]
    Parse(#[from] ParseError),
    #[error("no valid rows: Satis and Maliyet must be numeric in at least one row")]
    EmptyDataset,
}

/// Why a file could not be turned into rows of cells.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no sheets")]
    NoSheet,
}

impl From<csv::Error> for AnalysisError {
    fn from(value: csv::Error) -> Self {
        Self::Parse(ParseError::Csv(value))
    }
}

impl From<calamine::Error> for AnalysisError {
    fn from(value: calamine::Error) -> Self {
        Self::Parse(ParseError::Workbook(value))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("json write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}
