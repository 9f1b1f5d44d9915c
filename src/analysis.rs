// The analytics pipeline: validate -> derive -> summarize -> {risk, insights}.
//
// Every function here is pure over its input; rendering happens elsewhere.
use crate::error::AnalysisError;
use crate::insights;
use crate::loader::{self, RawTable};
use crate::metrics;
use crate::risk;
use crate::types::Analysis;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn analyze(table: &RawTable) -> Result<Analysis, AnalysisError> {
    let (records, report) = loader::validate(table)?;
    let dataset = metrics::derive_all(&records);
    let summary = metrics::summarize(&dataset)?;
    let risk = risk::classify(summary.avg_margin_pct);
    let insights = insights::select(&dataset).ok_or(AnalysisError::EmptyDataset)?;

    info!(
        total_rows = report.total_rows,
        valid_rows = report.valid_rows,
        avg_margin_pct = summary.avg_margin_pct,
        risk = %risk.tier,
        "analysis complete"
    );

    Ok(Analysis {
        dataset,
        summary,
        risk,
        insights,
    })
}

pub fn analyze_reader<R: Read>(reader: R) -> Result<Analysis, AnalysisError> {
    let table = loader::read_table(reader)?;
    analyze(&table)
}

pub fn analyze_path<P: AsRef<Path>>(path: P) -> Result<Analysis, AnalysisError> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading spreadsheet");
    let table = loader::read_table_from_path(path)?;
    analyze(&table)
}
