use crate::error::AnalysisError;
use crate::types::{DerivedRecord, Record, Summary};
use crate::util::average;

/// Profit and margin for one record. A row with exactly zero sales gets a
/// zero margin whatever its cost.
pub fn derive(record: &Record) -> DerivedRecord {
    let profit = record.sales - record.cost;
    let margin_pct = if record.sales == 0.0 {
        0.0
    } else {
        (profit / record.sales) * 100.0
    };
    DerivedRecord {
        row: record.row,
        sales: record.sales,
        cost: record.cost,
        profit,
        margin_pct,
    }
}

pub fn derive_all(records: &[Record]) -> Vec<DerivedRecord> {
    records.iter().map(derive).collect()
}

/// Totals and the mean margin. Zero-guarded rows still count toward the
/// mean's denominator.
pub fn summarize(dataset: &[DerivedRecord]) -> Result<Summary, AnalysisError> {
    let margins: Vec<f64> = dataset.iter().map(|r| r.margin_pct).collect();
    let avg_margin_pct = average(&margins).ok_or(AnalysisError::EmptyDataset)?;
    Ok(Summary {
        row_count: dataset.len(),
        total_sales: dataset.iter().map(|r| r.sales).sum(),
        total_profit: dataset.iter().map(|r| r.profit).sum(),
        avg_margin_pct,
    })
}
