use crate::loader::{COST_COLUMN, SALES_COLUMN};
use crate::types::SampleRow;
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(
    path: P,
    value: &T,
) -> Result<(), serde_json::Error> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s).map_err(serde_json::Error::io)
}

/// Single-sheet workbook with the `Satis`/`Maliyet` header and one row per
/// sample record, stored as numeric cells.
pub fn write_sample_workbook<P: AsRef<Path>>(
    path: P,
    rows: &[SampleRow],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, SALES_COLUMN)?;
    worksheet.write_string(0, 1, COST_COLUMN)?;
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.sales)?;
        worksheet.write_number(r, 1, row.cost)?;
    }
    workbook.save(path.as_ref())?;
    Ok(())
}

pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}

/// Render rows as a Markdown table, or `(no rows)` when there are none.
pub fn markdown_table<T>(rows: &[T]) -> String
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows.to_vec()).with(Style::markdown()).to_string()
}
