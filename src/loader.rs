// Record validation: the spreadsheet schema gate and per-row numeric coercion.
use crate::error::{AnalysisError, ParseError};
use crate::types::Record;
use crate::util::parse_f64_safe;
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const SALES_COLUMN: &str = "Satis";
pub const COST_COLUMN: &str = "Maliyet";

/// Extensions opened as workbooks; anything else is read as CSV.
pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Rows of named string cells, exactly as read from the spreadsheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new<H, S>(headers: H, rows: Vec<Vec<String>>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Position of the first header equal to `name` after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub valid_rows: usize,
}

/// Read CSV text into a `RawTable`. Short or long rows are kept as-is; a
/// short row simply has no cell for the missing columns.
pub fn read_table<R: Read>(reader: R) -> Result<RawTable, AnalysisError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable { headers, rows })
}

pub fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
        .unwrap_or(false)
}

/// Cell text as the validator sees it. Numbers keep their value, text stays
/// text; empty, error and date cells become blank so the row is dropped.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// First row of the used range is the header; the rest are data rows.
pub fn table_from_range(range: &Range<Data>) -> RawTable {
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    RawTable {
        headers,
        rows: rows.collect(),
    }
}

/// Read the first sheet of a workbook.
pub fn read_workbook_from_path<P: AsRef<Path>>(path: P) -> Result<RawTable, AnalysisError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(ParseError::NoSheet)??;
    Ok(table_from_range(&range))
}

/// Pick the reader from the file extension.
pub fn read_table_from_path<P: AsRef<Path>>(path: P) -> Result<RawTable, AnalysisError> {
    let path = path.as_ref();
    if is_workbook_path(path) {
        debug!(path = %path.display(), "reading workbook");
        return read_workbook_from_path(path);
    }
    let file = File::open(path).map_err(csv::Error::from)?;
    read_table(file)
}

/// Check the schema, then keep every row whose sales and cost both coerce.
///
/// Rows that fail coercion are dropped without any per-row diagnostic.
pub fn validate(table: &RawTable) -> Result<(Vec<Record>, LoadReport), AnalysisError> {
    let sales_idx = table.column_index(SALES_COLUMN);
    let cost_idx = table.column_index(COST_COLUMN);
    let (sales_idx, cost_idx) = match (sales_idx, cost_idx) {
        (Some(s), Some(c)) => (s, c),
        _ => {
            let missing = [(SALES_COLUMN, sales_idx), (COST_COLUMN, cost_idx)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(AnalysisError::Schema { missing });
        }
    };
    debug!(sales_idx, cost_idx, "resolved required columns");

    let records: Vec<Record> = table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, cells)| {
            let sales = parse_f64_safe(cells.get(sales_idx).map(String::as_str))?;
            let cost = parse_f64_safe(cells.get(cost_idx).map(String::as_str))?;
            Some(Record {
                row: i + 1,
                sales,
                cost,
            })
        })
        .collect();

    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let report = LoadReport {
        total_rows: table.rows.len(),
        valid_rows: records.len(),
    };
    Ok((records, report))
}
