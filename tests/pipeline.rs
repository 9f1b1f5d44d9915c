use approx::assert_relative_eq;
use profit_report::loader::{read_table_from_path, RawTable};
use profit_report::types::ExportRow;
use profit_report::{analyze, analyze_path, output, reports, AnalysisError, RiskTier};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn sheet(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write sheet");
    file
}

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().copied(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn sample_spreadsheet_end_to_end() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("satis.csv");
    output::write_csv(&input, &reports::sample_rows()).expect("sample written");

    let analysis = analyze_path(&input).expect("sample analyzes");
    assert_eq!(analysis.dataset.len(), 3);
    assert_relative_eq!(analysis.summary.total_sales, 4500.0);
    assert_relative_eq!(analysis.summary.total_profit, 1800.0);
    assert_relative_eq!(analysis.summary.avg_margin_pct, 40.0, epsilon = 1e-9);
    assert_eq!(analysis.risk.tier, RiskTier::Low);
    assert_eq!(analysis.insights.best_profit_row.row, 3);
    assert_eq!(analysis.insights.worst_margin_row.row, 1);
}

#[test]
fn sample_workbook_end_to_end() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("satis.xlsx");
    output::write_sample_workbook(&input, &reports::sample_rows()).expect("workbook written");

    let analysis = analyze_path(&input).expect("workbook analyzes");
    let profits: Vec<f64> = analysis.dataset.iter().map(|r| r.profit).collect();
    assert_eq!(profits, vec![400.0, 600.0, 800.0]);
    assert_relative_eq!(analysis.summary.total_sales, 4500.0);
    assert_relative_eq!(analysis.summary.total_profit, 1800.0);
    assert_relative_eq!(analysis.summary.avg_margin_pct, 40.0, epsilon = 1e-9);
    assert_eq!(analysis.risk.tier, RiskTier::Low);
    assert_eq!(analysis.insights.best_profit_row.row, 3);
    assert_eq!(analysis.insights.worst_margin_row.row, 1);
}

#[test]
fn workbook_text_and_blank_cells_drop_rows() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("mixed.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Urun").expect("cell");
    sheet.write_string(0, 1, "Satis").expect("cell");
    sheet.write_string(0, 2, "Maliyet").expect("cell");
    sheet.write_string(1, 0, "A").expect("cell");
    sheet.write_number(1, 1, 1000.0).expect("cell");
    sheet.write_number(1, 2, 600.0).expect("cell");
    sheet.write_string(2, 0, "B").expect("cell");
    sheet.write_string(2, 1, "abc").expect("cell");
    sheet.write_number(2, 2, 10.0).expect("cell");
    sheet.write_string(3, 0, "C").expect("cell");
    sheet.write_number(3, 1, 500.0).expect("cell");
    sheet.write_string(4, 0, "D").expect("cell");
    sheet.write_number(4, 1, 0.0).expect("cell");
    sheet.write_number(4, 2, 50.0).expect("cell");
    workbook.save(&input).expect("workbook saved");

    let analysis = analyze_path(&input).expect("two valid rows");
    let rows: Vec<usize> = analysis.dataset.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![1, 4]);
    assert_relative_eq!(analysis.summary.total_sales, 1000.0);
    assert_relative_eq!(analysis.summary.total_profit, 350.0);
    assert_eq!(analysis.risk.tier, RiskTier::Medium);
}

#[test]
fn workbook_missing_cost_column_is_a_schema_error() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("no_cost.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Satis").expect("cell");
    sheet.write_number(1, 0, 100.0).expect("cell");
    workbook.save(&input).expect("workbook saved");

    match analyze_path(&input) {
        Err(AnalysisError::Schema { missing }) => assert_eq!(missing, vec!["Maliyet".to_string()]),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn corrupt_workbook_is_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("broken.xlsx");
    fs::write(&input, b"Satis,Maliyet\n1000,600\n").expect("write bytes");
    assert!(matches!(
        analyze_path(&input),
        Err(AnalysisError::Parse(_))
    ));
}

#[test]
fn zero_sales_row_has_zero_margin() {
    let file = sheet("Satis,Maliyet\n0,50\n");
    let analysis = analyze_path(file.path()).expect("one valid row");
    let row = analysis.dataset[0];
    assert_relative_eq!(row.profit, -50.0);
    assert_eq!(row.margin_pct, 0.0);
    assert_eq!(analysis.risk.tier, RiskTier::High);
}

#[test]
fn missing_required_column_stops_the_run() {
    let file = sheet("Satis,Adet\n100,3\n");
    let err = analyze_path(file.path()).expect_err("schema gate");
    match &err {
        AnalysisError::Schema { missing } => assert_eq!(missing, &vec!["Maliyet".to_string()]),
        other => panic!("expected schema error, got {other:?}"),
    }
    assert!(err.to_string().contains("Maliyet"));
}

#[test]
fn only_invalid_rows_is_an_empty_dataset() {
    let file = sheet("Satis,Maliyet\nabc,10\n,\nx,y\n");
    assert!(matches!(
        analyze_path(file.path()),
        Err(AnalysisError::EmptyDataset)
    ));
}

#[test]
fn unreadable_file_is_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        read_table_from_path(&missing),
        Err(AnalysisError::Parse(_))
    ));
}

#[test]
fn tied_max_profit_picks_the_earlier_row() {
    let t = table(
        &["Satis", "Maliyet"],
        &[&["500", "100"], &["900", "500"], &["450", "50"]],
    );
    let analysis = analyze(&t).expect("valid rows");
    assert_eq!(analysis.insights.best_profit_row.row, 1);
}

#[test]
fn risk_tier_tracks_average_margin() {
    // margins 25, 25, 25, 25, 0 -> average exactly 20 -> medium
    let medium = table(
        &["Satis", "Maliyet"],
        &[
            &["100", "75"],
            &["100", "75"],
            &["100", "75"],
            &["100", "75"],
            &["0", "10"],
        ],
    );
    let analysis = analyze(&medium).expect("valid");
    assert_eq!(analysis.summary.avg_margin_pct, 20.0);
    assert_eq!(analysis.risk.tier, RiskTier::Medium);

    // margins 50, 50, 50, 25, 0 -> average exactly 35 -> low
    let low = table(
        &["Satis", "Maliyet"],
        &[
            &["100", "50"],
            &["100", "50"],
            &["100", "50"],
            &["100", "75"],
            &["0", "10"],
        ],
    );
    let analysis = analyze(&low).expect("valid");
    assert_eq!(analysis.summary.avg_margin_pct, 35.0);
    assert_eq!(analysis.risk.tier, RiskTier::Low);
}

#[test]
fn batch_outputs_are_written() {
    let file = sheet("Urun,Satis,Maliyet\nA,1000,600\nB,oops,1\nC,0,50\n");
    let analysis = analyze_path(file.path()).expect("two valid rows");
    let dir = tempdir().expect("temp dir");

    let json_path = dir.path().join("analysis.json");
    output::write_json(&json_path, &analysis).expect("json written");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read json"))
            .expect("valid json");
    assert_eq!(json["risk"]["tier"], "MEDIUM");
    assert_eq!(json["dataset"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["insights"]["worst_margin_row"]["row"], 3);

    let csv_path = dir.path().join("dataset.csv");
    let rows: Vec<ExportRow> = reports::export_rows(&analysis);
    output::write_csv(&csv_path, &rows).expect("csv written");
    let exported = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = exported.lines();
    assert_eq!(lines.next(), Some("Row,Satis,Maliyet,Kar,Kar_Marji"));
    assert_eq!(lines.count(), 2);

    // The export can be analyzed again and yields the same dataset.
    let again = analyze_path(&csv_path).expect("export re-analyzes");
    assert_eq!(again.summary.row_count, 2);
    assert_relative_eq!(again.summary.total_profit, analysis.summary.total_profit);
}
