// Presentation over a finished `Analysis`: dashboard text, the Markdown
// report document, text charts and export rows. Nothing here computes
// metrics; every number shown is rounded for display only.
use crate::output::markdown_table;
use crate::types::{
    Analysis, DatasetRow, DerivedRecord, ExportRow, InsightRow, SampleRow, SummaryRow,
};
use crate::util::format_number;
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const REPORT_TITLE: &str = "KOBI Financial Analysis Report";
pub const DEFAULT_REPORT_FILE: &str = "kobi_finansal_analiz_raporu.md";
pub const CHART_WIDTH: usize = 40;

pub fn summary_rows(analysis: &Analysis) -> Vec<SummaryRow> {
    let s = &analysis.summary;
    [
        ("Total Sales", format_number(s.total_sales, 2)),
        ("Total Profit", format_number(s.total_profit, 2)),
        ("Average Margin (%)", format_number(s.avg_margin_pct, 2)),
        ("Risk Level", analysis.risk.tier.to_string()),
    ]
    .into_iter()
    .map(|(metric, value)| SummaryRow {
        metric: metric.to_string(),
        value,
    })
    .collect()
}

fn insight_row(label: &str, r: &DerivedRecord) -> InsightRow {
    InsightRow {
        insight: label.to_string(),
        row: r.row,
        sales: format_number(r.sales, 2),
        cost: format_number(r.cost, 2),
        profit: format_number(r.profit, 2),
        margin_pct: format_number(r.margin_pct, 2),
    }
}

pub fn insight_rows(analysis: &Analysis) -> Vec<InsightRow> {
    vec![
        insight_row("Most Profitable Row", &analysis.insights.best_profit_row),
        insight_row("Lowest Margin Row", &analysis.insights.worst_margin_row),
    ]
}

pub fn dataset_rows(analysis: &Analysis, max_rows: usize) -> Vec<DatasetRow> {
    analysis
        .dataset
        .iter()
        .take(max_rows)
        .map(|r| DatasetRow {
            row: r.row,
            sales: format_number(r.sales, 2),
            cost: format_number(r.cost, 2),
            profit: format_number(r.profit, 2),
            margin_pct: format_number(r.margin_pct, 2),
        })
        .collect()
}

pub fn export_rows(analysis: &Analysis) -> Vec<ExportRow> {
    analysis
        .dataset
        .iter()
        .map(|r| ExportRow {
            row: r.row,
            sales: r.sales,
            cost: r.cost,
            profit: r.profit,
            margin_pct: r.margin_pct,
        })
        .collect()
}

/// The demo spreadsheet shipped with the tool.
pub fn sample_rows() -> Vec<SampleRow> {
    [(1000.0, 600.0), (1500.0, 900.0), (2000.0, 1200.0)]
        .into_iter()
        .map(|(sales, cost)| SampleRow { sales, cost })
        .collect()
}

/// Horizontal text bar chart keyed by source row. Bars scale to the largest
/// absolute value; negatives grow left of the axis.
pub fn bar_chart(title: &str, points: &[(usize, f64)], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    if points.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }

    let max_abs = points.iter().map(|(_, v)| v.abs()).fold(0.0_f64, f64::max);
    let has_negative = points.iter().any(|(_, v)| *v < 0.0);
    let label_width = points
        .iter()
        .map(|(row, _)| row.to_string().len())
        .max()
        .unwrap_or(1);

    for (row, value) in points {
        let len = if max_abs > 0.0 {
            ((value.abs() / max_abs) * width as f64).round() as usize
        } else {
            0
        };
        let left = match (has_negative, *value < 0.0) {
            (false, _) => String::new(),
            (true, true) => format!("{}{}", " ".repeat(width - len), "#".repeat(len)),
            (true, false) => " ".repeat(width),
        };
        let right = if *value > 0.0 {
            "#".repeat(len)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "Row {row:>label_width$} {left}|{right} {}",
            format_number(*value, 2)
        );
    }
    out
}

pub fn profit_chart(analysis: &Analysis) -> String {
    let points: Vec<(usize, f64)> = analysis.dataset.iter().map(|r| (r.row, r.profit)).collect();
    bar_chart("Profit by Row", &points, CHART_WIDTH)
}

pub fn margin_chart(analysis: &Analysis) -> String {
    let points: Vec<(usize, f64)> = analysis
        .dataset
        .iter()
        .map(|r| (r.row, r.margin_pct))
        .collect();
    bar_chart("Profit Margin (%) by Row", &points, CHART_WIDTH)
}

/// Console view shown after each load: summary, risk, insights, a preview of
/// the dataset and both charts.
pub fn render_dashboard(analysis: &Analysis, preview_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Financial Summary\n");
    let _ = writeln!(out, "{}\n", markdown_table(&summary_rows(analysis)));
    let _ = writeln!(out, "Risk Analysis\n");
    let _ = writeln!(out, "Risk Level: {}", analysis.risk.tier);
    let _ = writeln!(out, "Advisory: {}\n", analysis.risk.advisory);
    let _ = writeln!(out, "Key Insights\n");
    let _ = writeln!(out, "{}\n", markdown_table(&insight_rows(analysis)));
    let _ = writeln!(
        out,
        "Dataset (first {} of {} rows)\n",
        preview_rows.min(analysis.dataset.len()),
        analysis.dataset.len()
    );
    let _ = writeln!(
        out,
        "{}\n",
        markdown_table(&dataset_rows(analysis, preview_rows))
    );
    let _ = writeln!(out, "{}", profit_chart(analysis));
    let _ = writeln!(out, "{}", margin_chart(analysis));
    out
}

/// The downloadable report document, as Markdown.
pub fn render_document(analysis: &Analysis, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {REPORT_TITLE}\n");
    let _ = writeln!(
        out,
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "{}\n", markdown_table(&summary_rows(analysis)));
    let _ = writeln!(out, "## Advisory\n");
    let _ = writeln!(out, "{}\n", analysis.risk.advisory);
    let _ = writeln!(out, "## Key Insights\n");
    let _ = writeln!(out, "{}\n", markdown_table(&insight_rows(analysis)));
    let _ = writeln!(out, "## Charts\n");
    let _ = writeln!(out, "```text\n{}```\n", profit_chart(analysis));
    let _ = writeln!(out, "```text\n{}```", margin_chart(analysis));
    out
}
