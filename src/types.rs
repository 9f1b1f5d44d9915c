use serde::Serialize;
use std::fmt;
use tabled::Tabled;

/// A spreadsheet row whose `Satis` and `Maliyet` cells both coerced to
/// finite numbers. `row` is the 1-based position among the data rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub row: usize,
    pub sales: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRecord {
    pub row: usize,
    pub sales: f64,
    pub cost: f64,
    pub profit: f64,
    pub margin_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub row_count: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    pub avg_margin_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub advisory: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightPair {
    pub best_profit_row: DerivedRecord,
    pub worst_margin_row: DerivedRecord,
}

/// Everything one analysis run produces. Renderers only ever read this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub dataset: Vec<DerivedRecord>,
    pub summary: Summary,
    pub risk: RiskAssessment,
    pub insights: InsightPair,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SummaryRow {
    #[serde(rename = "Metric")]
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct InsightRow {
    #[serde(rename = "Insight")]
    #[tabled(rename = "Insight")]
    pub insight: String,
    #[serde(rename = "Row")]
    #[tabled(rename = "Row")]
    pub row: usize,
    #[serde(rename = "Sales")]
    #[tabled(rename = "Sales")]
    pub sales: String,
    #[serde(rename = "Cost")]
    #[tabled(rename = "Cost")]
    pub cost: String,
    #[serde(rename = "Profit")]
    #[tabled(rename = "Profit")]
    pub profit: String,
    #[serde(rename = "MarginPct")]
    #[tabled(rename = "Margin (%)")]
    pub margin_pct: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DatasetRow {
    #[serde(rename = "Row")]
    #[tabled(rename = "Row")]
    pub row: usize,
    #[serde(rename = "Sales")]
    #[tabled(rename = "Sales")]
    pub sales: String,
    #[serde(rename = "Cost")]
    #[tabled(rename = "Cost")]
    pub cost: String,
    #[serde(rename = "Profit")]
    #[tabled(rename = "Profit")]
    pub profit: String,
    #[serde(rename = "MarginPct")]
    #[tabled(rename = "Margin (%)")]
    pub margin_pct: String,
}

/// Full-precision dataset row for the CSV export. Column names follow the
/// input spreadsheet so the file can be fed straight back in.
#[derive(Debug, Serialize, Clone)]
pub struct ExportRow {
    #[serde(rename = "Row")]
    pub row: usize,
    #[serde(rename = "Satis")]
    pub sales: f64,
    #[serde(rename = "Maliyet")]
    pub cost: f64,
    #[serde(rename = "Kar")]
    pub profit: f64,
    #[serde(rename = "Kar_Marji")]
    pub margin_pct: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct SampleRow {
    #[serde(rename = "Satis")]
    pub sales: f64,
    #[serde(rename = "Maliyet")]
    pub cost: f64,
}
