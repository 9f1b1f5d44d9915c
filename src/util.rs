// Utility helpers for parsing and basic statistics.
//
// This module centralizes the "dirty" cell handling so the rest of the code
// can assume clean, typed values.
use num_format::{Locale, ToFormattedString};

/// Coerce a spreadsheet cell into a finite `f64`.
///
/// - Accepts `Option<&str>` so a missing cell on a short row is just `None`.
/// - Trims whitespace; blank cells are rejected.
/// - Anything `f64::from_str` refuses (text, `1,000`) is rejected.
/// - `NaN` and infinities are rejected so they never reach the sums.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn average(v: &[f64]) -> Option<f64> {
    if v.is_empty() {
        return None;
    }
    let sum: f64 = v.iter().copied().sum();
    Some(sum / v.len() as f64)
}

/// Round half away from zero to `decimals` places. Display only.
pub fn round_to(n: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (n * factor).round() / factor
}

/// Plain fixed-decimal rendering (`1234.5` -> `1234.50`). No grouping
/// separators: values are shown exactly as the spreadsheet would.
pub fn format_number(n: f64, decimals: usize) -> String {
    let rounded = round_to(n, decimals as u32);
    // Avoid printing "-0.00" for tiny negatives that round to zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Counts in console messages (e.g. `12,500 rows analyzed`).
    n.to_formatted_string(&Locale::en)
}
