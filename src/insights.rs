use crate::types::{DerivedRecord, InsightPair};

/// First record whose `key` beats every earlier one under `better`. Ties keep
/// the earlier record.
fn first_extreme<F, C>(dataset: &[DerivedRecord], key: F, better: C) -> Option<DerivedRecord>
where
    F: Fn(&DerivedRecord) -> f64,
    C: Fn(f64, f64) -> bool,
{
    let (first, rest) = dataset.split_first()?;
    let best = rest.iter().fold(*first, |best, candidate| {
        if better(key(candidate), key(&best)) {
            *candidate
        } else {
            best
        }
    });
    Some(best)
}

pub fn best_profit_row(dataset: &[DerivedRecord]) -> Option<DerivedRecord> {
    first_extreme(dataset, |r| r.profit, |a, b| a > b)
}

pub fn worst_margin_row(dataset: &[DerivedRecord]) -> Option<DerivedRecord> {
    first_extreme(dataset, |r| r.margin_pct, |a, b| a < b)
}

/// `None` only for an empty dataset, which validation never lets through.
pub fn select(dataset: &[DerivedRecord]) -> Option<InsightPair> {
    Some(InsightPair {
        best_profit_row: best_profit_row(dataset)?,
        worst_margin_row: worst_margin_row(dataset)?,
    })
}
