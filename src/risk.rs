use crate::types::{RiskAssessment, RiskTier};

/// Average margins below this are high risk.
pub const HIGH_RISK_BELOW: f64 = 20.0;
/// Average margins at or above this are low risk.
pub const LOW_RISK_FROM: f64 = 35.0;

pub const HIGH_RISK_ADVISORY: &str =
    "Keep costs under control. Review pricing and procurement costs.";
pub const MEDIUM_RISK_ADVISORY: &str =
    "Optimize operations and purchasing processes to raise the margin.";
pub const LOW_RISK_ADVISORY: &str =
    "The overall picture is healthy. Scaling and growth strategies can be planned.";

pub fn tier_for(avg_margin_pct: f64) -> RiskTier {
    if avg_margin_pct >= LOW_RISK_FROM {
        RiskTier::Low
    } else if avg_margin_pct >= HIGH_RISK_BELOW {
        RiskTier::Medium
    } else {
        // Also catches NaN, which fails both comparisons.
        RiskTier::High
    }
}

pub fn advisory_for(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => HIGH_RISK_ADVISORY,
        RiskTier::Medium => MEDIUM_RISK_ADVISORY,
        RiskTier::Low => LOW_RISK_ADVISORY,
    }
}

pub fn classify(avg_margin_pct: f64) -> RiskAssessment {
    let tier = tier_for(avg_margin_pct);
    RiskAssessment {
        tier,
        advisory: advisory_for(tier).to_string(),
    }
}
