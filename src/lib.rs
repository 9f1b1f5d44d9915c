//! Profitability analysis for small-business sales/cost spreadsheets.
//!
//! [`analysis::analyze`] turns a [`loader::RawTable`] into an
//! [`types::Analysis`]; [`reports`] and [`output`] render that structure.
pub mod analysis;
pub mod config;
pub mod error;
pub mod insights;
pub mod loader;
pub mod metrics;
pub mod output;
pub mod reports;
pub mod risk;
pub mod telemetry;
pub mod types;
pub mod util;

pub use analysis::{analyze, analyze_path, analyze_reader};
pub use error::{AnalysisError, AppError};
pub use types::{Analysis, DerivedRecord, InsightPair, RiskAssessment, RiskTier, Summary};
