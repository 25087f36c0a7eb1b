//! Analysis pipeline
//!
//! Converts one user's raw time-series of symptom logs and journal entries
//! into patterns, correlations, a summary, and ranked recommendations.
//!
//! ## Architecture
//!
//! - **stats**: pure numeric primitives (Pearson, least squares, mean)
//! - **patterns**: day-of-week, severity-trend and frequency-trend detection
//! - **correlations**: symptom-energy, symptom-mood, symptom-symptom scans
//! - **recommendations**: rule-based ranking of what the data supports
//! - **summary**: aggregate statistics over the log set
//! - **engine**: the orchestrator tying it together behind a data source
//!
//! ## Data Flow
//!
//! 1. The engine fetches logs and entries through [`crate::source::InsightSource`]
//! 2. The pattern detector and correlation finder scan independently
//! 3. The recommendation generator consumes both outputs plus the raw logs
//! 4. The summary builder aggregates the raw logs directly

mod correlations;
mod engine;
mod patterns;
mod recommendations;
mod stats;
mod summary;

pub use correlations::find_correlations;
pub use engine::{
    analyze_snapshot, InsightEngine, DEFAULT_LOOKBACK_DAYS, MIN_LOGS_FOR_ANALYSIS,
};
pub use patterns::detect_patterns;
pub use recommendations::{build_recommendations, tracking_starter_recommendation};
pub use stats::{linear_fit, mean, pearson_correlation, LinearFit};
pub use summary::build_summary;
