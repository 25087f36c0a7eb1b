//! # Solace Insights
//!
//! The intelligent-insights core of Solace, a menopause support companion.
//! Takes one user's time-series of symptom-severity logs and journal mood
//! ratings and derives statistical patterns, cross-variable correlations,
//! aggregate statistics, and ranked, evidence-backed recommendations.
//!
//! ## Features
//!
//! - **Pattern detection**: day-of-week effects, severity trends, frequency trends
//! - **Correlations**: symptom-energy, symptom-mood, symptom-symptom Pearson scans
//! - **Recommendations**: ranked, evidence-backed, capped at five
//! - **Fail-soft**: a broken data source never breaks the caller
//!
//! ## Modules
//!
//! - [`model`]: domain types (symptoms, logs, derived results)
//! - [`analysis`]: the statistical pipeline and orchestrator
//! - [`source`]: the injected data-source capability
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solace_insights::analysis::{InsightEngine, DEFAULT_LOOKBACK_DAYS};
//! use solace_insights::model::{SymptomLog, SymptomType};
//! use solace_insights::source::MemorySource;
//! use chrono::Utc;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let today = Utc::now().date_naive();
//!     let source = MemorySource::new().with_logs((0..7).map(|i| {
//!         SymptomLog::new("demo", today - chrono::Duration::days(i))
//!             .symptom(SymptomType::HotFlashes, 3)
//!             .energy(4)
//!     }));
//!
//!     let engine = InsightEngine::new(Arc::new(source));
//!     let insights = engine.analyze_user("demo", DEFAULT_LOOKBACK_DAYS).await;
//!
//!     println!("{} patterns detected", insights.patterns.len());
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod model;
pub mod source;

// Re-export top-level types for convenience
pub use analysis::{
    analyze_snapshot, build_recommendations, build_summary, detect_patterns, find_correlations,
    linear_fit, mean, pearson_correlation, InsightEngine, LinearFit, DEFAULT_LOOKBACK_DAYS,
    MIN_LOGS_FOR_ANALYSIS,
};

pub use model::{
    Confidence, Correlation, CorrelationKind, DetectedPattern, FrequencyDirection, InsightSummary,
    IntelligentInsights, JournalEntry, OverallTrend, PatternDetails, Priority, Recommendation,
    RecommendationCategory, SymptomLog, SymptomType, TrendDirection,
};

pub use source::{InsightSource, MemorySource, SourceError};

pub use config::{AnalysisConfig, Config, ConfigError, LoggingConfig};
