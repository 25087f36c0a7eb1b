//! Domain model for the Solace insights core
//!
//! - [`symptom`]: the fixed symptom vocabulary and display labels
//! - [`log`]: input records (symptom logs, journal entries)
//! - [`insights`]: derived, ephemeral analysis results

pub mod insights;
pub mod log;
pub mod symptom;

pub use insights::{
    Confidence, Correlation, CorrelationKind, DetectedPattern, FrequencyDirection,
    InsightSummary, IntelligentInsights, OverallTrend, PatternDetails, Priority,
    Recommendation, RecommendationCategory, TrendDirection,
};
pub use log::{JournalEntry, SymptomLog, ENERGY_RANGE, MOOD_RANGE, SEVERITY_RANGE};
pub use symptom::SymptomType;
