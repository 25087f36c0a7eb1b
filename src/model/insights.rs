//! Derived analysis results
//!
//! Everything in this module is recomputed fresh on every analysis run and
//! never persisted: detected patterns, correlations, recommendations, the
//! aggregate summary, and the `IntelligentInsights` envelope returned to
//! the caller.

use crate::model::symptom::SymptomType;
use serde::Serialize;

/// Coarse effect-size bucket for a detected pattern
///
/// Used only for filtering and display; this is not a statistical
/// confidence interval.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Direction of a severity trend (lower severity = improvement)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Worsening,
}

/// Direction of a reporting-frequency trend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyDirection {
    Increasing,
    Decreasing,
}

/// Type-specific payload of a detected pattern
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternDetails {
    /// A symptom is reliably worse on one weekday than another
    DayOfWeek {
        /// Full weekday name with the highest average severity
        peak_day: String,
        /// Full weekday name with the lowest average severity
        lowest_day: String,
        /// Peak average minus lowest average, on the 1-5 scale
        difference: f64,
    },
    /// A symptom's severity is drifting over the tracked period
    SeverityTrend {
        direction: TrendDirection,
        /// OLS slope per logged observation
        slope: f64,
        /// Approximate percent change over the series (see detector notes)
        change_percent: f64,
    },
    /// A symptom is being reported more or less often
    FrequencyTrend {
        direction: FrequencyDirection,
        /// Second-half occurrence count minus first-half count
        change: i64,
        /// Change relative to the first-half count (0 when that count is 0)
        percent_change: f64,
    },
}

/// A recurring structural regularity detected in one symptom's history
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetectedPattern {
    /// The symptom this pattern concerns, when it concerns one
    pub symptom: Option<SymptomType>,
    /// Human-readable sentence
    pub description: String,
    pub confidence: Confidence,
    #[serde(flatten)]
    pub details: PatternDetails,
}

/// Which variable pairing a correlation was computed over
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    SymptomEnergy,
    SymptomMood,
    SymptomSymptom,
}

/// A linear association between two tracked quantities
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Correlation {
    pub kind: CorrelationKind,
    /// Display label of the first quantity (always a symptom)
    pub variable_a: String,
    /// Display label of the second quantity ("Energy Level", "Mood", or a symptom)
    pub variable_b: String,
    /// Pearson coefficient, -1 to 1
    pub strength: f64,
    /// Human-readable sentence including directionality
    pub description: String,
    /// Number of paired observations used
    pub sample_size: usize,
}

/// Recommendation category
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Lifestyle,
    Tracking,
    Awareness,
    Medical,
}

/// Recommendation priority
///
/// Declaration order doubles as sort order: `High < Medium < Low`, so a
/// stable `sort_by_key` puts the most urgent items first.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// An actionable, evidence-backed recommendation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// The data observation this recommendation rests on
    pub evidence: String,
    /// Suggested next step
    pub action: String,
}

/// Overall direction of severity across the tracked period
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallTrend {
    Improving,
    Stable,
    Worsening,
    InsufficientData,
}

/// Aggregate statistics over the raw log set
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightSummary {
    /// Number of days with a symptom log in the lookback window
    pub total_days_tracked: usize,
    /// Most-often-reported symptom; ties go to the first symptom seen in
    /// the chronologically sorted logs
    pub most_frequent_symptom: Option<SymptomType>,
    /// Flat mean over every individual (symptom, severity) observation
    pub average_severity: f64,
    pub trend_direction: OverallTrend,
}

impl InsightSummary {
    /// Summary for a user with no analyzable history
    pub fn insufficient(total_days_tracked: usize) -> Self {
        Self {
            total_days_tracked,
            most_frequent_symptom: None,
            average_severity: 0.0,
            trend_direction: OverallTrend::InsufficientData,
        }
    }
}

/// The full analysis result returned to the caller
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntelligentInsights {
    pub patterns: Vec<DetectedPattern>,
    pub correlations: Vec<Correlation>,
    pub recommendations: Vec<Recommendation>,
    pub summary: InsightSummary,
}

impl IntelligentInsights {
    /// The empty-but-valid shape used by the fail-soft orchestrator boundary
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            correlations: Vec::new(),
            recommendations: Vec::new(),
            summary: InsightSummary::insufficient(0),
        }
    }
}
