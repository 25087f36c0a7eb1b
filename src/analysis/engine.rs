//! Insights orchestrator
//!
//! The public entry point of the analysis core. Fetches one user's history
//! through the injected [`InsightSource`], applies the insufficient-data
//! short-circuit, and runs the pattern detector, correlation finder,
//! recommendation generator, and summary builder over the snapshot.
//!
//! Insights are a supplementary surface: a failed fetch must never break
//! the caller. The orchestrator therefore always returns a valid
//! `IntelligentInsights`; upstream failures are logged and converted into
//! the empty shape.

use crate::analysis::correlations::find_correlations;
use crate::analysis::patterns::detect_patterns;
use crate::analysis::recommendations::{build_recommendations, tracking_starter_recommendation};
use crate::analysis::summary::build_summary;
use crate::model::{InsightSummary, IntelligentInsights, JournalEntry, SymptomLog};
use crate::source::InsightSource;
use chrono::{Duration, Utc};
use std::sync::Arc;

/// Default lookback window, in days
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Symptom logs required before the full analysis runs
pub const MIN_LOGS_FOR_ANALYSIS: usize = 5;

/// Batch analysis over one user's tracked history
pub struct InsightEngine {
    source: Arc<dyn InsightSource>,
}

impl InsightEngine {
    /// Create an engine over a data source
    pub fn new(source: Arc<dyn InsightSource>) -> Self {
        Self { source }
    }

    /// Analyze a user's last `days` days of history
    ///
    /// Never fails: fetch errors are logged and produce the empty-but-valid
    /// shape, and too little history produces the insufficient-data shape
    /// with a single tracking nudge.
    pub async fn analyze_user(&self, user_id: &str, days: u32) -> IntelligentInsights {
        let since = Utc::now().date_naive() - Duration::days(i64::from(days));

        let logs = match self.source.fetch_symptom_logs(user_id, since).await {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "symptom log fetch failed, returning empty insights");
                return IntelligentInsights::empty();
            }
        };

        let entries = match self.source.fetch_journal_entries(user_id, since).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "journal fetch failed, returning empty insights");
                return IntelligentInsights::empty();
            }
        };

        tracing::debug!(
            user_id,
            logs = logs.len(),
            entries = entries.len(),
            days,
            "history fetched"
        );

        analyze_snapshot(&logs, &entries)
    }
}

/// Run the full analysis over an in-memory snapshot
///
/// Pure computation: same input, same output. Logs must be ordered
/// ascending by date (the [`InsightSource`] contract).
pub fn analyze_snapshot(logs: &[SymptomLog], entries: &[JournalEntry]) -> IntelligentInsights {
    if logs.len() < MIN_LOGS_FOR_ANALYSIS {
        tracing::debug!(log_count = logs.len(), "not enough history, short-circuiting");
        return IntelligentInsights {
            patterns: Vec::new(),
            correlations: Vec::new(),
            recommendations: vec![tracking_starter_recommendation(logs.len())],
            summary: InsightSummary::insufficient(logs.len()),
        };
    }

    let patterns = detect_patterns(logs);
    let correlations = find_correlations(logs, entries);
    let recommendations = build_recommendations(logs, entries, &patterns, &correlations);
    let summary = build_summary(logs);

    IntelligentInsights {
        patterns,
        correlations,
        recommendations,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CorrelationKind, OverallTrend, PatternDetails, Priority, RecommendationCategory,
        SymptomType, TrendDirection,
    };
    use crate::source::{MemorySource, SourceError};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    /// Source that always fails, for the fail-soft boundary.
    struct BrokenSource;

    #[async_trait]
    impl InsightSource for BrokenSource {
        async fn fetch_symptom_logs(
            &self,
            _user_id: &str,
            _since: NaiveDate,
        ) -> Result<Vec<SymptomLog>, SourceError> {
            Err(SourceError::Unavailable("connection refused".to_string()))
        }

        async fn fetch_journal_entries(
            &self,
            _user_id: &str,
            _since: NaiveDate,
        ) -> Result<Vec<JournalEntry>, SourceError> {
            Err(SourceError::Unavailable("connection refused".to_string()))
        }
    }

    fn recent_date(days_ago: i64) -> NaiveDate {
        Utc::now().date_naive() - Duration::days(days_ago)
    }

    #[tokio::test]
    async fn test_insufficient_data_short_circuit() {
        let source = MemorySource::new().with_logs((0..4).map(|i| {
            SymptomLog::new("alice", recent_date(i)).symptom(SymptomType::Anxiety, 3)
        }));
        let engine = InsightEngine::new(Arc::new(source));

        let insights = engine.analyze_user("alice", DEFAULT_LOOKBACK_DAYS).await;

        assert!(insights.patterns.is_empty());
        assert!(insights.correlations.is_empty());
        assert_eq!(insights.recommendations.len(), 1);
        assert_eq!(
            insights.recommendations[0].category,
            RecommendationCategory::Tracking
        );
        assert_eq!(insights.recommendations[0].priority, Priority::High);
        assert!(insights.recommendations[0].description.contains('4'));
        assert_eq!(
            insights.summary.trend_direction,
            OverallTrend::InsufficientData
        );
        assert_eq!(insights.summary.total_days_tracked, 4);
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_empty_shape() {
        let engine = InsightEngine::new(Arc::new(BrokenSource));

        let insights = engine.analyze_user("alice", DEFAULT_LOOKBACK_DAYS).await;

        assert!(insights.patterns.is_empty());
        assert!(insights.correlations.is_empty());
        assert!(insights.recommendations.is_empty());
        assert_eq!(
            insights.summary.trend_direction,
            OverallTrend::InsufficientData
        );
    }

    #[tokio::test]
    async fn test_analysis_is_idempotent() {
        let logs: Vec<SymptomLog> = (0..20)
            .map(|i| {
                SymptomLog::new("alice", recent_date(19 - i))
                    .symptom(SymptomType::Anxiety, (2 + i / 5).min(5) as u8)
                    .energy((4 - i / 5).max(1) as u8)
            })
            .collect();

        let first = analyze_snapshot(&logs, &[]);
        let second = analyze_snapshot(&logs, &[]);
        assert_eq!(first, second);

        let json_a = serde_json::to_string(&first).unwrap();
        let json_b = serde_json::to_string(&second).unwrap();
        assert_eq!(json_a, json_b);
    }

    /// 20 days where anxiety climbs 2 -> 5 while energy falls 4 -> 1.
    fn worsening_history() -> Vec<SymptomLog> {
        (0..20)
            .map(|i| {
                let severity = (2 + i / 5) as u8; // 2,2,2,2,2,3,...,5
                let energy = 6 - severity; // 4 -> 1
                SymptomLog::new("alice", recent_date(19 - i))
                    .symptom(SymptomType::Anxiety, severity)
                    .energy(energy)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_end_to_end_worsening_scenario() {
        let source = MemorySource::new().with_logs(worsening_history());
        let engine = InsightEngine::new(Arc::new(source));

        let insights = engine.analyze_user("alice", DEFAULT_LOOKBACK_DAYS).await;

        // Severity trend: anxiety worsening.
        let trend = insights
            .patterns
            .iter()
            .find(|p| matches!(p.details, PatternDetails::SeverityTrend { .. }))
            .expect("severity trend expected");
        assert_eq!(trend.symptom, Some(SymptomType::Anxiety));
        match &trend.details {
            PatternDetails::SeverityTrend { direction, .. } => {
                assert_eq!(*direction, TrendDirection::Worsening);
            }
            other => panic!("unexpected details: {:?}", other),
        }

        // Strong negative anxiety-energy correlation.
        let correlation = insights
            .correlations
            .iter()
            .find(|c| c.kind == CorrelationKind::SymptomEnergy)
            .expect("energy correlation expected");
        assert_eq!(correlation.variable_a, "Anxiety");
        assert!(correlation.strength < -0.6);

        // Medical escalation mentioning anxiety, plus the energy-drain
        // lifestyle recommendation, both high priority.
        let medical = insights
            .recommendations
            .iter()
            .find(|r| r.category == RecommendationCategory::Medical)
            .expect("medical recommendation expected");
        assert_eq!(medical.priority, Priority::High);
        assert!(medical.title.contains("anxiety") || medical.description.contains("Anxiety"));

        let lifestyle = insights
            .recommendations
            .iter()
            .find(|r| r.category == RecommendationCategory::Lifestyle)
            .expect("lifestyle recommendation expected");
        assert_eq!(lifestyle.priority, Priority::High);

        // Summary reflects the decline.
        assert_eq!(insights.summary.total_days_tracked, 20);
        assert_eq!(
            insights.summary.most_frequent_symptom,
            Some(SymptomType::Anxiety)
        );
        assert_eq!(insights.summary.trend_direction, OverallTrend::Worsening);
    }

    #[tokio::test]
    async fn test_lookback_window_excludes_old_logs() {
        // 3 recent logs plus 10 outside the window: short-circuit applies.
        let mut source = MemorySource::new();
        for i in 0..3 {
            source.push_log(
                SymptomLog::new("alice", recent_date(i)).symptom(SymptomType::Fatigue, 3),
            );
        }
        for i in 0..10 {
            source.push_log(
                SymptomLog::new("alice", recent_date(60 + i))
                    .symptom(SymptomType::Fatigue, 3),
            );
        }

        let engine = InsightEngine::new(Arc::new(source));
        let insights = engine.analyze_user("alice", DEFAULT_LOOKBACK_DAYS).await;

        assert_eq!(insights.summary.total_days_tracked, 3);
        assert_eq!(
            insights.summary.trend_direction,
            OverallTrend::InsufficientData
        );
    }
}
