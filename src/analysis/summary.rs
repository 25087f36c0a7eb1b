//! Summary builder
//!
//! Aggregate statistics over a user's raw log set: days tracked, the
//! most-often-reported symptom, overall average severity, and the coarse
//! direction severity is heading.

use crate::analysis::patterns::observed_symptoms;
use crate::analysis::stats::mean;
use crate::model::{InsightSummary, OverallTrend, SymptomLog};

/// Logs required before an overall trend direction is reported
const TREND_MIN_LOGS: usize = 14;
/// Half-to-half average delta below which the trend counts as stable
const TREND_STABLE_BAND: f64 = 0.3;

/// Build the aggregate summary for a log set
pub fn build_summary(logs: &[SymptomLog]) -> InsightSummary {
    // Strictly-greater comparison over first-appearance order keeps ties
    // on the symptom encountered earliest in the chronological logs.
    let mut most_frequent = None;
    let mut best_count = 0;
    for symptom in observed_symptoms(logs) {
        let count = logs
            .iter()
            .filter(|l| l.symptoms.contains_key(&symptom))
            .count();
        if count > best_count {
            best_count = count;
            most_frequent = Some(symptom);
        }
    }

    // Flat mean over every individual observation, not per-symptom means.
    let severities = all_severities(logs);

    InsightSummary {
        total_days_tracked: logs.len(),
        most_frequent_symptom: most_frequent,
        average_severity: mean(&severities),
        trend_direction: overall_trend(logs),
    }
}

fn all_severities(logs: &[SymptomLog]) -> Vec<f64> {
    logs.iter()
        .flat_map(|l| l.symptoms.values().map(|&s| f64::from(s)))
        .collect()
}

/// Compare flat average severity of the first and second half of the logs
fn overall_trend(logs: &[SymptomLog]) -> OverallTrend {
    if logs.len() < TREND_MIN_LOGS {
        return OverallTrend::InsufficientData;
    }

    let mid = logs.len() / 2;
    let first_avg = mean(&all_severities(&logs[..mid]));
    let second_avg = mean(&all_severities(&logs[mid..]));

    if (second_avg - first_avg).abs() < TREND_STABLE_BAND {
        OverallTrend::Stable
    } else if second_avg < first_avg {
        OverallTrend::Improving
    } else {
        OverallTrend::Worsening
    }
}
