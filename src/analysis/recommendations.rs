//! Recommendation generator
//!
//! Turns detected patterns, correlations, and raw tracking behavior into a
//! short, ranked list of actionable recommendations. Four independent rules
//! feed one list, which is then stable-sorted by priority and capped.

use crate::model::{
    Confidence, Correlation, CorrelationKind, DetectedPattern, JournalEntry, PatternDetails,
    Priority, Recommendation, RecommendationCategory, SymptomLog, TrendDirection,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Maximum recommendations returned to the caller
const MAX_RECOMMENDATIONS: usize = 5;
/// Correlation strength below which energy/mood impact is called out
const STRONG_NEGATIVE_STRENGTH: f64 = -0.6;
/// Log-count window that triggers the streak encouragement (inclusive start,
/// exclusive end)
const STREAK_RANGE: std::ops::Range<usize> = 21..30;
/// Logs required before the journaling nudge is considered
const JOURNAL_NUDGE_MIN_LOGS: usize = 10;
/// Journal-to-log date coverage below which the nudge fires
const JOURNAL_COVERAGE_TARGET: f64 = 0.5;

/// Build the ranked recommendation list
///
/// Ties within a priority keep insertion order, so rule order is part of
/// the observable ranking.
pub fn build_recommendations(
    logs: &[SymptomLog],
    entries: &[JournalEntry],
    patterns: &[DetectedPattern],
    correlations: &[Correlation],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    recommendations.extend(day_of_week_recommendations(patterns));
    recommendations.extend(severity_trend_recommendations(patterns));
    recommendations.extend(correlation_recommendations(correlations));
    recommendations.extend(tracking_recommendations(logs, entries));

    recommendations.sort_by_key(|r| r.priority);
    recommendations.truncate(MAX_RECOMMENDATIONS);

    tracing::debug!(count = recommendations.len(), "recommendations assembled");
    recommendations
}

/// The single recommendation shown when a user has too little history
pub fn tracking_starter_recommendation(log_count: usize) -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Tracking,
        priority: Priority::High,
        title: "Start tracking consistently".to_string(),
        description: format!(
            "You've logged symptoms on {} day{} so far. With at least 5 days of \
             check-ins, Solace can start finding patterns in your data.",
            log_count,
            if log_count == 1 { "" } else { "s" }
        ),
        evidence: format!(
            "{} symptom log{} in the current window; 5 are needed for analysis.",
            log_count,
            if log_count == 1 { "" } else { "s" }
        ),
        action: "Try logging your symptoms each evening for the next week.".to_string(),
    }
}

/// Rule 1: plan self-care around a high-confidence peak day
fn day_of_week_recommendations(patterns: &[DetectedPattern]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for pattern in patterns {
        let (peak_day, difference) = match &pattern.details {
            PatternDetails::DayOfWeek {
                peak_day,
                difference,
                ..
            } if pattern.confidence == Confidence::High => (peak_day, *difference),
            _ => continue,
        };

        let symptom = pattern
            .symptom
            .map(|s| s.label_lower())
            .unwrap_or_else(|| "your symptoms".to_string());

        out.push(Recommendation {
            category: RecommendationCategory::Awareness,
            priority: Priority::Medium,
            title: format!("Plan ahead for {}s", peak_day),
            description: format!(
                "Your {} is consistently worse on {}s. A lighter schedule on that \
                 day can soften the impact.",
                symptom, peak_day
            ),
            evidence: format!(
                "Average {} severity on {}s runs {:.1} points above your easiest day.",
                symptom, peak_day, difference
            ),
            action: format!("Block out time for rest or self-care on {}s.", peak_day),
        });
    }

    out
}

/// Rule 2: escalate worsening trends, celebrate improving ones
fn severity_trend_recommendations(patterns: &[DetectedPattern]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for pattern in patterns {
        let (direction, change_percent) = match &pattern.details {
            PatternDetails::SeverityTrend {
                direction,
                change_percent,
                ..
            } => (*direction, *change_percent),
            _ => continue,
        };

        let symptom = pattern
            .symptom
            .map(|s| s.label())
            .unwrap_or("One of your symptoms");
        let symptom_lower = pattern
            .symptom
            .map(|s| s.label_lower())
            .unwrap_or_else(|| "symptom".to_string());

        match direction {
            TrendDirection::Worsening => out.push(Recommendation {
                category: RecommendationCategory::Medical,
                priority: Priority::High,
                title: format!("Discuss your {} trend with a provider", symptom_lower),
                description: format!(
                    "{} has been trending worse across your recent logs. A \
                     healthcare provider can help you evaluate options.",
                    symptom
                ),
                evidence: format!(
                    "{} severity is up roughly {:.0}% over the tracked period.",
                    symptom, change_percent
                ),
                action: "Bring your symptom history to your next appointment.".to_string(),
            }),
            TrendDirection::Improving => out.push(Recommendation {
                category: RecommendationCategory::Awareness,
                priority: Priority::Low,
                title: format!("Your {} is improving", symptom_lower),
                description: format!(
                    "{} severity has been easing across your recent logs. \
                     Whatever you've changed lately appears to be helping.",
                    symptom
                ),
                evidence: format!(
                    "{} severity is down roughly {:.0}% over the tracked period.",
                    symptom, change_percent
                ),
                action: "Keep up your current routine and note what's working.".to_string(),
            }),
        }
    }

    out
}

/// Rule 3: call out strong negative energy and mood correlations
fn correlation_recommendations(correlations: &[Correlation]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for correlation in correlations {
        if correlation.strength >= STRONG_NEGATIVE_STRENGTH {
            continue;
        }

        let symptom = correlation.variable_a.to_lowercase();
        let evidence = format!(
            "{} (r = {:.2} over {} matched days).",
            correlation.description, correlation.strength, correlation.sample_size
        );

        match correlation.kind {
            CorrelationKind::SymptomEnergy => out.push(Recommendation {
                category: RecommendationCategory::Lifestyle,
                priority: Priority::High,
                title: format!("Manage the energy drain from {}", symptom),
                description: format!(
                    "Days with worse {} are also your lowest-energy days. Pacing \
                     yourself on those days can keep the drain from compounding.",
                    symptom
                ),
                evidence,
                action: "Plan demanding tasks for lighter-symptom days and build in \
                         recovery time."
                    .to_string(),
            }),
            CorrelationKind::SymptomMood => out.push(Recommendation {
                category: RecommendationCategory::Awareness,
                priority: Priority::Medium,
                title: format!("{} is weighing on your mood", correlation.variable_a),
                description: format!(
                    "Your mood ratings dip on days with worse {}. Knowing the \
                     connection makes the low days easier to read.",
                    symptom
                ),
                evidence,
                action: "A brief mood check-in on harder days can help you spot this \
                         early."
                    .to_string(),
            }),
            CorrelationKind::SymptomSymptom => {}
        }
    }

    out
}

/// Rule 4: fixed-threshold tracking nudges
fn tracking_recommendations(logs: &[SymptomLog], entries: &[JournalEntry]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if STREAK_RANGE.contains(&logs.len()) {
        out.push(Recommendation {
            category: RecommendationCategory::Tracking,
            priority: Priority::Low,
            title: "Keep your tracking streak going".to_string(),
            description: "You've been checking in consistently for three weeks. A full \
                          month of data makes every analysis sharper."
                .to_string(),
            evidence: format!("{} days logged in the current window.", logs.len()),
            action: "Log daily to complete a full month of history.".to_string(),
        });
    }

    if logs.len() > JOURNAL_NUDGE_MIN_LOGS {
        let entry_dates: HashSet<NaiveDate> = entries.iter().map(|e| e.entry_date).collect();
        let matched = logs
            .iter()
            .filter(|l| entry_dates.contains(&l.log_date))
            .count();

        if (matched as f64) < logs.len() as f64 * JOURNAL_COVERAGE_TARGET {
            out.push(Recommendation {
                category: RecommendationCategory::Tracking,
                priority: Priority::Medium,
                title: "Pair journaling with your check-ins".to_string(),
                description: "Mood ratings from journal entries are what let Solace \
                              connect symptoms to how you actually feel."
                    .to_string(),
                evidence: format!(
                    "Only {} of your {} logged days have a journal entry.",
                    matched,
                    logs.len()
                ),
                action: "Add a short journal note with a mood rating when you log \
                         symptoms."
                    .to_string(),
            });
        }
    }

    out
}
