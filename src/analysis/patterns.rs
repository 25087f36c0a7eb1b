//! Pattern detector
//!
//! Scans one user's chronologically ordered symptom logs for three kinds of
//! structural regularity:
//!
//! - **Day-of-week**: a symptom is reliably worse on one weekday.
//! - **Severity trend**: a symptom's severity drifts up or down over time.
//! - **Frequency trend**: a symptom is reported more or less often than it
//!   used to be.
//!
//! The detector is pure and stateless: it takes a slice of logs (already
//! filtered to the lookback window by the caller) and returns every pattern
//! that clears its effect-size threshold.

use crate::analysis::stats::{linear_fit, mean};
use crate::model::{
    Confidence, DetectedPattern, FrequencyDirection, PatternDetails, SymptomLog, SymptomType,
    TrendDirection,
};
use chrono::Datelike;

/// Distinct weekdays with data required before a symptom is considered
const DAY_PATTERN_MIN_DAYS_WITH_DATA: usize = 3;
/// Peak-minus-lowest average severity required to emit a day-of-week pattern
const DAY_PATTERN_MIN_DIFFERENCE: f64 = 1.0;
/// Difference at or above which a day-of-week pattern is high confidence
const DAY_PATTERN_HIGH_DIFFERENCE: f64 = 1.5;

/// Total logs required before any severity trend is analyzed
const SEVERITY_TREND_MIN_LOGS: usize = 10;
/// Observations of one symptom required for its severity trend
const SEVERITY_TREND_MIN_OBSERVATIONS: usize = 10;
/// |slope| must exceed this to emit a severity trend
const SEVERITY_TREND_MIN_SLOPE: f64 = 0.05;
/// |slope| above this makes a severity trend high confidence
const SEVERITY_TREND_HIGH_SLOPE: f64 = 0.1;

/// Total logs required before frequency trends are analyzed
const FREQUENCY_TREND_MIN_LOGS: usize = 14;
/// Absolute half-to-half occurrence change required to emit
const FREQUENCY_TREND_MIN_CHANGE: i64 = 3;
/// Absolute change at or above which a frequency trend is high confidence
const FREQUENCY_TREND_HIGH_CHANGE: i64 = 5;
/// Alternative emission gate: percent change relative to the first half
const FREQUENCY_TREND_MIN_PERCENT: f64 = 50.0;

/// Full weekday names indexed by days-from-Sunday (0 = Sunday)
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Run all pattern analyses over a log set
///
/// Low-confidence patterns are dropped at the end. None of the current
/// analyses emit `Low`, so this is a safety net for future pattern types.
pub fn detect_patterns(logs: &[SymptomLog]) -> Vec<DetectedPattern> {
    let mut patterns = Vec::new();
    patterns.extend(day_of_week_patterns(logs));
    patterns.extend(severity_trend_patterns(logs));
    patterns.extend(frequency_trend_patterns(logs));
    patterns.retain(|p| p.confidence != Confidence::Low);

    tracing::debug!(count = patterns.len(), "pattern detection complete");
    patterns
}

/// Symptoms observed anywhere in the log set, in first-appearance order
///
/// Logs are scanned chronologically; within one day, symptoms iterate in
/// `SymptomType` declaration order. This ordering is what makes downstream
/// tie-breaks (e.g. the most-frequent-symptom summary field) reproducible.
pub(crate) fn observed_symptoms(logs: &[SymptomLog]) -> Vec<SymptomType> {
    let mut seen = Vec::new();
    for log in logs {
        for &symptom in log.symptoms.keys() {
            if !seen.contains(&symptom) {
                seen.push(symptom);
            }
        }
    }
    seen
}

/// Bucket each symptom's severities by weekday and compare day averages
fn day_of_week_patterns(logs: &[SymptomLog]) -> Vec<DetectedPattern> {
    let mut out = Vec::new();

    for symptom in observed_symptoms(logs) {
        let mut buckets: [Vec<f64>; 7] = Default::default();
        for log in logs {
            if let Some(severity) = log.severity(symptom) {
                let day = log.log_date.weekday().num_days_from_sunday() as usize;
                buckets[day].push(f64::from(severity));
            }
        }

        let days_with_data = buckets.iter().filter(|b| !b.is_empty()).count();
        if days_with_data < DAY_PATTERN_MIN_DAYS_WITH_DATA {
            continue;
        }

        // Ties go to the earliest day in Sunday-first order.
        let mut peak: Option<(usize, f64)> = None;
        let mut lowest: Option<(usize, f64)> = None;
        for (day, bucket) in buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let avg = mean(bucket);
            if peak.map(|(_, best)| avg > best).unwrap_or(true) {
                peak = Some((day, avg));
            }
            if lowest.map(|(_, best)| avg < best).unwrap_or(true) {
                lowest = Some((day, avg));
            }
        }

        let (peak_day, peak_avg) = match peak {
            Some(p) => p,
            None => continue,
        };
        let (lowest_day, lowest_avg) = match lowest {
            Some(l) => l,
            None => continue,
        };

        let difference = peak_avg - lowest_avg;
        if difference < DAY_PATTERN_MIN_DIFFERENCE {
            continue;
        }

        let confidence = if difference >= DAY_PATTERN_HIGH_DIFFERENCE {
            Confidence::High
        } else {
            Confidence::Medium
        };

        out.push(DetectedPattern {
            symptom: Some(symptom),
            description: format!("{} tends to be worse on {}s", symptom.label(), WEEKDAYS[peak_day]),
            confidence,
            details: PatternDetails::DayOfWeek {
                peak_day: WEEKDAYS[peak_day].to_string(),
                lowest_day: WEEKDAYS[lowest_day].to_string(),
                difference,
            },
        });
    }

    out
}

/// Fit a least-squares line to each symptom's severity series
fn severity_trend_patterns(logs: &[SymptomLog]) -> Vec<DetectedPattern> {
    let mut out = Vec::new();
    if logs.len() < SEVERITY_TREND_MIN_LOGS {
        return out;
    }

    for symptom in observed_symptoms(logs) {
        let series: Vec<f64> = logs
            .iter()
            .filter_map(|l| l.severity(symptom))
            .map(f64::from)
            .collect();
        if series.len() < SEVERITY_TREND_MIN_OBSERVATIONS {
            continue;
        }

        let fit = linear_fit(&series);
        if fit.slope.abs() <= SEVERITY_TREND_MIN_SLOPE {
            continue;
        }

        let confidence = if fit.slope.abs() > SEVERITY_TREND_HIGH_SLOPE {
            Confidence::High
        } else {
            Confidence::Medium
        };

        // Lower severity is improvement.
        let direction = if fit.slope < 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Worsening
        };

        // Crude percent estimate: extrapolates the slope across the series
        // and scales by the first observation, so it is unstable when that
        // first value is small. Downstream recommendation text depends on
        // this magnitude; do not change the formula without product sign-off.
        let change_percent = (fit.slope * series.len() as f64 / series[0]).abs() * 100.0;

        let direction_word = match direction {
            TrendDirection::Improving => "improving",
            TrendDirection::Worsening => "worsening",
        };

        out.push(DetectedPattern {
            symptom: Some(symptom),
            description: format!(
                "{} severity has been gradually {} (about {:.0}% change over the tracked period)",
                symptom.label(),
                direction_word,
                change_percent
            ),
            confidence,
            details: PatternDetails::SeverityTrend {
                direction,
                slope: fit.slope,
                change_percent,
            },
        });
    }

    out
}

/// Compare how often each symptom appears in the first vs second half
fn frequency_trend_patterns(logs: &[SymptomLog]) -> Vec<DetectedPattern> {
    let mut out = Vec::new();
    if logs.len() < FREQUENCY_TREND_MIN_LOGS {
        return out;
    }

    let mid = logs.len() / 2;
    let (first_half, second_half) = logs.split_at(mid);

    for symptom in observed_symptoms(logs) {
        let count_first = first_half
            .iter()
            .filter(|l| l.symptoms.contains_key(&symptom))
            .count();
        let count_second = second_half
            .iter()
            .filter(|l| l.symptoms.contains_key(&symptom))
            .count();

        let change = count_second as i64 - count_first as i64;
        let percent_change = if count_first == 0 {
            0.0
        } else {
            change as f64 / count_first as f64 * 100.0
        };

        if change.abs() < FREQUENCY_TREND_MIN_CHANGE
            && percent_change.abs() < FREQUENCY_TREND_MIN_PERCENT
        {
            continue;
        }

        let confidence = if change.abs() >= FREQUENCY_TREND_HIGH_CHANGE {
            Confidence::High
        } else {
            Confidence::Medium
        };

        let direction = if change > 0 {
            FrequencyDirection::Increasing
        } else {
            FrequencyDirection::Decreasing
        };

        let direction_word = match direction {
            FrequencyDirection::Increasing => "more",
            FrequencyDirection::Decreasing => "less",
        };

        out.push(DetectedPattern {
            symptom: Some(symptom),
            description: format!(
                "{} is being reported {} often ({} days recently vs {} before)",
                symptom.label(),
                direction_word,
                count_second,
                count_first
            ),
            confidence,
            details: PatternDetails::FrequencyTrend {
                direction,
                change,
                percent_change,
            },
        });
    }

    out
}
