//! Correlation finder
//!
//! Computes Pearson correlations across one user's history:
//!
//! - symptom severity vs energy level (same log)
//! - symptom severity vs journal mood rating (matched by calendar date)
//! - symptom severity vs another symptom's severity (same log)
//!
//! Pairings below the sample-size or strength gates are never reported.

use crate::analysis::patterns::observed_symptoms;
use crate::analysis::stats::pearson_correlation;
use crate::model::{Correlation, CorrelationKind, JournalEntry, SymptomLog, SymptomType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Paired observations required for any correlation
const MIN_SAMPLE_SIZE: usize = 5;
/// |r| required for symptom-energy and symptom-mood correlations
const MIN_STRENGTH: f64 = 0.5;
/// |r| required for symptom-symptom correlations. Co-reported symptoms
/// correlate spuriously more often, so they are held to a higher bar.
const MIN_SYMPTOM_PAIR_STRENGTH: f64 = 0.6;

/// Display label for the energy variable
const ENERGY_LABEL: &str = "Energy Level";
/// Display label for the mood variable
const MOOD_LABEL: &str = "Mood";

/// Find all qualifying correlations in a user's logs and journal entries
pub fn find_correlations(logs: &[SymptomLog], entries: &[JournalEntry]) -> Vec<Correlation> {
    let mut correlations = Vec::new();
    correlations.extend(symptom_energy_correlations(logs));
    correlations.extend(symptom_mood_correlations(logs, entries));
    correlations.extend(symptom_pair_correlations(logs));

    // Redundant with the per-path gates; kept as a safety net so no weak
    // or under-sampled correlation can slip through a future path.
    correlations.retain(|c| c.strength.abs() >= MIN_STRENGTH && c.sample_size >= MIN_SAMPLE_SIZE);

    tracing::debug!(count = correlations.len(), "correlation scan complete");
    correlations
}

/// Correlate each symptom's severity with the same-day energy level
fn symptom_energy_correlations(logs: &[SymptomLog]) -> Vec<Correlation> {
    let mut out = Vec::new();

    let with_energy: Vec<&SymptomLog> = logs.iter().filter(|l| l.energy_level.is_some()).collect();
    if with_energy.len() < MIN_SAMPLE_SIZE {
        return out;
    }

    for symptom in observed_symptoms(logs) {
        let (severities, energies): (Vec<f64>, Vec<f64>) = with_energy
            .iter()
            .filter_map(|l| match (l.severity(symptom), l.energy_level) {
                (Some(s), Some(e)) => Some((f64::from(s), f64::from(e))),
                _ => None,
            })
            .unzip();

        if severities.len() < MIN_SAMPLE_SIZE {
            continue;
        }

        let r = pearson_correlation(&severities, &energies);
        if r.abs() < MIN_STRENGTH {
            continue;
        }

        out.push(Correlation {
            kind: CorrelationKind::SymptomEnergy,
            variable_a: symptom.label().to_string(),
            variable_b: ENERGY_LABEL.to_string(),
            strength: r,
            description: format!(
                "Higher {} severity correlates with {} energy",
                symptom.label_lower(),
                if r < 0.0 { "lower" } else { "higher" }
            ),
            sample_size: severities.len(),
        });
    }

    out
}

/// Correlate each symptom's severity with the mood rating journaled that day
fn symptom_mood_correlations(logs: &[SymptomLog], entries: &[JournalEntry]) -> Vec<Correlation> {
    let mut out = Vec::new();

    // Mood by calendar date, for exact-date matching against logs.
    let mood_by_date: HashMap<NaiveDate, f64> = entries
        .iter()
        .filter_map(|e| e.mood_rating.map(|m| (e.entry_date, f64::from(m))))
        .collect();
    if mood_by_date.is_empty() {
        return out;
    }

    for symptom in observed_symptoms(logs) {
        let (severities, moods): (Vec<f64>, Vec<f64>) = logs
            .iter()
            .filter_map(|l| match (l.severity(symptom), mood_by_date.get(&l.log_date)) {
                (Some(s), Some(&m)) => Some((f64::from(s), m)),
                _ => None,
            })
            .unzip();

        if severities.len() < MIN_SAMPLE_SIZE {
            continue;
        }

        let r = pearson_correlation(&severities, &moods);
        if r.abs() < MIN_STRENGTH {
            continue;
        }

        out.push(Correlation {
            kind: CorrelationKind::SymptomMood,
            variable_a: symptom.label().to_string(),
            variable_b: MOOD_LABEL.to_string(),
            strength: r,
            description: format!(
                "Higher {} severity correlates with {} mood",
                symptom.label_lower(),
                if r < 0.0 { "lower" } else { "higher" }
            ),
            sample_size: severities.len(),
        });
    }

    out
}

/// Correlate every unordered pair of symptoms over their co-occurring days
fn symptom_pair_correlations(logs: &[SymptomLog]) -> Vec<Correlation> {
    let mut out = Vec::new();
    let symptoms = observed_symptoms(logs);

    for (i, &symptom_a) in symptoms.iter().enumerate() {
        for &symptom_b in &symptoms[i + 1..] {
            let (series_a, series_b) = co_occurring_severities(logs, symptom_a, symptom_b);
            if series_a.len() < MIN_SAMPLE_SIZE {
                continue;
            }

            let r = pearson_correlation(&series_a, &series_b);
            if r.abs() < MIN_SYMPTOM_PAIR_STRENGTH {
                continue;
            }

            out.push(Correlation {
                kind: CorrelationKind::SymptomSymptom,
                variable_a: symptom_a.label().to_string(),
                variable_b: symptom_b.label().to_string(),
                strength: r,
                description: format!(
                    "{} and {} tend to {}",
                    symptom_a.label(),
                    symptom_b.label_lower(),
                    if r > 0.0 {
                        "rise and fall together"
                    } else {
                        "move in opposite directions"
                    }
                ),
                sample_size: series_a.len(),
            });
        }
    }

    out
}

/// Severity series for two symptoms over the days where both were reported
fn co_occurring_severities(
    logs: &[SymptomLog],
    a: SymptomType,
    b: SymptomType,
) -> (Vec<f64>, Vec<f64>) {
    logs.iter()
        .filter_map(|l| match (l.severity(a), l.severity(b)) {
            (Some(sa), Some(sb)) => Some((f64::from(sa), f64::from(sb))),
            _ => None,
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn log(day: u32) -> SymptomLog {
        SymptomLog::new("u1", date(day))
    }

    #[test]
    fn test_symptom_energy_negative_correlation() {
        // Anxiety climbing while energy falls, over 6 days.
        let severities = [1u8, 2, 2, 3, 4, 5];
        let energies = [5u8, 5, 4, 3, 2, 1];
        let logs: Vec<SymptomLog> = severities
            .iter()
            .zip(energies.iter())
            .enumerate()
            .map(|(i, (&s, &e))| {
                log(1 + i as u32)
                    .symptom(SymptomType::Anxiety, s)
                    .energy(e)
            })
            .collect();

        let correlations = find_correlations(&logs, &[]);
        assert_eq!(correlations.len(), 1);

        let c = &correlations[0];
        assert_eq!(c.kind, CorrelationKind::SymptomEnergy);
        assert_eq!(c.variable_a, "Anxiety");
        assert_eq!(c.variable_b, "Energy Level");
        assert!(c.strength < -0.6);
        assert_eq!(c.sample_size, 6);
        assert!(c.description.contains("lower energy"));
    }

    #[test]
    fn test_energy_sample_size_gate() {
        // Perfect correlation but only 4 co-observations: must not appear.
        let logs: Vec<SymptomLog> = (0..4)
            .map(|i| {
                log(1 + i as u32)
                    .symptom(SymptomType::Fatigue, 1 + i as u8)
                    .energy(5 - i as u8)
            })
            // Pad with energy-only logs so the >= 5 logs-with-energy gate
            // passes and the per-symptom pair count is what gets tested.
            .chain((0..3).map(|i| log(10 + i as u32).energy(3)))
            .collect();

        assert!(find_correlations(&logs, &[]).is_empty());
    }

    #[test]
    fn test_symptom_mood_matched_by_date() {
        // Brain fog severity inverse to journaled mood on matching days.
        let severities = [1u8, 2, 3, 4, 4, 5];
        let moods = [4u8, 4, 3, 2, 2, 1];

        let logs: Vec<SymptomLog> = severities
            .iter()
            .enumerate()
            .map(|(i, &s)| log(1 + i as u32).symptom(SymptomType::BrainFog, s))
            .collect();
        let entries: Vec<JournalEntry> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| JournalEntry::new("u1", date(1 + i as u32), "note").mood(m))
            .collect();

        let correlations = find_correlations(&logs, &entries);
        assert_eq!(correlations.len(), 1);

        let c = &correlations[0];
        assert_eq!(c.kind, CorrelationKind::SymptomMood);
        assert_eq!(c.variable_b, "Mood");
        assert!(c.strength < -0.5);
        assert_eq!(c.sample_size, 6);
    }

    #[test]
    fn test_mood_requires_rating_and_matching_date() {
        let logs: Vec<SymptomLog> = (0..6)
            .map(|i| log(1 + i as u32).symptom(SymptomType::BrainFog, 1 + i as u8 % 5))
            .collect();

        // Entries on non-matching dates, or without a mood rating.
        let entries = vec![
            JournalEntry::new("u1", date(20), "unmatched").mood(1),
            JournalEntry::new("u1", date(1), "no rating"),
        ];

        assert!(find_correlations(&logs, &entries).is_empty());
    }

    #[test]
    fn test_symptom_pair_correlation() {
        // Hot flashes and night sweats moving together on 6 shared days.
        let pairs = [(1u8, 1u8), (2, 2), (3, 3), (4, 4), (5, 5), (3, 3)];
        let logs: Vec<SymptomLog> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| {
                log(1 + i as u32)
                    .symptom(SymptomType::HotFlashes, a)
                    .symptom(SymptomType::NightSweats, b)
            })
            .collect();

        let correlations = find_correlations(&logs, &[]);
        assert_eq!(correlations.len(), 1);

        let c = &correlations[0];
        assert_eq!(c.kind, CorrelationKind::SymptomSymptom);
        assert_eq!(c.variable_a, "Hot flashes");
        assert_eq!(c.variable_b, "Night sweats");
        assert!(c.strength > 0.9);
        assert!(c.description.contains("rise and fall together"));
    }

    #[test]
    fn test_symptom_pair_needs_five_co_occurring_days() {
        // Perfectly correlated but only 4 days report both symptoms.
        let logs: Vec<SymptomLog> = (0..4)
            .map(|i| {
                log(1 + i as u32)
                    .symptom(SymptomType::HotFlashes, 1 + i as u8)
                    .symptom(SymptomType::NightSweats, 1 + i as u8)
            })
            .chain((0..4).map(|i| log(10 + i as u32).symptom(SymptomType::HotFlashes, 3)))
            .collect();

        assert!(find_correlations(&logs, &[]).is_empty());
    }
}
