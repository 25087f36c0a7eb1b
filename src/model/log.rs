//! Input records for the insights core
//!
//! This module defines the two record types the analysis consumes:
//! - `SymptomLog`: one day's reported symptom severities plus optional energy
//! - `JournalEntry`: one day's free-text reflection plus optional mood rating
//!
//! Both are read-only within the analysis core. Validation happens on the
//! write path (the check-in flow); the analysis applies arithmetic as-is.

use crate::model::symptom::SymptomType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Valid severity range for a reported symptom (inclusive)
pub const SEVERITY_RANGE: (u8, u8) = (1, 5);

/// Valid energy-level range (inclusive)
pub const ENERGY_RANGE: (u8, u8) = (1, 5);

/// Valid mood-rating range (inclusive)
pub const MOOD_RANGE: (u8, u8) = (1, 4);

/// One day's symptom check-in for a user
///
/// `log_date` is unique per user (the persistence layer upserts). Symptoms
/// use a `BTreeMap` keyed by `SymptomType` so per-day iteration order is
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomLog {
    /// Opaque owner identifier
    pub user_id: String,
    /// Calendar date of the check-in (day granularity)
    pub log_date: NaiveDate,
    /// Reported symptoms and their 1-5 severities; absent = not reported
    #[serde(default)]
    pub symptoms: BTreeMap<SymptomType, u8>,
    /// Optional energy level, 1-5
    #[serde(default)]
    pub energy_level: Option<u8>,
}

impl SymptomLog {
    /// Create an empty log for a user and date
    pub fn new(user_id: impl Into<String>, log_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            log_date,
            symptoms: BTreeMap::new(),
            energy_level: None,
        }
    }

    /// Builder: report a symptom with a severity
    pub fn symptom(mut self, symptom: SymptomType, severity: u8) -> Self {
        self.symptoms.insert(symptom, severity);
        self
    }

    /// Builder: set the energy level
    pub fn energy(mut self, level: u8) -> Self {
        self.energy_level = Some(level);
        self
    }

    /// Severity of a symptom, if reported that day
    pub fn severity(&self, symptom: SymptomType) -> Option<u8> {
        self.symptoms.get(&symptom).copied()
    }

    /// Check all reported values against the expected scales
    ///
    /// Used by the write path; the analysis core does not validate.
    pub fn is_well_formed(&self) -> bool {
        let severities_ok = self
            .symptoms
            .values()
            .all(|&s| in_range(s, SEVERITY_RANGE));
        let energy_ok = self
            .energy_level
            .map(|e| in_range(e, ENERGY_RANGE))
            .unwrap_or(true);
        severities_ok && energy_ok
    }
}

/// One day's journal entry for a user
///
/// The analysis only uses `entry_date` and `mood_rating` for date-matching
/// against symptom logs; `content` is never inspected here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// Opaque owner identifier
    pub user_id: String,
    /// Calendar date of the entry (day granularity)
    pub entry_date: NaiveDate,
    /// Free-text reflection
    pub content: String,
    /// Optional mood rating, 1-4
    #[serde(default)]
    pub mood_rating: Option<u8>,
}

impl JournalEntry {
    /// Create an entry for a user and date
    pub fn new(user_id: impl Into<String>, entry_date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            entry_date,
            content: content.into(),
            mood_rating: None,
        }
    }

    /// Builder: set the mood rating
    pub fn mood(mut self, rating: u8) -> Self {
        self.mood_rating = Some(rating);
        self
    }

    /// Check the mood rating against the expected scale
    pub fn is_well_formed(&self) -> bool {
        self.mood_rating
            .map(|m| in_range(m, MOOD_RANGE))
            .unwrap_or(true)
    }
}

fn in_range(value: u8, (min, max): (u8, u8)) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_log_builder() {
        let log = SymptomLog::new("u1", date(2025, 6, 1))
            .symptom(SymptomType::HotFlashes, 4)
            .symptom(SymptomType::Anxiety, 2)
            .energy(3);

        assert_eq!(log.severity(SymptomType::HotFlashes), Some(4));
        assert_eq!(log.severity(SymptomType::Fatigue), None);
        assert_eq!(log.energy_level, Some(3));
    }

    #[test]
    fn test_log_well_formed() {
        let ok = SymptomLog::new("u1", date(2025, 6, 1)).symptom(SymptomType::Anxiety, 5);
        assert!(ok.is_well_formed());

        let bad_severity = SymptomLog::new("u1", date(2025, 6, 1)).symptom(SymptomType::Anxiety, 6);
        assert!(!bad_severity.is_well_formed());

        let bad_energy = SymptomLog::new("u1", date(2025, 6, 1)).energy(0);
        assert!(!bad_energy.is_well_formed());
    }

    #[test]
    fn test_entry_well_formed() {
        let ok = JournalEntry::new("u1", date(2025, 6, 1), "slept badly").mood(2);
        assert!(ok.is_well_formed());

        let bad = JournalEntry::new("u1", date(2025, 6, 1), "").mood(5);
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_log_serialization_round_trip() {
        let log = SymptomLog::new("u1", date(2025, 6, 1))
            .symptom(SymptomType::BrainFog, 3)
            .energy(2);

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"brain_fog\":3"));

        let restored: SymptomLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, restored);
    }
}
