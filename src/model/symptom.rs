//! Symptom vocabulary
//!
//! The fixed set of symptom tags a user can report during a daily check-in.
//! Every tag has a total mapping to a display label so that report text
//! never falls back to raw identifiers.

use serde::{Deserialize, Serialize};

/// A tracked menopause symptom
///
/// Severity for any of these is reported on a 1-5 scale. Tags absent from a
/// day's log mean "not reported", not "zero severity".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymptomType {
    HotFlashes,
    NightSweats,
    MoodSwings,
    Anxiety,
    Depression,
    BrainFog,
    Fatigue,
    Insomnia,
    JointPain,
    Headaches,
    WeightGain,
    IrregularPeriods,
    LowLibido,
    DrySkin,
    HeartPalpitations,
}

impl SymptomType {
    /// Get all symptom types for iteration
    pub fn all() -> &'static [SymptomType] {
        &[
            SymptomType::HotFlashes,
            SymptomType::NightSweats,
            SymptomType::MoodSwings,
            SymptomType::Anxiety,
            SymptomType::Depression,
            SymptomType::BrainFog,
            SymptomType::Fatigue,
            SymptomType::Insomnia,
            SymptomType::JointPain,
            SymptomType::Headaches,
            SymptomType::WeightGain,
            SymptomType::IrregularPeriods,
            SymptomType::LowLibido,
            SymptomType::DrySkin,
            SymptomType::HeartPalpitations,
        ]
    }

    /// Human-readable label used in descriptions and recommendations
    pub fn label(&self) -> &'static str {
        match self {
            SymptomType::HotFlashes => "Hot flashes",
            SymptomType::NightSweats => "Night sweats",
            SymptomType::MoodSwings => "Mood swings",
            SymptomType::Anxiety => "Anxiety",
            SymptomType::Depression => "Depression",
            SymptomType::BrainFog => "Brain fog",
            SymptomType::Fatigue => "Fatigue",
            SymptomType::Insomnia => "Insomnia",
            SymptomType::JointPain => "Joint pain",
            SymptomType::Headaches => "Headaches",
            SymptomType::WeightGain => "Weight gain",
            SymptomType::IrregularPeriods => "Irregular periods",
            SymptomType::LowLibido => "Low libido",
            SymptomType::DrySkin => "Dry skin",
            SymptomType::HeartPalpitations => "Heart palpitations",
        }
    }

    /// Label in lowercase, for use mid-sentence
    pub fn label_lower(&self) -> String {
        self.label().to_lowercase()
    }
}

impl std::fmt::Display for SymptomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(SymptomType::all().len(), 15);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&SymptomType::HotFlashes).unwrap();
        assert_eq!(json, "\"hot_flashes\"");

        let restored: SymptomType = serde_json::from_str("\"brain_fog\"").unwrap();
        assert_eq!(restored, SymptomType::BrainFog);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SymptomType::HotFlashes.label(), "Hot flashes");
        assert_eq!(SymptomType::Anxiety.label_lower(), "anxiety");
    }
}
