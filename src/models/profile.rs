use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::nutrition::constants::{DEFAULT_CARBS_PCT, DEFAULT_FAT_PCT, DEFAULT_PROTEIN_PCT};

/// Activity multiplier applied to BMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// All levels in picker order.
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// Level whose factor equals `factor` exactly.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.factor() == factor)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.label(), self.factor())
    }
}

impl FromStr for ActivityLevel {
    type Err = TrackerError;

    /// Accepts a factor ("1.375"), a label ("Lightly Active") or a
    /// kebab/snake name ("lightly-active").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if let Ok(factor) = input.parse::<f64>() {
            return Self::from_factor(factor).ok_or_else(|| {
                TrackerError::InvalidInput(format!("Unknown activity factor: {}", input))
            });
        }

        let normalized: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|level| level.label().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| TrackerError::InvalidInput(format!("Unknown activity level: {}", input)))
    }
}

/// Biometric form fields, kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Kilograms.
    pub weight: String,
    /// Centimeters.
    pub height: String,
    /// Years.
    pub age: String,
    pub activity: ActivityLevel,
}

/// Percentage split of calories across protein, carbs and fat.
///
/// Only usable when the three values sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl MacroSplit {
    pub fn new(protein: &str, carbs: &str, fat: &str) -> Self {
        Self {
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fat: fat.to_string(),
        }
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::new(DEFAULT_PROTEIN_PCT, DEFAULT_CARBS_PCT, DEFAULT_FAT_PCT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725]);
    }

    #[test]
    fn test_activity_from_str() {
        assert_eq!("1.55".parse::<ActivityLevel>().unwrap(), ActivityLevel::ModeratelyActive);
        assert_eq!("Very Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("lightly-active".parse::<ActivityLevel>().unwrap(), ActivityLevel::LightlyActive);
        assert_eq!("sedentary".parse::<ActivityLevel>().unwrap(), ActivityLevel::Sedentary);
        assert!("1.9".parse::<ActivityLevel>().is_err());
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_defaults() {
        let profile = UserProfile::default();
        assert!(profile.weight.is_empty());
        assert_eq!(profile.activity, ActivityLevel::Sedentary);

        let split = MacroSplit::default();
        assert_eq!(split, MacroSplit::new("30", "40", "30"));
    }
}
