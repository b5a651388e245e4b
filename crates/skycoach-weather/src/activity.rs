//! Planned activity and the user's physical condition.
//!
//! Both are closed sets. Free-form input is parsed at the boundary and
//! rejected with a typed error, so scoring never sees an unknown value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::WeatherError;

/// Outdoor activity the user intends to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    #[default]
    Running,
    Walking,
    Cycling,
    OutdoorSports,
    LightExercises,
    OutdoorRest,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::OutdoorSports,
        Self::LightExercises,
        Self::OutdoorRest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::OutdoorSports => "Outdoor Sports",
            Self::LightExercises => "Light Exercises",
            Self::OutdoorRest => "Outdoor Rest",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Activity {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|a| normalize(a.label()) == key)
            .ok_or_else(|| WeatherError::UnknownActivity(s.to_string()))
    }
}

/// Physical condition, ordered from most to least resilient
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalCondition {
    Excellent,
    Good,
    #[default]
    Moderate,
    Sensitive,
    Delicate,
}

impl PhysicalCondition {
    pub const ALL: [PhysicalCondition; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Moderate,
        Self::Sensitive,
        Self::Delicate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Sensitive => "Sensitive",
            Self::Delicate => "Delicate",
        }
    }

    /// Factor applied to the activity score before air and weather penalties
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Excellent => 1.0,
            Self::Good => 0.9,
            Self::Moderate => 0.8,
            Self::Sensitive => 0.6,
            Self::Delicate => 0.4,
        }
    }

    /// Legend text shown next to the condition selector
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Athletic, no limitations",
            Self::Good => "Exercises regularly",
            Self::Moderate => "Occasionally active",
            Self::Sensitive => "Mild respiratory or cardiac issues",
            Self::Delicate => "Health conditions that require care",
        }
    }
}

impl fmt::Display for PhysicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhysicalCondition {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize(c.label()) == key)
            .ok_or_else(|| WeatherError::UnknownCondition(s.to_string()))
    }
}

/// What the user plans to do and how fit they are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityRequest {
    pub activity: Activity,
    pub condition: PhysicalCondition,
}

impl ActivityRequest {
    pub fn new(activity: Activity, condition: PhysicalCondition) -> Self {
        Self {
            activity,
            condition,
        }
    }
}

/// Lowercase and drop separators so "Outdoor Sports", "outdoor-sports" and
/// "outdoor_sports" compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_parses_labels_and_slugs() {
        assert_eq!("Running".parse::<Activity>().unwrap(), Activity::Running);
        assert_eq!(
            "Outdoor Sports".parse::<Activity>().unwrap(),
            Activity::OutdoorSports
        );
        assert_eq!(
            "light-exercises".parse::<Activity>().unwrap(),
            Activity::LightExercises
        );
        assert_eq!(
            "OUTDOOR_REST".parse::<Activity>().unwrap(),
            Activity::OutdoorRest
        );
    }

    #[test]
    fn test_unknown_activity_is_rejected() {
        let err = "Skydiving".parse::<Activity>().unwrap_err();
        assert!(matches!(err, WeatherError::UnknownActivity(ref s) if s == "Skydiving"));
    }

    #[test]
    fn test_condition_parses_case_insensitively() {
        assert_eq!(
            "sensitive".parse::<PhysicalCondition>().unwrap(),
            PhysicalCondition::Sensitive
        );
        assert!(matches!(
            "Superb".parse::<PhysicalCondition>(),
            Err(WeatherError::UnknownCondition(_))
        ));
    }

    #[test]
    fn test_condition_multipliers() {
        let factors: Vec<f64> = PhysicalCondition::ALL
            .iter()
            .map(PhysicalCondition::multiplier)
            .collect();
        assert_eq!(factors, vec![1.0, 0.9, 0.8, 0.6, 0.4]);
    }

    #[test]
    fn test_conditions_ordered_by_resilience() {
        assert!(PhysicalCondition::Excellent < PhysicalCondition::Delicate);
        assert!(PhysicalCondition::Good < PhysicalCondition::Moderate);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Activity::OutdoorSports).unwrap();
        assert_eq!(json, "\"outdoor-sports\"");
        let c: PhysicalCondition = serde_json::from_str("\"delicate\"").unwrap();
        assert_eq!(c, PhysicalCondition::Delicate);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Activity::LightExercises.to_string(), "Light Exercises");
        assert_eq!(PhysicalCondition::Good.to_string(), "Good");
    }
}
