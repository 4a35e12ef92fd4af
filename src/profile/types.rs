//! User metrics and preference types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for user-supplied metrics.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Weight is not a positive, finite number of kilograms
    #[error("invalid weight: {value} kg (must be a positive number)")]
    InvalidWeight {
        /// The rejected value
        value: f32,
    },

    /// Height is not a positive, finite number of centimeters
    #[error("invalid height: {value} cm (must be a positive number)")]
    InvalidHeight {
        /// The rejected value
        value: f32,
    },
}

/// Self-reported activity level, mapped to a 1-5 factor for the regressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    #[serde(rename = "Sedentary")]
    Sedentary,
    /// Light exercise 1-3 days per week
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    /// Moderate exercise 3-5 days per week
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days per week
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Physical job or twice-daily training
    #[serde(rename = "Extremely Active")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// Map a label to an activity level. Unrecognized labels fall back
    /// to `Sedentary`, so the mapping is total.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Sedentary" => ActivityLevel::Sedentary,
            "Lightly Active" => ActivityLevel::LightlyActive,
            "Moderately Active" => ActivityLevel::ModeratelyActive,
            "Very Active" => ActivityLevel::VeryActive,
            "Extremely Active" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    /// Numeric factor fed to the regressor (1-5).
    pub fn factor(&self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::LightlyActive => 2.0,
            ActivityLevel::ModeratelyActive => 3.0,
            ActivityLevel::VeryActive => 4.0,
            ActivityLevel::ExtremelyActive => 5.0,
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }

    /// Get all levels in ascending order.
    pub fn all() -> Vec<ActivityLevel> {
        vec![
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtremelyActive,
        ]
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Dietary preference selecting a food-source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietPreference {
    /// Vegetarian sources (default)
    #[default]
    #[serde(rename = "veg")]
    Vegetarian,
    /// Non-vegetarian sources
    #[serde(rename = "non-veg")]
    NonVegetarian,
    /// Vegan sources
    #[serde(rename = "vegan")]
    Vegan,
}

impl DietPreference {
    /// Map a label to a diet preference. Unrecognized labels fall back
    /// to `Vegetarian`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "veg" => DietPreference::Vegetarian,
            "non-veg" => DietPreference::NonVegetarian,
            "vegan" => DietPreference::Vegan,
            _ => DietPreference::Vegetarian,
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
            DietPreference::Vegan => "Vegan",
        }
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Body metrics and preferences for one recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Weight in kilograms
    pub weight_kg: f32,
    /// Height in centimeters
    pub height_cm: f32,
    /// Self-reported activity level
    pub activity: ActivityLevel,
    /// Dietary preference
    pub diet: DietPreference,
}

impl UserMetrics {
    /// Create metrics for a recommendation request.
    pub fn new(weight_kg: f32, height_cm: f32, activity: ActivityLevel, diet: DietPreference) -> Self {
        Self {
            weight_kg,
            height_cm,
            activity,
            diet,
        }
    }

    /// Check the basic sanity of the metrics before running the pipeline.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(ProfileError::InvalidWeight {
                value: self.weight_kg,
            });
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(ProfileError::InvalidHeight {
                value: self.height_cm,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_labels_map_to_factors() {
        assert_eq!(ActivityLevel::from_label("Sedentary").factor(), 1.0);
        assert_eq!(ActivityLevel::from_label("Lightly Active").factor(), 2.0);
        assert_eq!(ActivityLevel::from_label("Moderately Active").factor(), 3.0);
        assert_eq!(ActivityLevel::from_label("Very Active").factor(), 4.0);
        assert_eq!(ActivityLevel::from_label("Extremely Active").factor(), 5.0);
    }

    #[test]
    fn test_unrecognized_activity_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::from_label(""), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label("couch potato"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label("sedentary"), ActivityLevel::Sedentary); // case-sensitive
    }

    #[test]
    fn test_diet_labels() {
        assert_eq!(DietPreference::from_label("veg"), DietPreference::Vegetarian);
        assert_eq!(DietPreference::from_label("non-veg"), DietPreference::NonVegetarian);
        assert_eq!(DietPreference::from_label("vegan"), DietPreference::Vegan);
    }

    #[test]
    fn test_unrecognized_diet_falls_back_to_vegetarian() {
        assert_eq!(DietPreference::from_label("carnivore"), DietPreference::Vegetarian);
        assert_eq!(DietPreference::from_label(""), DietPreference::Vegetarian);
    }

    #[test]
    fn test_metrics_validation() {
        let ok = UserMetrics::new(
            70.0,
            170.0,
            ActivityLevel::ModeratelyActive,
            DietPreference::Vegetarian,
        );
        assert!(ok.validate().is_ok());

        let zero_weight = UserMetrics::new(0.0, 170.0, ActivityLevel::Sedentary, DietPreference::Vegan);
        assert!(matches!(
            zero_weight.validate(),
            Err(ProfileError::InvalidWeight { .. })
        ));

        let negative_height =
            UserMetrics::new(70.0, -1.0, ActivityLevel::Sedentary, DietPreference::Vegan);
        assert!(matches!(
            negative_height.validate(),
            Err(ProfileError::InvalidHeight { .. })
        ));

        let nan_weight =
            UserMetrics::new(f32::NAN, 170.0, ActivityLevel::Sedentary, DietPreference::Vegan);
        assert!(nan_weight.validate().is_err());
    }

    #[test]
    fn test_serde_wire_labels() {
        let json = serde_json::to_string(&DietPreference::NonVegetarian).unwrap();
        assert_eq!(json, "\"non-veg\"");

        let level: ActivityLevel = serde_json::from_str("\"Moderately Active\"").unwrap();
        assert_eq!(level, ActivityLevel::ModeratelyActive);
    }
}
