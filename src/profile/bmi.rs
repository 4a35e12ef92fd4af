//! Body mass index calculation and categorisation.

use serde::{Deserialize, Serialize};

/// Calculate BMI from weight and height, rounded to one decimal.
///
/// ```text
/// BMI = weight_kg / (height_cm / 100)²
/// ```
///
/// The rounded value is the one displayed and the one categorised, so the
/// two always agree at the category boundaries.
pub fn bmi(weight_kg: f32, height_cm: f32) -> f32 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 10.0).round() / 10.0
}

/// Body mass category derived from BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 24.9
    Normal,
    /// BMI 25.0 to 29.9
    Overweight,
    /// BMI 30.0 and above
    Obese,
}

impl BmiCategory {
    /// Categorise a BMI value. Boundary values belong to the higher
    /// category (18.5 is Normal, 25.0 is Overweight, 30.0 is Obese).
    pub fn from_bmi(bmi: f32) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Whether nutrition advice should steer toward a calorie deficit.
    pub fn needs_calorie_deficit(&self) -> bool {
        matches!(self, BmiCategory::Overweight | BmiCategory::Obese)
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
