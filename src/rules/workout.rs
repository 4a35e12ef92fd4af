//! Workout plan selection rules.
//!
//! Plans are fixed tier tables keyed by the predicted intensity score.
//! The tables are constants; every call assembles a fresh plan so
//! request-specific additions never leak into later requests.

use serde::{Deserialize, Serialize};

use crate::profile::BmiCategory;

/// Low tier, intensity 1-4.
const LOW_TIER: [&str; 4] = [
    "Walking: 30 minutes daily",
    "Light Yoga: 20 minutes for flexibility",
    "Stretching: 10 minutes morning routine",
    "Beginner Bodyweight: Squats (2x10), Wall Pushups (2x10)",
];

/// Medium tier, intensity 5-7.
const MEDIUM_TIER: [&str; 4] = [
    "Jogging/Brisk Walk: 45 minutes (3-4x/week)",
    "Cycling: 30 minutes moderate pace",
    "Strength Training: Squats, Pushups, Lunges (3x12)",
    "Pilates: 30 minute session",
];

/// High tier, intensity 8-10.
const HIGH_TIER: [&str; 4] = [
    "HIIT Cardio: 20 minutes intense intervals",
    "Weight Training: Full body compound lifts (4x/week)",
    "Running: 5km at steady pace",
    "Sports: Swimming, Basketball, or Tennis (1 hour)",
];

/// Extra item appended when a high-intensity plan is stepped down.
const JOINT_SAFETY_NOTE: &str = "Low Impact Cardio (Swimming/Elliptical) to protect joints";

/// Intensity band a workout plan is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutTier {
    Low,
    Medium,
    High,
}

impl WorkoutTier {
    /// Maps a 1-10 intensity score onto its tier.
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0..=4 => WorkoutTier::Low,
            5..=7 => WorkoutTier::Medium,
            _ => WorkoutTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutTier::Low => "low",
            WorkoutTier::Medium => "medium",
            WorkoutTier::High => "high",
        }
    }

    fn items(&self) -> &'static [&'static str; 4] {
        match self {
            WorkoutTier::Low => &LOW_TIER,
            WorkoutTier::Medium => &MEDIUM_TIER,
            WorkoutTier::High => &HIGH_TIER,
        }
    }
}

impl std::fmt::Display for WorkoutTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A selected workout plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Tier the items were drawn from, after any step-down
    pub tier: WorkoutTier,
    /// Concrete workout items, in presentation order
    pub items: Vec<String>,
}

/// Builds the workout plan for a predicted intensity and BMI category.
///
/// Obese profiles that land in the high tier are stepped down to the
/// medium tier with a joint-protection item appended.
pub fn workout_plan(intensity: u8, category: BmiCategory) -> WorkoutPlan {
    let tier = WorkoutTier::from_intensity(intensity);
    if category == BmiCategory::Obese && tier == WorkoutTier::High {
        let mut items: Vec<String> = MEDIUM_TIER.iter().map(|s| s.to_string()).collect();
        items.push(JOINT_SAFETY_NOTE.to_string());
        return WorkoutPlan {
            tier: WorkoutTier::Medium,
            items,
        };
    }
    WorkoutPlan {
        tier,
        items: tier.items().iter().map(|s| s.to_string()).collect(),
    }
}
