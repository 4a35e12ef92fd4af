//! User profile types: body metrics, activity and diet preferences,
//! BMI calculation.

pub mod bmi;
pub mod types;

// Re-exports for convenience
pub use bmi::{bmi, BmiCategory};
pub use types::{ActivityLevel, DietPreference, ProfileError, UserMetrics};
