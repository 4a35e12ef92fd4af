//! Rule tables mapping predictions onto workout and nutrition plans.

pub mod nutrition;
pub mod workout;

// Re-exports for convenience
pub use nutrition::{macro_split, nutrition_plan, MacroSplit, NutritionPlan};
pub use workout::{workout_plan, WorkoutPlan, WorkoutTier};
