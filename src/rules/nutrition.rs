//! Nutrition guidance rules.
//!
//! Splits the predicted calorie target into macros (25% of calories
//! from fat, protein as predicted, carbs from the remainder) and picks
//! food suggestions from fixed per-diet tables.

use serde::{Deserialize, Serialize};

use crate::profile::{BmiCategory, DietPreference};

const VEG_FOODS: [&str; 3] = [
    "Protein: Paneer, Lentils (Dal), Chickpeas, Greek Yogurt, Quinoa",
    "Fats: Almonds, Walnuts, Ghee, Olive Oil",
    "Carbs: Brown Rice, Roti, Oats, Sweet Potato",
];

const NON_VEG_FOODS: [&str; 3] = [
    "Protein: Chicken Breast, Eggs, Fish, Lean Mutton",
    "Fats: Fish Oil, Egg Yolk, Avocado, Nuts",
    "Carbs: Rice, Whole Wheat Bread, Potatoes",
];

const VEGAN_FOODS: [&str; 3] = [
    "Protein: Tofu, Soy Chunks, Lentils, Black Beans, Nutritional Yeast",
    "Fats: Avocado, Flax Seeds, Chia Seeds, Coconut Oil",
    "Carbs: Quinoa, Buckwheat, Fruits, Vegetables",
];

const HYDRATION_TIP: &str = "Hydration: Drink at least 3-4 liters of water daily.";
const DEFICIT_TIP: &str = "Focus on calorie deficit. Reduce processed sugars.";
const BALANCED_TIP: &str = "Maintain a balanced diet with whole foods.";

/// Daily macro targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: u32,
    pub fat_g: u32,
    pub carb_g: u32,
}

/// A selected nutrition plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Gram targets shown on the first tip line
    pub macros: MacroSplit,
    /// Guidance lines, in presentation order
    pub tips: Vec<String>,
}

/// Derives fat and carb grams from the calorie and protein targets.
///
/// Fat covers 25% of calories at 9 kcal/g; carbs absorb whatever the
/// raw protein and fat leave over at 4 kcal/g. The raw values feed the
/// formula unchanged, then each stored gram count is floored at zero.
pub fn macro_split(calories: i32, protein_g: i32) -> MacroSplit {
    let fat = (calories as f32 * 0.25 / 9.0).round();
    let carb = ((calories as f32 - protein_g as f32 * 4.0 - fat * 9.0) / 4.0).round();
    MacroSplit {
        protein_g: clamp_grams("protein", protein_g as f32),
        fat_g: clamp_grams("fat", fat),
        carb_g: clamp_grams("carb", carb),
    }
}

fn clamp_grams(name: &str, grams: f32) -> u32 {
    if grams < 0.0 {
        tracing::warn!("{} target {}g is negative, clamping to zero", name, grams);
        0
    } else {
        grams as u32
    }
}

fn diet_foods(diet: DietPreference) -> &'static [&'static str; 3] {
    match diet {
        DietPreference::Vegetarian => &VEG_FOODS,
        DietPreference::NonVegetarian => &NON_VEG_FOODS,
        DietPreference::Vegan => &VEGAN_FOODS,
    }
}

/// Builds the nutrition plan for a prediction and profile.
///
/// Tips always come out in the same order: the macro targets line,
/// three food suggestion lines for the diet, a hydration reminder and
/// a closing line keyed to whether the BMI category calls for a
/// calorie deficit.
pub fn nutrition_plan(
    calories: i32,
    protein_g: i32,
    category: BmiCategory,
    diet: DietPreference,
) -> NutritionPlan {
    let macros = macro_split(calories, protein_g);

    let mut tips = Vec::with_capacity(6);
    tips.push(format!(
        "Targets: {}g Protein | {}g Fats | {}g Carbs",
        macros.protein_g, macros.fat_g, macros.carb_g
    ));
    for line in diet_foods(diet) {
        tips.push(line.to_string());
    }
    tips.push(HYDRATION_TIP.to_string());
    if category.needs_calorie_deficit() {
        tips.push(DEFICIT_TIP.to_string());
    } else {
        tips.push(BALANCED_TIP.to_string());
    }

    NutritionPlan { macros, tips }
}
