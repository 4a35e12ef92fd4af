//! Built-in training corpus for the recommendation regressor.
//!
//! Twelve reference profiles spanning 50-110 kg, 155-185 cm and every
//! activity level, each labelled with daily calories, protein grams and
//! a workout intensity score. The table is fixed at compile time; every
//! training run fits against all twelve rows.

/// One labelled reference profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingExample {
    /// Body weight in kilograms
    pub weight_kg: f32,
    /// Height in centimeters
    pub height_cm: f32,
    /// Activity level factor, 1 (sedentary) through 5 (extremely active)
    pub activity_level: u8,
    /// Target daily calories (kcal)
    pub calories: f32,
    /// Target daily protein (g)
    pub protein_g: f32,
    /// Target workout intensity, 1-10 scale
    pub intensity: f32,
}

impl TrainingExample {
    const fn new(
        weight_kg: f32,
        height_cm: f32,
        activity_level: u8,
        calories: f32,
        protein_g: f32,
        intensity: f32,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            activity_level,
            calories,
            protein_g,
            intensity,
        }
    }

    /// Model input vector: weight, height, activity factor.
    pub fn features(&self) -> [f32; 3] {
        [self.weight_kg, self.height_cm, self.activity_level as f32]
    }

    /// Model target vector: calories, protein, intensity.
    pub fn targets(&self) -> [f32; 3] {
        [self.calories, self.protein_g, self.intensity]
    }
}

/// The full training corpus. The last two rows anchor heavier sedentary
/// profiles to moderate calorie targets so the fit does not extrapolate
/// weight into intensity.
pub const TRAINING_CORPUS: [TrainingExample; 12] = [
    TrainingExample::new(50.0, 160.0, 1, 1500.0, 60.0, 2.0),
    TrainingExample::new(60.0, 165.0, 2, 1800.0, 80.0, 4.0),
    TrainingExample::new(70.0, 170.0, 3, 2200.0, 120.0, 6.0),
    TrainingExample::new(80.0, 175.0, 4, 2600.0, 150.0, 8.0),
    TrainingExample::new(90.0, 180.0, 5, 3000.0, 180.0, 10.0),
    TrainingExample::new(55.0, 155.0, 1, 1400.0, 55.0, 2.0),
    TrainingExample::new(65.0, 160.0, 2, 1700.0, 75.0, 4.0),
    TrainingExample::new(75.0, 175.0, 3, 2100.0, 110.0, 6.0),
    TrainingExample::new(85.0, 180.0, 4, 2500.0, 140.0, 8.0),
    TrainingExample::new(95.0, 185.0, 5, 2900.0, 170.0, 10.0),
    TrainingExample::new(100.0, 170.0, 1, 2000.0, 90.0, 2.0),
    TrainingExample::new(110.0, 175.0, 1, 2200.0, 100.0, 2.0),
];
