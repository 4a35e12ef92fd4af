//! Recommendation engine tying profile analysis, the regressor and the
//! rule tables together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{EngineConfig, RetrainPolicy};
use crate::profile::{bmi, BmiCategory, ProfileError, UserMetrics};
use crate::regressor::{EpochProgress, Prediction, Regressor, RegressorError};
use crate::rules::{nutrition_plan, workout_plan, NutritionPlan, WorkoutPlan};

/// Error types for recommendation requests.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The submitted metrics failed validation
    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),

    /// Model training or prediction failed
    #[error("model error: {0}")]
    Regressor(#[from] RegressorError),
}

/// Complete recommendation produced for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Unique identifier
    pub id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Metrics the recommendation was computed from
    pub metrics: UserMetrics,
    /// BMI rounded to one decimal place
    pub bmi: f32,
    /// Category derived from the rounded BMI
    pub bmi_category: BmiCategory,
    /// Model outputs after rounding and clamping
    pub prediction: Prediction,
    /// Selected workout plan
    pub workout: WorkoutPlan,
    /// Macro targets and food guidance
    pub nutrition: NutritionPlan,
}

/// Generates fitness and nutrition recommendations.
///
/// Each request validates the metrics, obtains a trained model per the
/// configured [`RetrainPolicy`], predicts daily targets and runs the
/// rule tables over the prediction.
pub struct RecommendationEngine {
    config: EngineConfig,
    session: Option<Regressor>,
}

impl RecommendationEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Creates an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The configuration the engine is running with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates a recommendation, discarding training progress.
    pub fn recommend(
        &mut self,
        metrics: &UserMetrics,
    ) -> Result<RecommendationBundle, RecommendError> {
        self.recommend_with_progress(metrics, |_| {})
    }

    /// Generates a recommendation, invoking `on_epoch` for every epoch
    /// of any training run the request triggers.
    pub fn recommend_with_progress(
        &mut self,
        metrics: &UserMetrics,
        on_epoch: impl FnMut(&EpochProgress),
    ) -> Result<RecommendationBundle, RecommendError> {
        // Reject bad input before spending a training run on it
        metrics.validate()?;

        tracing::info!(
            weight_kg = metrics.weight_kg,
            height_cm = metrics.height_cm,
            activity = %metrics.activity,
            diet = %metrics.diet,
            "generating recommendation"
        );

        let session = self.ensure_trained(on_epoch)?;
        let prediction =
            session.predict(metrics.weight_kg, metrics.height_cm, metrics.activity)?;

        let bmi_value = bmi(metrics.weight_kg, metrics.height_cm);
        let category = BmiCategory::from_bmi(bmi_value);
        let workout = workout_plan(prediction.intensity, category);
        let nutrition = nutrition_plan(
            prediction.calories,
            prediction.protein_g,
            category,
            metrics.diet,
        );

        tracing::info!(
            bmi = bmi_value,
            category = %category,
            calories = prediction.calories,
            protein_g = prediction.protein_g,
            intensity = prediction.intensity,
            "recommendation ready"
        );

        Ok(RecommendationBundle {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            metrics: metrics.clone(),
            bmi: bmi_value,
            bmi_category: category,
            prediction,
            workout,
            nutrition,
        })
    }

    /// Returns a trained session, fitting a fresh one when the policy
    /// requires it.
    fn ensure_trained(
        &mut self,
        mut on_epoch: impl FnMut(&EpochProgress),
    ) -> Result<&Regressor, RecommendError> {
        let needs_training = match self.config.retrain {
            RetrainPolicy::EveryRequest => true,
            RetrainPolicy::ReuseTrained => {
                !self.session.as_ref().is_some_and(Regressor::is_trained)
            }
        };

        if needs_training {
            let mut session = Regressor::with_options(
                self.config.epochs,
                self.config.learning_rate,
                self.config.seed,
            );
            let report = session.train_with_progress(&mut on_epoch)?;
            tracing::debug!(
                epochs = report.epochs_run,
                final_loss = report.final_loss,
                "training complete"
            );
            self.session = Some(session);
        }

        self.session
            .as_ref()
            .ok_or(RecommendError::Regressor(RegressorError::NotTrained))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, DietPreference};

    fn seeded_config(seed: u64) -> EngineConfig {
        EngineConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn sample_metrics() -> UserMetrics {
        UserMetrics::new(
            70.0,
            170.0,
            ActivityLevel::ModeratelyActive,
            DietPreference::Vegetarian,
        )
    }

    #[test]
    fn test_engine_exposes_its_configuration() {
        let config = EngineConfig {
            epochs: 12,
            seed: Some(5),
            ..Default::default()
        };
        let engine = RecommendationEngine::new(config.clone());
        assert_eq!(engine.config(), &config);
    }

    #[test]
    fn test_recommendation_covers_every_section() {
        let mut engine = RecommendationEngine::new(seeded_config(42));
        let bundle = engine.recommend(&sample_metrics()).unwrap();

        assert_eq!(bundle.bmi, 24.2);
        assert_eq!(bundle.bmi_category, BmiCategory::Normal);
        assert!((1..=10).contains(&bundle.prediction.intensity));
        assert!(!bundle.workout.items.is_empty());
        assert_eq!(bundle.nutrition.tips.len(), 6);
        assert!(bundle.nutrition.tips[0].starts_with("Targets:"));
    }

    #[test]
    fn test_progress_events_cover_the_whole_run() {
        let mut engine = RecommendationEngine::new(seeded_config(42));
        let mut percents = Vec::new();
        engine
            .recommend_with_progress(&sample_metrics(), |progress| {
                percents.push(progress.percent);
            })
            .unwrap();

        assert_eq!(percents.len(), 50);
        assert_eq!(*percents.last().unwrap(), 100);
    }

    #[test]
    fn test_invalid_metrics_fail_before_training() {
        let mut engine = RecommendationEngine::new(seeded_config(1));
        let bad = UserMetrics::new(
            0.0,
            170.0,
            ActivityLevel::Sedentary,
            DietPreference::Vegan,
        );

        let mut events = 0;
        let result = engine.recommend_with_progress(&bad, |_| events += 1);

        assert!(matches!(result, Err(RecommendError::Profile(_))));
        assert_eq!(events, 0);
    }

    #[test]
    fn test_reuse_policy_trains_only_once() {
        let mut engine = RecommendationEngine::new(EngineConfig {
            retrain: RetrainPolicy::ReuseTrained,
            seed: Some(7),
            ..Default::default()
        });

        let mut first_events = 0;
        let first = engine
            .recommend_with_progress(&sample_metrics(), |_| first_events += 1)
            .unwrap();
        assert_eq!(first_events, 50);

        let mut second_events = 0;
        let second = engine
            .recommend_with_progress(&sample_metrics(), |_| second_events += 1)
            .unwrap();
        assert_eq!(second_events, 0);

        // same fitted model, same input, same output
        assert_eq!(first.prediction, second.prediction);
    }

    #[test]
    fn test_every_request_policy_retrains_each_time() {
        let mut engine = RecommendationEngine::new(seeded_config(7));

        let mut first_events = 0;
        engine
            .recommend_with_progress(&sample_metrics(), |_| first_events += 1)
            .unwrap();
        let mut second_events = 0;
        engine
            .recommend_with_progress(&sample_metrics(), |_| second_events += 1)
            .unwrap();

        assert_eq!(first_events, 50);
        assert_eq!(second_events, 50);
    }

    #[test]
    fn test_same_seed_gives_identical_bundles() {
        let mut a = RecommendationEngine::new(seeded_config(9));
        let mut b = RecommendationEngine::new(seeded_config(9));

        let bundle_a = a.recommend(&sample_metrics()).unwrap();
        let bundle_b = b.recommend(&sample_metrics()).unwrap();

        assert_eq!(bundle_a.prediction, bundle_b.prediction);
        assert_eq!(bundle_a.workout, bundle_b.workout);
        assert_eq!(bundle_a.nutrition, bundle_b.nutrition);
    }

    #[test]
    fn test_obese_profile_gets_stepped_down_plan() {
        // 110 kg at 170 cm is deep into the obese band
        let mut engine = RecommendationEngine::new(seeded_config(42));
        let metrics = UserMetrics::new(
            110.0,
            170.0,
            ActivityLevel::ExtremelyActive,
            DietPreference::NonVegetarian,
        );
        let bundle = engine.recommend(&metrics).unwrap();

        assert_eq!(bundle.bmi_category, BmiCategory::Obese);
        if bundle.prediction.intensity >= 8 {
            assert_eq!(bundle.workout.items.len(), 5);
        }
        assert_eq!(
            bundle.nutrition.tips[5],
            "Focus on calorie deficit. Reduce processed sugars."
        );
    }
}
