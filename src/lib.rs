//! FitBuddy - Fitness & Nutrition Recommendation Engine
//!
//! Generates personalized workout and nutrition plans from basic body
//! metrics. A small regression network trained on a built-in corpus
//! predicts daily calorie, protein and intensity targets; fixed rule
//! tables then turn the prediction into concrete guidance.

pub mod config;
pub mod profile;
pub mod recommend;
pub mod regressor;
pub mod rules;

// Re-export commonly used types
pub use config::EngineConfig;
pub use profile::types::UserMetrics;
pub use recommend::engine::{RecommendationBundle, RecommendationEngine};
pub use regressor::session::Regressor;
