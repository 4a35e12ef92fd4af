//! End-to-end recommendation pipeline.

pub mod engine;

// Re-exports for convenience
pub use engine::{RecommendError, RecommendationBundle, RecommendationEngine};
