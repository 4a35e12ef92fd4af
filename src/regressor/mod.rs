//! Tiny regression network for calorie, protein and intensity targets.
//!
//! The model is a fixed 3 -> 16 -> 8 -> 3 dense network trained with
//! Adam on a twelve-row built-in corpus. Training is cheap enough to
//! run per request, so sessions are short-lived by default.

pub mod dataset;
mod network;
mod optimizer;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use dataset::{TrainingExample, TRAINING_CORPUS};
pub use session::{Epochs, Regressor, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};
pub use types::{EpochProgress, Prediction, RegressorError, TrainingReport};
