//! Shared regressor types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for regressor operations.
#[derive(Debug, Error)]
pub enum RegressorError {
    /// Predict was called before training completed
    #[error("model is not trained - run a full training pass before predicting")]
    NotTrained,

    /// Training produced a non-finite loss
    #[error("training diverged at epoch {epoch}: loss {loss} is not finite")]
    Diverged {
        /// 1-based epoch at which the loss went non-finite
        epoch: usize,
        /// The offending loss value
        loss: f32,
    },
}

/// Rounded model output for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Estimated daily calories (kcal)
    pub calories: i32,
    /// Estimated daily protein (g)
    pub protein_g: i32,
    /// Workout intensity score, always within 1-10
    pub intensity: u8,
}

/// Progress event emitted after each training epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochProgress {
    /// 1-based epoch number
    pub epoch: usize,
    /// Completed share of the run, rounded to a whole percent
    pub percent: u8,
    /// Mean squared error over the epoch's batch
    pub loss: f32,
}

/// Summary of a completed training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of epochs executed
    pub epochs_run: usize,
    /// Loss of the final epoch
    pub final_loss: f32,
}
