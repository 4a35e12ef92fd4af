//! Training session for the recommendation regressor.
//!
//! A `Regressor` owns the network, optimizer and RNG for one model
//! lifetime. Training runs lazily through the [`Epochs`] iterator so
//! callers decide whether to drain it silently or surface per-epoch
//! progress; nothing trains until the iterator is advanced.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::profile::ActivityLevel;
use crate::regressor::dataset::TRAINING_CORPUS;
use crate::regressor::network::{Network, OUTPUT_FEATURES};
use crate::regressor::optimizer::Adam;
use crate::regressor::types::{EpochProgress, Prediction, RegressorError, TrainingReport};

/// Default number of training epochs per run.
pub const DEFAULT_EPOCHS: usize = 50;
/// Default Adam learning rate.
pub const DEFAULT_LEARNING_RATE: f32 = 0.01;

/// One trainable model instance.
pub struct Regressor {
    network: Network,
    optimizer: Adam,
    rng: StdRng,
    total_epochs: usize,
    trained: bool,
}

impl Regressor {
    /// Creates a session with default settings and entropy seeding.
    pub fn new() -> Self {
        Self::with_options(DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, None)
    }

    /// Creates a session whose initialization and epoch shuffles are
    /// fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, Some(seed))
    }

    /// Creates a session with explicit epoch count, learning rate and
    /// optional seed.
    pub fn with_options(epochs: usize, learning_rate: f32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            network: Network::new(&mut rng),
            optimizer: Adam::new(learning_rate),
            rng,
            total_epochs: epochs,
            trained: false,
        }
    }

    /// Whether a full training run has completed on this session.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Lazy training run over the built-in corpus.
    ///
    /// Each `next()` fits one epoch and yields its progress. The session
    /// counts as trained only once the final epoch has been consumed;
    /// dropping the iterator early leaves it untrained. A fresh iterator
    /// restarts the epoch count but keeps the current weights.
    pub fn epochs(&mut self) -> Epochs<'_> {
        Epochs {
            session: self,
            completed: 0,
            failed: false,
        }
    }

    /// Runs a full training pass, discarding progress events.
    pub fn train(&mut self) -> Result<TrainingReport, RegressorError> {
        self.train_with_progress(|_| {})
    }

    /// Runs a full training pass, invoking `on_epoch` after every epoch.
    pub fn train_with_progress(
        &mut self,
        mut on_epoch: impl FnMut(&EpochProgress),
    ) -> Result<TrainingReport, RegressorError> {
        let mut last = None;
        for event in self.epochs() {
            let progress = event?;
            on_epoch(&progress);
            last = Some(progress);
        }
        let progress = last.ok_or(RegressorError::NotTrained)?;
        Ok(TrainingReport {
            epochs_run: progress.epoch,
            final_loss: progress.loss,
        })
    }

    /// Predicts daily calories, protein and workout intensity for a
    /// profile. Outputs are rounded to whole numbers and the intensity
    /// is clamped into the 1-10 scale the rule tables expect.
    pub fn predict(
        &self,
        weight_kg: f32,
        height_cm: f32,
        activity: ActivityLevel,
    ) -> Result<Prediction, RegressorError> {
        if !self.trained {
            return Err(RegressorError::NotTrained);
        }
        let output = self
            .network
            .forward(&[weight_kg, height_cm, activity.factor()]);
        Ok(Prediction {
            calories: output[0].round() as i32,
            protein_g: output[1].round() as i32,
            intensity: (output[2].round() as i32).clamp(1, 10) as u8,
        })
    }

    /// Fits one full-batch epoch and returns its mean squared error.
    ///
    /// The corpus is reshuffled every epoch; with twelve rows the whole
    /// corpus forms a single batch, so each epoch is exactly one
    /// optimizer step.
    fn run_epoch(&mut self) -> f32 {
        let mut order: Vec<usize> = (0..TRAINING_CORPUS.len()).collect();
        order.shuffle(&mut self.rng);

        let mut grads = self.network.gradient_buffers();
        let element_count = (TRAINING_CORPUS.len() * OUTPUT_FEATURES) as f32;
        let grad_scale = 2.0 / element_count;
        let mut squared_error_sum = 0.0;

        for &index in &order {
            let example = &TRAINING_CORPUS[index];
            let features = example.features();
            let targets = example.targets();
            let trace = self.network.forward_trace(&features);

            let mut output_grad = [0.0; OUTPUT_FEATURES];
            for (k, slot) in output_grad.iter_mut().enumerate() {
                let diff = trace.output()[k] - targets[k];
                squared_error_sum += diff * diff;
                *slot = grad_scale * diff;
            }
            self.network
                .accumulate_gradients(&features, &trace, &output_grad, &mut grads);
        }

        self.optimizer.step(&mut self.network.layers, &grads);
        squared_error_sum / element_count
    }
}

impl Default for Regressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one training run's epochs. See [`Regressor::epochs`].
pub struct Epochs<'a> {
    session: &'a mut Regressor,
    completed: usize,
    failed: bool,
}

impl Iterator for Epochs<'_> {
    type Item = Result<EpochProgress, RegressorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.completed >= self.session.total_epochs {
            return None;
        }
        let loss = self.session.run_epoch();
        self.completed += 1;
        let epoch = self.completed;

        if !loss.is_finite() {
            self.failed = true;
            return Some(Err(RegressorError::Diverged { epoch, loss }));
        }

        let percent = ((epoch as f32 / self.session.total_epochs as f32) * 100.0).round() as u8;
        if epoch == self.session.total_epochs {
            self.session.trained = true;
        }
        Some(Ok(EpochProgress {
            epoch,
            percent,
            loss,
        }))
    }
}
