//! Adam optimizer for the regression network.

use crate::regressor::network::{DenseLayer, NetworkGradients};

const BETA1: f32 = 0.9;
const BETA2: f32 = 0.999;
const EPSILON: f32 = 1e-8;

/// Adam with bias-corrected first and second moment estimates.
///
/// Moment buffers are laid out as two entries per layer, weights first
/// then biases, and are sized lazily on the first step.
#[derive(Debug)]
pub(crate) struct Adam {
    learning_rate: f32,
    first_moments: Vec<Vec<f32>>,
    second_moments: Vec<Vec<f32>>,
    timestep: i32,
}

impl Adam {
    pub(crate) fn new(learning_rate: f32) -> Self {
        Self {
            learning_rate,
            first_moments: Vec::new(),
            second_moments: Vec::new(),
            timestep: 0,
        }
    }

    /// Applies one update to every parameter tensor in the network.
    pub(crate) fn step(&mut self, layers: &mut [DenseLayer], grads: &NetworkGradients) {
        self.timestep += 1;
        let correction1 = 1.0 - BETA1.powi(self.timestep);
        let correction2 = 1.0 - BETA2.powi(self.timestep);

        if self.first_moments.is_empty() {
            for layer in layers.iter() {
                self.first_moments.push(vec![0.0; layer.weights.len()]);
                self.first_moments.push(vec![0.0; layer.biases.len()]);
                self.second_moments.push(vec![0.0; layer.weights.len()]);
                self.second_moments.push(vec![0.0; layer.biases.len()]);
            }
        }

        for (index, layer) in layers.iter_mut().enumerate() {
            self.update_tensor(
                2 * index,
                correction1,
                correction2,
                &mut layer.weights,
                &grads.weights[index],
            );
            self.update_tensor(
                2 * index + 1,
                correction1,
                correction2,
                &mut layer.biases,
                &grads.biases[index],
            );
        }
    }

    fn update_tensor(
        &mut self,
        slot: usize,
        correction1: f32,
        correction2: f32,
        params: &mut [f32],
        grads: &[f32],
    ) {
        let m = &mut self.first_moments[slot];
        let v = &mut self.second_moments[slot];
        for i in 0..params.len() {
            let grad = grads[i];
            m[i] = BETA1 * m[i] + (1.0 - BETA1) * grad;
            v[i] = BETA2 * v[i] + (1.0 - BETA2) * grad * grad;
            let m_hat = m[i] / correction1;
            let v_hat = v[i] / correction2;
            params[i] -= self.learning_rate * m_hat / (v_hat.sqrt() + EPSILON);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::network::Network;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_param_network() -> Network {
        let mut rng = StdRng::seed_from_u64(0);
        let mut network = Network::new(&mut rng);
        // collapse to a single tracked weight for hand math
        network.layers.truncate(1);
        network.layers[0].weights = vec![1.0];
        network.layers[0].biases = vec![0.0];
        network.layers[0].inputs = 1;
        network.layers[0].outputs = 1;
        network
    }

    #[test]
    fn test_first_step_moves_by_learning_rate() {
        let mut network = single_param_network();
        let mut optimizer = Adam::new(0.01);
        let mut grads = network.gradient_buffers();
        grads.weights[0][0] = 0.5;

        optimizer.step(&mut network.layers, &grads);

        // bias correction makes the very first step ~= lr * sign(grad)
        let expected = 1.0 - 0.01 * (0.5 / (0.5 + EPSILON));
        assert!((network.layers[0].weights[0] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_constant_gradient_keeps_unit_steps() {
        let mut network = single_param_network();
        let mut optimizer = Adam::new(0.01);
        let mut grads = network.gradient_buffers();
        grads.weights[0][0] = 0.5;

        optimizer.step(&mut network.layers, &grads);
        optimizer.step(&mut network.layers, &grads);

        // with a constant gradient m_hat / sqrt(v_hat) stays ~1
        assert!((network.layers[0].weights[0] - 0.98).abs() < 1e-5);
    }

    #[test]
    fn test_zero_gradient_leaves_params_unchanged() {
        let mut network = single_param_network();
        let mut optimizer = Adam::new(0.01);
        let grads = network.gradient_buffers();

        optimizer.step(&mut network.layers, &grads);

        assert_eq!(network.layers[0].weights[0], 1.0);
        assert_eq!(network.layers[0].biases[0], 0.0);
    }

    #[test]
    fn test_bias_tensor_is_updated_too() {
        let mut network = single_param_network();
        let mut optimizer = Adam::new(0.01);
        let mut grads = network.gradient_buffers();
        grads.biases[0][0] = -2.0;

        optimizer.step(&mut network.layers, &grads);

        // negative gradient pushes the bias upward
        assert!(network.layers[0].biases[0] > 0.0);
        assert!((network.layers[0].biases[0] - 0.01).abs() < 1e-6);
    }
}
