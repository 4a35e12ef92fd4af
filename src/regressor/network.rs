//! Dense feed-forward network used by the recommendation regressor.
//!
//! Fixed topology: 3 input features -> 16 ReLU -> 8 ReLU -> 3 linear
//! outputs. Weights start Xavier-uniform, biases start at zero.

use rand::rngs::StdRng;
use rand::Rng;

/// Width of the model input (weight, height, activity factor).
pub(crate) const INPUT_FEATURES: usize = 3;
/// Width of the first hidden layer.
pub(crate) const HIDDEN_WIDE: usize = 16;
/// Width of the second hidden layer.
pub(crate) const HIDDEN_NARROW: usize = 8;
/// Width of the model output (calories, protein, intensity).
pub(crate) const OUTPUT_FEATURES: usize = 3;

/// Activation applied after a layer's affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    Relu,
    Linear,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Linear => x,
        }
    }

    /// Derivative with respect to the pre-activation value.
    fn derivative(self, pre_activation: f32) -> f32 {
        match self {
            Activation::Relu => {
                if pre_activation > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Linear => 1.0,
        }
    }
}

/// Fully connected layer computing `activation(W x + b)`.
///
/// Weights are stored row-major: `weights[j * inputs + i]` connects
/// input `i` to output `j`.
#[derive(Debug, Clone)]
pub(crate) struct DenseLayer {
    pub(crate) weights: Vec<f32>,
    pub(crate) biases: Vec<f32>,
    pub(crate) inputs: usize,
    pub(crate) outputs: usize,
    pub(crate) activation: Activation,
}

impl DenseLayer {
    /// Creates a layer with Xavier-uniform weights and zero biases.
    fn xavier(inputs: usize, outputs: usize, activation: Activation, rng: &mut StdRng) -> Self {
        let limit = (6.0 / (inputs + outputs) as f32).sqrt();
        let weights = (0..inputs * outputs)
            .map(|_| rng.gen_range(-limit..limit))
            .collect();
        Self {
            weights,
            biases: vec![0.0; outputs],
            inputs,
            outputs,
            activation,
        }
    }

    /// Applies the layer, writing pre-activations and activations into
    /// the supplied buffers.
    fn forward_into(&self, input: &[f32], pre: &mut Vec<f32>, out: &mut Vec<f32>) {
        pre.clear();
        out.clear();
        for j in 0..self.outputs {
            let mut sum = self.biases[j];
            let row = &self.weights[j * self.inputs..(j + 1) * self.inputs];
            for (weight, value) in row.iter().zip(input) {
                sum += weight * value;
            }
            pre.push(sum);
            out.push(self.activation.apply(sum));
        }
    }
}

/// Per-layer and whole-network forward trace kept for backpropagation.
#[derive(Debug, Default)]
pub(crate) struct ForwardTrace {
    /// Pre-activation values, one vector per layer
    pre: Vec<Vec<f32>>,
    /// Post-activation values, one vector per layer
    post: Vec<Vec<f32>>,
}

impl ForwardTrace {
    /// Final layer activations, i.e. the network output.
    pub(crate) fn output(&self) -> &[f32] {
        self.post.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Gradient buffers mirroring the network's parameter shapes.
#[derive(Debug)]
pub(crate) struct NetworkGradients {
    pub(crate) weights: Vec<Vec<f32>>,
    pub(crate) biases: Vec<Vec<f32>>,
}

impl NetworkGradients {
    fn zeroed(network: &Network) -> Self {
        Self {
            weights: network
                .layers
                .iter()
                .map(|layer| vec![0.0; layer.weights.len()])
                .collect(),
            biases: network
                .layers
                .iter()
                .map(|layer| vec![0.0; layer.biases.len()])
                .collect(),
        }
    }
}

/// The full regression network.
#[derive(Debug, Clone)]
pub(crate) struct Network {
    pub(crate) layers: Vec<DenseLayer>,
}

impl Network {
    /// Builds the fixed 3 -> 16 -> 8 -> 3 topology.
    pub(crate) fn new(rng: &mut StdRng) -> Self {
        Self {
            layers: vec![
                DenseLayer::xavier(INPUT_FEATURES, HIDDEN_WIDE, Activation::Relu, rng),
                DenseLayer::xavier(HIDDEN_WIDE, HIDDEN_NARROW, Activation::Relu, rng),
                DenseLayer::xavier(HIDDEN_NARROW, OUTPUT_FEATURES, Activation::Linear, rng),
            ],
        }
    }

    /// Runs a plain forward pass and returns the three outputs.
    pub(crate) fn forward(&self, input: &[f32; INPUT_FEATURES]) -> [f32; OUTPUT_FEATURES] {
        let trace = self.forward_trace(input);
        let mut output = [0.0; OUTPUT_FEATURES];
        output.copy_from_slice(trace.output());
        output
    }

    /// Forward pass that records every layer's values for backprop.
    pub(crate) fn forward_trace(&self, input: &[f32]) -> ForwardTrace {
        let mut trace = ForwardTrace::default();
        let mut current = input.to_vec();
        for layer in &self.layers {
            let mut pre = Vec::with_capacity(layer.outputs);
            let mut post = Vec::with_capacity(layer.outputs);
            layer.forward_into(&current, &mut pre, &mut post);
            current = post.clone();
            trace.pre.push(pre);
            trace.post.push(post);
        }
        trace
    }

    /// Fresh zeroed gradient buffers matching this network.
    pub(crate) fn gradient_buffers(&self) -> NetworkGradients {
        NetworkGradients::zeroed(self)
    }

    /// Backpropagates `output_grad` (dLoss/dOutput) through the trace,
    /// adding parameter gradients into `grads`.
    pub(crate) fn accumulate_gradients(
        &self,
        input: &[f32],
        trace: &ForwardTrace,
        output_grad: &[f32],
        grads: &mut NetworkGradients,
    ) {
        let mut delta = output_grad.to_vec();
        for (index, layer) in self.layers.iter().enumerate().rev() {
            let pre = &trace.pre[index];
            let layer_input: &[f32] = if index == 0 {
                input
            } else {
                &trace.post[index - 1]
            };

            // dLoss/dPre for this layer
            for (d, z) in delta.iter_mut().zip(pre) {
                *d *= layer.activation.derivative(*z);
            }

            let weight_grads = &mut grads.weights[index];
            let bias_grads = &mut grads.biases[index];
            for j in 0..layer.outputs {
                bias_grads[j] += delta[j];
                for i in 0..layer.inputs {
                    weight_grads[j * layer.inputs + i] += delta[j] * layer_input[i];
                }
            }

            // Propagate to the previous layer's activations
            if index > 0 {
                let mut next_delta = vec![0.0; layer.inputs];
                for j in 0..layer.outputs {
                    for (i, slot) in next_delta.iter_mut().enumerate() {
                        *slot += layer.weights[j * layer.inputs + i] * delta[j];
                    }
                }
                delta = next_delta;
            }
        }
    }
}
