use rand::Rng;

use crate::config::Config;
use crate::init;
use crate::math::{self, Matrix};

/// The network maps one scalar input to one scalar output.
pub const NUM_INPUT_NODES: usize = 1;
pub const NUM_OUTPUT_NODES: usize = 1;

/// Single-hidden-layer feed-forward network with sigmoid activations on
/// both layers.
///
/// All four parameter blocks are owned by the instance and updated in place
/// after every training sample. Shapes are fixed at construction:
/// `w1` is `1 x hidden`, `b1` is `1 x hidden`, `w2` is `hidden x 1` and
/// `b2` is `1 x 1`.
pub struct Network {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
    num_hidden_nodes: usize,
    learning_rate: f32,
}

impl Network {
    /// Build a network with freshly initialized parameters.
    ///
    /// Hidden weights and biases use the `sqrt(6)`-bounded scheme, final
    /// weights and bias the `1/sqrt(n)` scheme (see [`crate::init`]).
    pub fn new<R: Rng>(cfg: &Config, rng: &mut R) -> Self {
        let hidden = cfg.num_hidden_nodes;

        let mut w1 = Matrix::zeros(NUM_INPUT_NODES, hidden);
        for i in 0..NUM_INPUT_NODES {
            for j in 0..hidden {
                // Bias node folded into the fan-in.
                w1.set(i, j, init::random_hidden_weight(rng, NUM_INPUT_NODES + 1, 1));
            }
        }
        let mut b1 = Matrix::zeros(1, hidden);
        for j in 0..hidden {
            b1.set(0, j, init::random_hidden_weight(rng, NUM_INPUT_NODES + 1, 1));
        }

        let mut w2 = Matrix::zeros(hidden, NUM_OUTPUT_NODES);
        for j in 0..hidden {
            w2.set(j, 0, init::random_final_weight(rng, hidden));
        }
        let mut b2 = Matrix::zeros(1, NUM_OUTPUT_NODES);
        b2.set(0, 0, init::random_final_weight(rng, hidden));

        Self {
            w1,
            b1,
            w2,
            b2,
            num_hidden_nodes: hidden,
            learning_rate: cfg.learning_rate,
        }
    }

    pub fn num_hidden_nodes(&self) -> usize {
        self.num_hidden_nodes
    }

    /// Forward pass for a single input.
    ///
    /// Returns the scalar output together with the hidden activations,
    /// which the backward pass needs.
    pub fn forward(&self, x: f32) -> (f32, Matrix) {
        let input = Matrix::from_vec(1, NUM_INPUT_NODES, vec![x]);
        let mut hidden = Matrix::matmul(&input, &self.w1).add(&self.b1);
        math::sigmoid_in_place(&mut hidden);
        let mut out = Matrix::matmul(&hidden, &self.w2).add(&self.b2);
        math::sigmoid_in_place(&mut out);
        (out.get(0, 0), hidden)
    }

    /// Evaluate the network at `x`.
    pub fn predict(&self, x: f32) -> f32 {
        self.forward(x).0
    }

    /// One stochastic gradient-descent step on a single `(x, y)` sample.
    ///
    /// The cost is the squared error `(output - y)^2`. All gradients are
    /// computed against the pre-update parameters and only then applied,
    /// matching a simultaneous-update semantics. Returns the prediction and
    /// the cost so the caller can monitor convergence.
    pub fn train_step(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (out, hidden) = self.forward(x);
        let cost = (out - y) * (out - y);

        // d cost / d pre-activation of the output unit.
        let delta_out = 2.0 * (out - y) * math::sigmoid_derivative(out);

        // Hidden deltas use w2 before it is updated.
        let mut delta_hidden = vec![0.0f32; self.num_hidden_nodes];
        for j in 0..self.num_hidden_nodes {
            let h = hidden.get(0, j);
            delta_hidden[j] = delta_out * self.w2.get(j, 0) * math::sigmoid_derivative(h);
        }

        let lr = self.learning_rate;
        for j in 0..self.num_hidden_nodes {
            let g_w2 = delta_out * hidden.get(0, j);
            self.w2.set(j, 0, self.w2.get(j, 0) - lr * g_w2);
        }
        self.b2.set(0, 0, self.b2.get(0, 0) - lr * delta_out);

        for j in 0..self.num_hidden_nodes {
            let g_w1 = delta_hidden[j] * x;
            self.w1.set(0, j, self.w1.get(0, j) - lr * g_w1);
            self.b1.set(0, j, self.b1.get(0, j) - lr * delta_hidden[j]);
        }

        (out, cost)
    }
}
