use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;
use crate::network::topology::Topology;

/// Fully-connected feedforward network trained by batch backpropagation.
///
/// Data flows column-wise: an input batch is a `dims[0] × N` matrix where
/// every column is one sample. Layer `l` owns `weights[l]`
/// (`dims[l+1] × dims[l]`) and `biases[l]` (length `dims[l+1]`).
///
/// `feed_forward` snapshots every layer's activation into the cache and
/// `back_propagate` consumes that snapshot, so the two are meant to be called
/// in alternation by a single training loop.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    topology: Topology,
    activation: ActivationFunction,
    weights: Vec<Matrix>,
    biases: Vec<Vec<f64>>,
    /// `cache[0]` is the last input, `cache[l]` the output of layer `l - 1`.
    /// Empty until the first successful `feed_forward`.
    cache: Vec<Matrix>,
}

impl NeuralNetwork {
    /// Builds a network with `number_of_layers` weight matrices laid out by
    /// `dims`, every weight and bias drawn uniformly from `[0, 1)` using `rng`.
    pub fn new<R: Rng + ?Sized>(number_of_layers: usize, dims: &[usize], rng: &mut R) -> Result<NeuralNetwork> {
        let topology = Topology::new(number_of_layers, dims)?;
        Ok(NeuralNetwork::from_topology(topology, rng))
    }

    /// Same as `new`, with a `StdRng` seeded from `seed`.
    pub fn with_seed(number_of_layers: usize, dims: &[usize], seed: u64) -> Result<NeuralNetwork> {
        NeuralNetwork::new(number_of_layers, dims, &mut StdRng::seed_from_u64(seed))
    }

    pub fn from_spec(spec: &NetworkSpec) -> NeuralNetwork {
        let mut rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        NeuralNetwork::from_topology(spec.layer_dims.clone(), &mut rng)
    }

    pub fn from_topology<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> NeuralNetwork {
        let layers = topology.number_of_layers();
        let mut weights = Vec::with_capacity(layers);
        let mut biases = Vec::with_capacity(layers);

        for layer in 0..layers {
            let (outputs, inputs) = topology.layer_shape(layer);
            weights.push(Matrix::random_uniform(outputs, inputs, rng));
            biases.push((0..outputs).map(|_| rng.gen::<f64>()).collect());
        }

        let network = NeuralNetwork {
            cache: Vec::with_capacity(layers + 1),
            topology,
            activation: ActivationFunction::Sigmoid,
            weights,
            biases,
        };
        debug!(dims = ?network.topology().dims(), activation = ?network.activation(), "initialized network");
        network
    }

    /// Builds a network from explicit parameters, e.g. to resume from values
    /// produced elsewhere. Every matrix and vector must match `topology`.
    pub fn from_parameters(topology: Topology, weights: Vec<Matrix>, biases: Vec<Vec<f64>>) -> Result<NeuralNetwork> {
        let layers = topology.number_of_layers();
        if weights.len() != layers || biases.len() != layers {
            return Err(NetworkError::DimensionCountMismatch {
                expected: layers,
                got: if weights.len() != layers { weights.len() } else { biases.len() },
            });
        }
        for layer in 0..layers {
            let shape = topology.layer_shape(layer);
            if weights[layer].shape() != shape {
                return Err(NetworkError::ShapeMismatch {
                    context: "NeuralNetwork::from_parameters (weights)",
                    expected: shape,
                    got: weights[layer].shape(),
                });
            }
            if biases[layer].len() != shape.0 {
                return Err(NetworkError::ShapeMismatch {
                    context: "NeuralNetwork::from_parameters (biases)",
                    expected: (shape.0, 1),
                    got: (biases[layer].len(), 1),
                });
            }
        }

        Ok(NeuralNetwork {
            cache: Vec::with_capacity(layers + 1),
            topology,
            activation: ActivationFunction::Sigmoid,
            weights,
            biases,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    /// Activations recorded by the last `feed_forward`.
    pub fn cache(&self) -> &[Matrix] {
        &self.cache
    }

    /// Forward pass over a `dims[0] × N` batch; returns the `dims[L] × N`
    /// output and overwrites the activation cache.
    ///
    /// The cache holds its own copies, so neither `input` nor the returned
    /// matrix aliases internal state.
    pub fn feed_forward(&mut self, input: &Matrix) -> Result<Matrix> {
        let activations = self.forward_layers(input)?;
        let output = activations[activations.len() - 1].clone();
        self.cache = activations;
        Ok(output)
    }

    /// Forward pass that leaves the activation cache untouched.
    pub fn predict(&self, input: &Matrix) -> Result<Matrix> {
        let mut activations = self.forward_layers(input)?;
        Ok(activations.pop().unwrap_or_default())
    }

    /// Applies one gradient-descent step using the activations cached by the
    /// preceding `feed_forward`. `expected_output` must have the same shape as
    /// that call's output.
    ///
    /// The output error is seeded with `A[L] − Y`. On error nothing is updated.
    pub fn back_propagate(&mut self, expected_output: &Matrix, learning_rate: f64) -> Result<()> {
        let layers = self.topology.number_of_layers();
        if self.cache.len() != layers + 1 {
            return Err(NetworkError::MissingForwardPass);
        }
        let output = &self.cache[layers];
        if output.shape() != expected_output.shape() {
            return Err(NetworkError::ShapeMismatch {
                context: "NeuralNetwork::back_propagate",
                expected: output.shape(),
                got: expected_output.shape(),
            });
        }

        let samples = output.cols as f64;
        let activation = self.activation;
        let mut error = output - expected_output;

        for layer in (0..layers).rev() {
            let layer_output = &self.cache[layer + 1];
            let layer_input = &self.cache[layer];

            // dC/dZ = error ⊙ σ'(Z), averaged over the batch
            let d_z = error
                .hadamard(&layer_output.map(|a| activation.derivative_from_output(a)))
                .scale(1.0 / samples);

            let d_w = &d_z * &layer_input.transpose();
            let d_b = d_z.row_sums();

            // must use the weights before this layer's update
            error = &self.weights[layer].transpose() * &d_z;

            self.weights[layer] = &self.weights[layer] - &d_w.scale(learning_rate);
            for (bias, grad) in self.biases[layer].iter_mut().zip(&d_b) {
                *bias -= learning_rate * grad;
            }

            trace!(layer, grad_norm = d_w.data.iter().flatten().map(|g| g * g).sum::<f64>().sqrt(), "updated layer");
        }

        Ok(())
    }

    /// Runs every layer over `input`, returning `[A[0], A[1], …, A[L]]`.
    fn forward_layers(&self, input: &Matrix) -> Result<Vec<Matrix>> {
        if input.rows != self.topology.input_size() {
            return Err(NetworkError::ShapeMismatch {
                context: "NeuralNetwork::feed_forward",
                expected: (self.topology.input_size(), input.cols),
                got: input.shape(),
            });
        }
        if input.cols == 0 {
            return Err(NetworkError::EmptyBatch);
        }

        let mut activations = Vec::with_capacity(self.weights.len() + 1);
        activations.push(input.clone());
        for layer in 0..self.weights.len() {
            let next = self.apply_layer(layer, &activations[layer]);
            activations.push(next);
        }
        Ok(activations)
    }

    /// σ(W·A + b), with `b` broadcast across the batch.
    fn apply_layer(&self, layer: usize, input: &Matrix) -> Matrix {
        (&self.weights[layer] * input)
            .add_column(&self.biases[layer])
            .map(|z| self.activation.function(z))
    }
}
