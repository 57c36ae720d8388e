use rand::Rng;

use crate::{
    activation::activation::ActivationFunction,
    error::{Error, Result},
    layers::dense::Layer,
    math::matrix::Matrix,
    network::spec::NetworkSpec,
    optim::sgd::Sgd,
};

/// Fully connected sigmoid network trained one sample at a time.
///
/// The node counts are fixed at construction; only the weight matrices change,
/// and only through [`Network::train`].
#[derive(Debug, Clone)]
pub struct Network {
    spec: NetworkSpec,
    layers: Vec<Layer>,
    optimizer: Sgd,
    activator: ActivationFunction,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local generator.
    pub fn new(spec: NetworkSpec) -> Result<Network> {
        Network::with_rng(spec, &mut rand::thread_rng())
    }

    /// Builds a network with weights uniform in `[-0.5, 0.5)` drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(spec: NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;
        let sizes = spec.layer_sizes();
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[1], pair[0], rng))
            .collect();
        Ok(Network::assemble(spec, layers))
    }

    /// Builds a network around explicit weight matrices, one per layer
    /// transition, each shaped `[next × prev]`.
    pub fn from_weights(spec: NetworkSpec, weights: Vec<Matrix>) -> Result<Network> {
        spec.validate()?;
        let sizes = spec.layer_sizes();
        if weights.len() != sizes.len() - 1 {
            return Err(Error::InvalidSpec(format!(
                "expected {} weight matrices, got {}",
                sizes.len() - 1,
                weights.len()
            )));
        }
        for (i, (w, pair)) in weights.iter().zip(sizes.windows(2)).enumerate() {
            if w.dim() != (pair[1], pair[0]) {
                return Err(Error::InvalidSpec(format!(
                    "weight matrix {i} is {}x{}, expected {}x{}",
                    w.rows(),
                    w.cols(),
                    pair[1],
                    pair[0]
                )));
            }
        }

        let layers = weights.into_iter().map(Layer::from_weights).collect();
        Ok(Network::assemble(spec, layers))
    }

    fn assemble(spec: NetworkSpec, layers: Vec<Layer>) -> Network {
        Network {
            optimizer: Sgd::new(spec.learning_rate),
            spec,
            layers,
            activator: ActivationFunction::Sigmoid,
        }
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn input_nodes(&self) -> usize {
        self.spec.input_nodes
    }

    pub fn hidden_nodes(&self) -> &[usize] {
        &self.spec.hidden_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.spec.output_nodes
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    /// Weight matrices in input-to-output order.
    pub fn weights(&self) -> impl Iterator<Item = &Matrix> {
        self.layers.iter().map(|layer| &layer.weights)
    }

    /// Forward pass for an `input_nodes × 1` column vector; returns the
    /// `output_nodes × 1` activations of the last layer.
    pub fn query(&self, input: &Matrix) -> Result<Matrix> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.feed_from(&current, self.activator)?;
        }
        Ok(current)
    }

    /// One backpropagation step on a single sample.
    ///
    /// Layers are updated from the output backwards. Each layer passes its
    /// error on through its weights before those weights are replaced.
    /// Returns the output of the forward pass, i.e. the prediction before the
    /// update was applied.
    pub fn train(&mut self, input: &Matrix, target: &Matrix) -> Result<Matrix> {
        check_column("train input", input, self.spec.input_nodes)?;
        check_column("train target", target, self.spec.output_nodes)?;

        let activations = self.forward(input)?;
        let output = activations[activations.len() - 1].clone();

        let mut error = target.subtract(&output)?;

        for i in (0..self.layers.len()).rev() {
            let gradient = self.layers[i].compute_gradient(
                &error,
                &activations[i + 1],
                &activations[i],
                self.activator,
            )?;

            if i > 0 {
                error = self.layers[i].propagate_error(&error)?;
            }

            self.optimizer.step(&mut self.layers[i], &gradient)?;
        }

        Ok(output)
    }

    /// Activations of every layer, starting with the input itself.
    fn forward(&self, input: &Matrix) -> Result<Vec<Matrix>> {
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(input.clone());
        for layer in &self.layers {
            let next = layer.feed_from(&activations[activations.len() - 1], self.activator)?;
            activations.push(next);
        }
        Ok(activations)
    }
}

fn check_column(op: &'static str, m: &Matrix, len: usize) -> Result<()> {
    if m.dim() != (len, 1) {
        return Err(Error::IncompatibleDimensions {
            op,
            left: (len, 1),
            right: m.dim(),
        });
    }
    Ok(())
}
