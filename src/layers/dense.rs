use rand::Rng;

use crate::{activation::activation::ActivationFunction, error::Result, math::matrix::Matrix};

/// One fully connected layer transition without biases.
///
/// `weights` has shape `[size × input_size]`, so a column of activations from
/// the previous layer is mapped by `weights × input`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub weights: Matrix,
}

impl Layer {
    /// Weights drawn uniformly from `[-0.5, 0.5)`.
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::random_with(size, input_size, rng).subtract_scalar(0.5),
        }
    }

    pub fn from_weights(weights: Matrix) -> Layer {
        Layer { weights }
    }

    /// `activator(weights × input)` for a column vector `input`.
    pub fn feed_from(&self, input: &Matrix, activator: ActivationFunction) -> Result<Matrix> {
        let z = self.weights.multiply(input)?;
        Ok(activator.activate(&z))
    }

    /// Error seen by the previous layer: `weightsᵀ × error`.
    ///
    /// Must be called before this layer's weights are adjusted.
    pub fn propagate_error(&self, error: &Matrix) -> Result<Matrix> {
        self.weights.transpose().multiply(error)
    }

    /// Unscaled weight gradient `(error ⊙ f'(output)) × inputᵀ`.
    pub fn compute_gradient(
        &self,
        error: &Matrix,
        output: &Matrix,
        input: &Matrix,
        activator: ActivationFunction,
    ) -> Result<Matrix> {
        let act_derivative = output.apply(|y| activator.derivative_from_output(y));
        let delta = error.multiply_component(&act_derivative)?;
        delta.multiply(&input.transpose())
    }

    /// Replaces the weights with `weights + lr · gradient`.
    pub fn apply_gradient(&mut self, gradient: &Matrix, lr: f64) -> Result<()> {
        self.weights = self.weights.add(&gradient.multiply_scalar(lr))?;
        Ok(())
    }
}
