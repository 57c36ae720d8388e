use crate::{error::Result, layers::dense::Layer, math::matrix::Matrix};

/// Plain per-sample gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one weight update to a layer given its pre-computed gradient.
    pub fn step(&self, layer: &mut Layer, gradient: &Matrix) -> Result<()> {
        layer.apply_gradient(gradient, self.learning_rate)
    }
}
