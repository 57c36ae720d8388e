use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// Element-wise nonlinearity applied after every layer transition.
///
/// Only the logistic sigmoid is supported. It is chosen statically rather
/// than stored as a closure, so a restored checkpoint always gets it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative expressed through the already-computed output `y = f(x)`.
    ///
    /// For the sigmoid this is `y * (1 - y)`, which spares a second pass
    /// through the exponential during backpropagation.
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
        }
    }

    pub fn activate(&self, z: &Matrix) -> Matrix {
        z.apply(|x| self.function(x))
    }
}
