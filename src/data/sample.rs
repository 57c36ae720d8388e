use crate::{
    error::{Error, Result},
    math::matrix::Matrix,
};

/// Value of the true class in a target vector.
pub const TARGET_ON: f64 = 0.99;
/// Value of every other class in a target vector.
pub const TARGET_OFF: f64 = 0.01;

/// One labeled row of a dataset: a class index and a column of raw features.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: usize,
    pub pixels: Matrix,
}

impl Sample {
    /// Pixels mapped into the sigmoid-friendly range, see [`scale_pixels`].
    pub fn scaled_input(&self) -> Matrix {
        scale_pixels(&self.pixels)
    }
}

/// Maps raw 0..=255 intensities to `(0.01, 1.0]` via `x * 0.99 / 255 + 0.01`.
///
/// Values outside 0..=255 are scaled the same way and not clamped.
pub fn scale_pixels(pixels: &Matrix) -> Matrix {
    pixels.multiply_scalar(0.99 / 255.0).add_scalar(0.01)
}

/// `classes × 1` column holding 0.99 at `label` and 0.01 everywhere else.
pub fn target_vector(label: usize, classes: usize) -> Result<Matrix> {
    if label >= classes {
        return Err(Error::LabelOutOfRange { label, classes });
    }

    let mut values = vec![TARGET_OFF; classes];
    values[label] = TARGET_ON;
    Matrix::from_values(classes, 1, values)
}
