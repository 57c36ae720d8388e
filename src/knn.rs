use crate::{error::Result, math::matrix::Matrix};

/// Euclidean distance between two equally shaped matrices.
pub fn distance(a: &Matrix, b: &Matrix) -> Result<f64> {
    Ok(a.subtract(b)?.apply(|x| x * x).sum().sqrt())
}
