use crate::{error::Result, math::matrix::Matrix};

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let n = (predicted.rows() * predicted.cols()) as f64;
        let squared = predicted.subtract(expected)?.apply(|x| x * x);
        Ok(squared.sum() / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_squared_differences() {
        let a = Matrix::from_values(2, 1, vec![1.0, 3.0]).unwrap();
        let b = Matrix::from_values(2, 1, vec![0.0, 1.0]).unwrap();
        assert_eq!(MseLoss::loss(&a, &b).unwrap(), 2.5);
    }
}
