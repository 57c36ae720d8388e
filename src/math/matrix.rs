use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{Error, Result};

/// Dense row-major matrix of `f64`.
///
/// Every arithmetic operation returns a fresh matrix and leaves its operands
/// untouched. Element `(i, j)` lives at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unchecked serialized form; validated into a `Matrix` on deserialization.
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Matrix> {
        Matrix::from_values(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; element_count(rows, cols)],
        }
    }

    /// Builds a matrix from exactly `rows * cols` values in row-major order.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Matrix> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(Error::ElementCount {
                rows,
                cols,
                got: values.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            data: values,
        })
    }

    /// Uniform samples in `[0, 1)` from the thread-local generator.
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Uniform samples in `[0, 1)` drawn from `rng`, in row-major order.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..element_count(rows, cols)).map(|_| rng.gen::<f64>()).collect();
        Matrix { rows, cols, data }
    }

    pub fn identity(n: usize) -> Matrix {
        let mut res = Matrix::zeros(n, n);
        for i in 0..n {
            res.data[i * n + i] = 1.0;
        }
        res
    }

    /// Parses each string as an integer and stacks the values into a
    /// `len × 1` column vector. Stops at the first entry that fails to parse.
    pub fn from_numeric_strings<S: AsRef<str>>(values: &[S]) -> Result<Matrix> {
        let data = values
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                s.parse::<i64>()
                    .map(|v| v as f64)
                    .map_err(|source| Error::Parse {
                        index,
                        value: s.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Matrix {
            rows: data.len(),
            cols: 1,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Hadamard (element-wise) product.
    pub fn multiply_component(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "multiply_component", |a, b| a * b)
    }

    pub fn add_scalar(&self, c: f64) -> Matrix {
        self.apply(|x| x + c)
    }

    pub fn subtract_scalar(&self, c: f64) -> Matrix {
        self.apply(|x| x - c)
    }

    pub fn multiply_scalar(&self, c: f64) -> Matrix {
        self.apply(|x| x * c)
    }

    /// Matrix product `self × other`.
    ///
    /// Each output element is accumulated over the shared index in ascending
    /// order, so results are reproducible bit-for-bit.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch("multiply", other));
        }

        let mut res = Matrix::zeros(self.rows, other.cols);

        for i in 0..res.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..res.cols {
                let mut sum = 0.0;

                for (k, &a) in lhs_row.iter().enumerate() {
                    sum += a * other.data[k * other.cols + j];
                }

                res.data[i * res.cols + j] = sum;
            }
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[j * res.cols + i] = self.data[i * self.cols + j];
            }
        }

        res
    }

    /// Maps `functor` over every element.
    pub fn apply<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Exact element-wise comparison. Matrices of different shape are never equal.
    pub fn equal(&self, other: &Matrix) -> bool {
        self == other
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dim() != other.dim() {
            return Err(self.mismatch(op, other));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn mismatch(&self, op: &'static str, other: &Matrix) -> Error {
        Error::IncompatibleDimensions {
            op,
            left: self.dim(),
            right: other.dim(),
        }
    }
}

fn element_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(n) => n,
        None => panic!("{rows}x{cols} matrix does not fit in memory"),
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
