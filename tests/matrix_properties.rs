//! Property-based tests for the matrix arithmetic contract.

use digit_net::Matrix;
use proptest::prelude::*;

// Integer-valued entries keep add/subtract exact in f64.
fn matrix_strategy() -> impl Strategy<Value = Matrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-1000i32..1000, rows * cols).prop_map(move |v| {
            Matrix::from_values(rows, cols, v.into_iter().map(f64::from).collect())
                .expect("length matches shape")
        })
    })
}

fn matrix_pair_strategy() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        let cell = proptest::collection::vec(-1000i32..1000, rows * cols);
        (cell.clone(), cell).prop_map(move |(a, b)| {
            let build = |v: Vec<i32>| {
                Matrix::from_values(rows, cols, v.into_iter().map(f64::from).collect())
                    .expect("length matches shape")
            };
            (build(a), build(b))
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_then_subtract_is_identity((a, b) in matrix_pair_strategy()) {
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert!(back.equal(&a));
    }

    #[test]
    fn double_transpose_is_identity(a in matrix_strategy()) {
        prop_assert!(a.transpose().transpose().equal(&a));
    }

    #[test]
    fn transpose_swaps_shape(a in matrix_strategy()) {
        let t = a.transpose();
        prop_assert_eq!(t.dim(), (a.cols(), a.rows()));
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                prop_assert_eq!(a[(i, j)], t[(j, i)]);
            }
        }
    }

    #[test]
    fn multiply_by_identity_is_identity(a in matrix_strategy()) {
        let n = a.cols();
        prop_assert!(a.multiply(&Matrix::identity(n)).unwrap().equal(&a));
    }

    #[test]
    fn zeros_plus_scalar_is_constant(rows in 1usize..8, cols in 1usize..8, k in -100.0f64..100.0) {
        let m = Matrix::zeros(rows, cols).add_scalar(k);
        let constant = Matrix::from_values(rows, cols, vec![k; rows * cols]).unwrap();
        prop_assert!(m.equal(&constant));
    }

    #[test]
    fn arithmetic_leaves_operands_untouched((a, b) in matrix_pair_strategy()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = a.add(&b).unwrap();
        let _ = a.multiply_component(&b).unwrap();
        let _ = a.multiply_scalar(3.0);
        let _ = a.transpose();
        prop_assert!(a.equal(&a0));
        prop_assert!(b.equal(&b0));
    }

    #[test]
    fn product_shape((a, b) in matrix_pair_strategy()) {
        let p = a.multiply(&b.transpose()).unwrap();
        prop_assert_eq!(p.dim(), (a.rows(), b.rows()));
    }

    #[test]
    fn sum_of_constant(rows in 1usize..8, cols in 1usize..8) {
        let m = Matrix::zeros(rows, cols).add_scalar(2.0);
        prop_assert_eq!(m.sum(), 2.0 * (rows * cols) as f64);
    }
}

#[test]
fn random_matrices_differ() {
    let a = Matrix::random(3, 3);
    let b = Matrix::random(3, 3);
    assert!(!a.equal(&b));
    assert!(!a.equal(&Matrix::zeros(3, 3)));
}
