//! Finite-difference gradient checking for loss functions of a weight matrix.

use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::math::matrix::Matrix;

/// Centered-difference gradient of `f` at `w`:
///   ∂f/∂w_k ≈ (f(w + h·e_k) - f(w - h·e_k)) / 2h
///
/// `w` is not modified; every probe runs on a private copy.
pub fn numerical_gradient<F>(f: F, w: &Matrix, h: f64) -> Matrix
where
    F: Fn(&Matrix) -> f64,
{
    let mut grad = Matrix::zeros(w.rows, w.cols);
    for i in 0..w.rows {
        for j in 0..w.cols {
            grad.data[i][j] = centered_difference(&f, w, i, j, h);
        }
    }
    grad
}

fn centered_difference<F>(f: &F, w: &Matrix, i: usize, j: usize, h: f64) -> f64
where
    F: Fn(&Matrix) -> f64,
{
    let mut probe = w.clone();
    let original = w.data[i][j];

    probe.data[i][j] = original + h;
    let f_plus = f(&probe);
    probe.data[i][j] = original - h;
    let f_minus = f(&probe);

    (f_plus - f_minus) / (2.0 * h)
}

/// One entry compared by `grad_check_sparse`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradCheckSample {
    pub row: usize,
    pub col: usize,
    pub numerical: f64,
    pub analytic: f64,
    pub relative_error: f64,
}

/// Compares `analytic` against centered differences at `num_checks` randomly
/// chosen entries of `w`. Cheaper than `numerical_gradient` for large W.
pub fn grad_check_sparse<F, R>(
    f: F,
    w: &Matrix,
    analytic: &Matrix,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Vec<GradCheckSample>
where
    F: Fn(&Matrix) -> f64,
    R: Rng + ?Sized,
{
    assert_eq!(w.shape(), analytic.shape(), "Matrices are of incorrect sizes");
    if w.rows == 0 || w.cols == 0 {
        return Vec::new();
    }

    (0..num_checks)
        .map(|_| {
            let row = rng.gen_range(0..w.rows);
            let col = rng.gen_range(0..w.cols);
            let numerical = centered_difference(&f, w, row, col, h);
            let analytic = analytic.data[row][col];
            let sample = GradCheckSample {
                row,
                col,
                numerical,
                analytic,
                relative_error: relative_error(numerical, analytic),
            };
            debug!(
                row,
                col,
                numerical,
                analytic,
                relative_error = sample.relative_error,
                "gradient check"
            );
            sample
        })
        .collect()
}

/// |a - b| / (|a| + |b|), or 0 when both are zero.
pub fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / (a.abs() + b.abs()).max(f64::MIN_POSITIVE)
}

/// Largest element-wise `relative_error` between two same-shape matrices.
pub fn max_relative_error(a: &Matrix, b: &Matrix) -> f64 {
    assert_eq!(a.shape(), b.shape(), "Matrices are of incorrect sizes");
    a.data.iter().flatten()
        .zip(b.data.iter().flatten())
        .map(|(&x, &y)| relative_error(x, y))
        .fold(0.0, f64::max)
}
