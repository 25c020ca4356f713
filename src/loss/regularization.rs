use crate::math::matrix::Matrix;

/// L2 penalty `reg * Σ W²`.
///
/// Not halved: the matching gradient is `2 * reg * W`.
pub fn l2_penalty(w: &Matrix, reg: f64) -> f64 {
    reg * w.sum_squares()
}

/// Gradient of `l2_penalty` with respect to `w`.
pub fn l2_gradient(w: &Matrix, reg: f64) -> Matrix {
    w.scale(2.0 * reg)
}
