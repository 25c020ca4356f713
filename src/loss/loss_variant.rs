use serde::{Serialize, Deserialize};

use crate::loss::softmax::{softmax_loss_naive, softmax_loss_vectorized};
use crate::math::matrix::Matrix;

/// Selects how the softmax loss is computed.
///
/// - `Naive`      — explicit loops over examples and classes; the reference.
/// - `Vectorized` — whole-matrix products and row-wise reductions.
///
/// Both return the same loss and gradient up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossVariant {
    Naive,
    #[default]
    Vectorized,
}

impl LossVariant {
    /// Computes `(loss, dW)` with the selected strategy. Same preconditions
    /// as the underlying functions.
    pub fn evaluate(self, w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        match self {
            LossVariant::Naive      => softmax_loss_naive(w, x, y, reg),
            LossVariant::Vectorized => softmax_loss_vectorized(w, x, y, reg),
        }
    }
}
