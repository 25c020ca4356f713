use crate::activation::softmax::softmax;
use crate::loss::regularization::{l2_gradient, l2_penalty};
use crate::math::matrix::Matrix;

/// Softmax loss and gradient for a linear classifier, computed with explicit
/// loops over examples and classes.
///
/// Shapes: `w` is D×C, `x` is N×D, `y` holds N labels in `0..C`.
///
/// Returns `(loss, dW)` where
///   loss = mean_i(-ln p_i[y_i]) + reg · Σ W²
///   dW   = mean_i(x_iᵀ (p_i - onehot(y_i))) + 2 · reg · W
///
/// # Panics
/// The inputs are not validated. Mismatched shapes or a label `>= C` panic
/// while indexing; use `eval::evaluate` for a checked call.
pub fn softmax_loss_naive(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
    let num_train = x.rows;
    let num_classes = w.cols;
    let mut loss = 0.0;
    let mut dw = Matrix::zeros(w.rows, w.cols);

    for i in 0..num_train {
        let x_i = x.row(i);
        let probs = softmax(&w.vec_mul(x_i));

        loss -= probs[y[i]].ln();

        for j in 0..num_classes {
            let coeff = if j == y[i] { probs[j] - 1.0 } else { probs[j] };
            dw.add_scaled_to_col(j, coeff, x_i);
        }
    }

    let n = num_train as f64;
    loss /= n;
    let dw = dw.map(|g| g / n);

    (loss + l2_penalty(w, reg), &dw + &l2_gradient(w, reg))
}

/// Same contract as `softmax_loss_naive`, expressed as whole-matrix
/// operations: one product for all scores, row-wise shift and normalisation,
/// and one product for the gradient.
pub fn softmax_loss_vectorized(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
    let n = x.rows as f64;

    let scores = x * w;
    let exp_scores = scores.sub_row_values(&scores.row_max()).map(f64::exp);
    let mut probs = exp_scores.div_row_values(&exp_scores.row_sums());

    let data_loss = -probs.gather(y).into_iter().map(f64::ln).sum::<f64>() / n;

    // dL/dscores = P - onehot(y)
    probs.add_at(y, -1.0);
    let dw = (&x.transpose() * &probs).map(|g| g / n);

    (data_loss + l2_penalty(w, reg), &dw + &l2_gradient(w, reg))
}
