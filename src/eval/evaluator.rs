use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::error::{Result, SoftmaxError};
use crate::eval::eval_config::EvalConfig;
use crate::math::matrix::Matrix;

/// Loss and weight gradient returned by `evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss: f64,
    /// Same shape as the weights; a fresh matrix, never an alias of them.
    pub grad: Matrix,
}

/// Checks every precondition of the softmax loss functions:
/// rectangular matrices, `x.cols == w.rows`, one label per example, every
/// label `< w.cols`, a non-empty batch and a finite `reg >= 0`.
pub fn validate_inputs(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<()> {
    if !w.is_rectangular() {
        return Err(SoftmaxError::RaggedMatrix { name: "W", cols: w.cols });
    }
    if !x.is_rectangular() {
        return Err(SoftmaxError::RaggedMatrix { name: "X", cols: x.cols });
    }
    if x.rows == 0 {
        return Err(SoftmaxError::EmptyBatch);
    }
    if x.cols != w.rows {
        return Err(SoftmaxError::DimensionMismatch { x_cols: x.cols, w_rows: w.rows });
    }
    if y.len() != x.rows {
        return Err(SoftmaxError::LabelCountMismatch { examples: x.rows, labels: y.len() });
    }
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &l)| l >= w.cols) {
        return Err(SoftmaxError::LabelOutOfRange { index, label, classes: w.cols });
    }
    if !reg.is_finite() || reg < 0.0 {
        return Err(SoftmaxError::InvalidRegularization(reg));
    }
    Ok(())
}

/// Validates the inputs, then computes the softmax loss and gradient with
/// the variant chosen in `config`.
///
/// A non-finite loss is returned as-is (and logged); only malformed inputs
/// are errors.
pub fn evaluate(w: &Matrix, x: &Matrix, y: &[usize], config: &EvalConfig) -> Result<Evaluation> {
    validate_inputs(w, x, y, config.reg)?;

    debug!(
        variant = ?config.variant,
        examples = x.rows,
        features = w.rows,
        classes = w.cols,
        reg = config.reg,
        "evaluating softmax loss"
    );

    let (loss, grad) = config.variant.evaluate(w, x, y, config.reg);

    if !loss.is_finite() {
        warn!(loss, variant = ?config.variant, "softmax loss is not finite");
    }

    Ok(Evaluation { loss, grad })
}
