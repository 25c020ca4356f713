pub mod math;
pub mod activation;
pub mod loss;
pub mod eval;
pub mod check;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::softmax::softmax;
pub use loss::softmax::{softmax_loss_naive, softmax_loss_vectorized};
pub use loss::loss_variant::LossVariant;
pub use eval::{evaluate, EvalConfig, Evaluation};
pub use check::gradient::{grad_check_sparse, numerical_gradient};
pub use error::{Result, SoftmaxError};
