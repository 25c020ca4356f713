pub mod softmax;
pub mod regularization;
pub mod loss_variant;

pub use softmax::{softmax_loss_naive, softmax_loss_vectorized};
pub use regularization::{l2_gradient, l2_penalty};
pub use loss_variant::LossVariant;
