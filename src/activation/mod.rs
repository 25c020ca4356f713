pub mod softmax;

pub use softmax::{shift_by_max, softmax, softmax_cross_entropy};
