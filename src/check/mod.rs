pub mod gradient;

pub use gradient::{grad_check_sparse, max_relative_error, numerical_gradient, relative_error, GradCheckSample};
