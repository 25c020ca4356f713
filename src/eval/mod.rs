pub mod evaluator;
pub mod eval_config;

pub use evaluator::{evaluate, validate_inputs, Evaluation};
pub use eval_config::EvalConfig;
