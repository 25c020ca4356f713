use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::loss_variant::LossVariant;

/// Configuration for a checked `evaluate` call.
///
/// # Fields
/// - `variant` — which loss implementation to run (default `Vectorized`)
/// - `reg`     — L2 regularization strength, must be finite and `>= 0`
///               (default `0.0`)
///
/// Missing JSON fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub variant: LossVariant,
    pub reg: f64,
}

impl EvalConfig {
    pub fn new(variant: LossVariant, reg: f64) -> Self {
        EvalConfig { variant, reg }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SoftmaxError;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = EvalConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EvalConfig::new(LossVariant::Vectorized, 0.0));
    }

    #[test]
    fn parses_explicit_fields() {
        let cfg = EvalConfig::from_json_str(r#"{"variant": "naive", "reg": 0.25}"#).unwrap();
        assert_eq!(cfg.variant, LossVariant::Naive);
        assert_eq!(cfg.reg, 0.25);
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = EvalConfig::from_json_str(r#"{"variant": "fused"}"#).unwrap_err();
        assert!(matches!(err, SoftmaxError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EvalConfig::from_json_file("/nonexistent/softmax-config.json").unwrap_err();
        assert!(matches!(err, SoftmaxError::Io(_)));
    }
}
