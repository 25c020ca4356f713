use thiserror::Error;

/// Result type for the checked evaluation path.
pub type Result<T> = std::result::Result<T, SoftmaxError>;

/// Input and configuration problems caught before the loss is computed.
///
/// The unchecked kernels (`softmax_loss_naive`, `softmax_loss_vectorized`)
/// never return these; they panic instead.
#[derive(Debug, Error)]
pub enum SoftmaxError {
    #[error("dimension mismatch: X has {x_cols} features but W has {w_rows} rows")]
    DimensionMismatch { x_cols: usize, w_rows: usize },

    #[error("label count mismatch: X has {examples} examples but y has {labels} labels")]
    LabelCountMismatch { examples: usize, labels: usize },

    #[error("label {label} at index {index} is outside 0..{classes}")]
    LabelOutOfRange { index: usize, label: usize, classes: usize },

    #[error("regularization strength must be finite and non-negative, got {0}")]
    InvalidRegularization(f64),

    #[error("batch must contain at least one example")]
    EmptyBatch,

    #[error("{name} is not rectangular: expected {cols} columns in every row")]
    RaggedMatrix { name: &'static str, cols: usize },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
