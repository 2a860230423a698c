#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The metric name is not one of the fixed alertable set.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// A threshold value outside the metric's valid range was rejected at
    /// configuration time.
    #[error("Invalid threshold for {metric}: {value} is outside [{min}, {max}]")]
    InvalidThreshold {
        metric: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A malformed or out-of-range sensor reading. The reading is never
    /// persisted.
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
