use thiserror::Error;

/// Error raised when the objective vectors and the reference point of a metric calculation do
/// not share one fixed dimension. This is detected before any computation starts and there is
/// no partial result; the caller must fix the input shape and call the metric again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("An error occurred in the calculation of the '{metric}' metric: {reason}")]
pub struct DimensionalityError {
    /// The name of the metric being calculated.
    metric: String,
    /// The reason why the input shape is invalid.
    reason: String,
}

impl DimensionalityError {
    /// Create a new dimensionality error.
    ///
    /// # Arguments
    ///
    /// * `metric`: The name of the metric being calculated.
    /// * `reason`: The reason why the input shape is invalid.
    ///
    /// returns: `DimensionalityError`
    pub(crate) fn new(metric: &str, reason: String) -> Self {
        Self {
            metric: metric.to_string(),
            reason,
        }
    }
}
