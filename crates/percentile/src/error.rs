//! Error types for the ecc-percentile crate.

use ecc_distribution::DistributionError;
use ecc_grid::GridError;

/// Error type for all fallible operations in the ecc-percentile crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PercentileError {
    /// Wrapped error from padding, validation or interpolation.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// Wrapped error from grid reshaping.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Returned when a requested percentile set is empty, unordered or
    /// outside (0, 1).
    #[error("invalid percentiles: {reason}")]
    InvalidPercentiles {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the input grid's axis cannot be used by the operation.
    #[error("invalid axis: {reason}")]
    InvalidAxis {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a variance is negative or not finite.
    #[error("invalid variance {value} at element {index}: must be finite and >= 0")]
    InvalidVariance {
        /// Flat (row-major) index of the offending element.
        index: usize,
        /// The offending variance.
        value: f64,
    },

    /// Returned when mean and variance grids differ in shape.
    #[error("shape mismatch: mean has shape {mean:?}, variance has shape {variance:?}")]
    ShapeMismatch {
        /// Shape of the mean grid.
        mean: Vec<usize>,
        /// Shape of the variance grid.
        variance: Vec<usize>,
    },
}
