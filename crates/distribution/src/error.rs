//! Error types for the ecc-distribution crate.

/// Error type for all fallible operations in the ecc-distribution crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    /// Returned when a sample already lies outside the distribution bounds,
    /// so padding with the bounds would not be monotonic.
    #[error(
        "value {value} lies outside the distribution bounds ({lower}, {upper}); \
         padding with the bounds would not be monotonic"
    )]
    RangeExceeded {
        /// The offending sample.
        value: f64,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// Returned when a padded distribution decreases along its axis.
    #[error(
        "probability/quantile values are not monotonically increasing \
         at point {point} (sample {index})"
    )]
    NonMonotonicDistribution {
        /// Row of the offending point in the point matrix.
        point: usize,
        /// Column at which the value first drops below its predecessor.
        index: usize,
    },

    /// Returned when an axis coordinate decreases.
    #[error("axis is not in ascending order: {value} follows {previous} at index {index}")]
    NonAscendingAxis {
        /// Position of the offending coordinate.
        index: usize,
        /// Coordinate before the offending one.
        previous: f64,
        /// The offending coordinate.
        value: f64,
    },

    /// Returned when axis and value array disagree in length, or when too
    /// few samples are available to interpolate.
    #[error("invalid axis shape: {reason}")]
    InvalidAxisShape {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a bounds pair is not finite or not ordered.
    #[error("invalid bounds: lower {lower} must be finite and below upper {upper}")]
    InvalidBounds {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },
}
