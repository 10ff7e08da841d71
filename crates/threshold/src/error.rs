//! Error types for the ecc-threshold crate.

use ecc_grid::GridError;

/// Error type for all fallible operations in the ecc-threshold crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// Returned when a threshold of exactly zero is requested.
    #[error("invalid threshold: zero not allowed")]
    ZeroThreshold,

    /// Returned when a threshold is not finite.
    #[error("invalid threshold {value}: must be finite")]
    NonFiniteThreshold {
        /// The offending threshold.
        value: f64,
    },

    /// Returned when a fuzzy factor lies outside (0, 1).
    #[error("invalid fuzzy factor {value}: must be > 0 and < 1")]
    InvalidFuzzyFactor {
        /// The offending fuzzy factor.
        value: f64,
    },

    /// Returned when the input contains a NaN.
    #[error("NaN detected in input data at element {index}")]
    NanInput {
        /// Flat (row-major) index of the first NaN.
        index: usize,
    },

    /// Returned when a threshold set is empty or not strictly ascending.
    #[error("invalid thresholds: {reason}")]
    InvalidThresholds {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from grid reshaping.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_zero_threshold() {
        assert_eq!(
            ThresholdError::ZeroThreshold.to_string(),
            "invalid threshold: zero not allowed"
        );
    }

    #[test]
    fn error_invalid_fuzzy_factor() {
        let e = ThresholdError::InvalidFuzzyFactor { value: 1.5 };
        assert_eq!(e.to_string(), "invalid fuzzy factor 1.5: must be > 0 and < 1");
    }

    #[test]
    fn error_nan_input() {
        let e = ThresholdError::NanInput { index: 4 };
        assert_eq!(e.to_string(), "NaN detected in input data at element 4");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ThresholdError>();
    }
}
