//! Error types for the ecc-grid crate.

use crate::axis::AxisKind;

/// Error type for all fallible operations in the ecc-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when the labelled axis position is not a dimension of the data.
    #[error("axis dimension {axis_dim} out of range for {ndim}-dimensional data")]
    AxisDimOutOfRange {
        /// Requested axis dimension.
        axis_dim: usize,
        /// Number of dimensions of the data.
        ndim: usize,
    },

    /// Returned when the axis coordinate length differs from the data extent.
    #[error("axis has {axis_len} points but data dimension has length {dim_len}")]
    AxisLengthMismatch {
        /// Number of coordinate points on the axis.
        axis_len: usize,
        /// Extent of the data along the axis dimension.
        dim_len: usize,
    },

    /// Returned when flat data does not fill the requested shape.
    #[error("shape mismatch: expected {expected} elements for shape {shape:?}, got {got}")]
    ShapeMismatch {
        /// Requested shape.
        shape: Vec<usize>,
        /// Number of elements implied by the shape.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },

    /// Returned when the grid does not carry the kind of axis an operation needs.
    #[error("expected a {expected} axis, found {found}")]
    MissingAxis {
        /// Axis kind the operation requires.
        expected: AxisKind,
        /// Axis kind the grid carries.
        found: AxisKind,
    },

    /// Returned when an array cannot be reshaped into point-matrix form.
    #[error("reshape failed: {reason}")]
    Reshape {
        /// Description of the failure.
        reason: String,
    },
}
