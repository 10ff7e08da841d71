//! Monotonicity checks for sample axes and distribution values.

use ndarray::{ArrayView2, s};

use crate::error::DistributionError;

/// Checks that every row of `values` is non-decreasing.
///
/// The check is a single whole-array difference along the sample axis
/// (`values[.., 1..] - values[.., ..-1]`), so its cost is independent of how
/// the points are laid out. NaN differences are not treated as decreases.
///
/// # Errors
///
/// Returns [`DistributionError::NonMonotonicDistribution`] naming the first
/// offending point (in row-major order) and the sample at which it drops.
pub fn validate_monotonic(values: ArrayView2<'_, f64>) -> Result<(), DistributionError> {
    if values.ncols() < 2 {
        return Ok(());
    }

    let diffs = &values.slice(s![.., 1..]) - &values.slice(s![.., ..-1]);
    match diffs.indexed_iter().find(|&(_, &d)| d < 0.0) {
        Some(((point, j), _)) => Err(DistributionError::NonMonotonicDistribution {
            point,
            index: j + 1,
        }),
        None => Ok(()),
    }
}

/// Checks that an axis coordinate is non-decreasing.
///
/// # Errors
///
/// Returns [`DistributionError::NonAscendingAxis`] at the first decrease,
/// or if any coordinate is NaN.
pub fn validate_axis_ascending(axis: &[f64]) -> Result<(), DistributionError> {
    if let Some(index) = axis.iter().position(|v| v.is_nan()) {
        return Err(DistributionError::NonAscendingAxis {
            index,
            previous: if index > 0 { axis[index - 1] } else { f64::NAN },
            value: axis[index],
        });
    }
    match axis.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(DistributionError::NonAscendingAxis {
            index: i + 1,
            previous: axis[i],
            value: axis[i + 1],
        }),
        None => Ok(()),
    }
}
