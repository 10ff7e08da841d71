//! Distribution bounds and padding of sample axes with them.

use ndarray::{Array2, ArrayView2, s};

use crate::error::DistributionError;
use crate::monotonic::validate_axis_ascending;

/// Theoretical extremes of a forecast quantity.
///
/// Used to close off an otherwise partially observed distribution: a CDF is
/// 0 at `lower` and 1 at `upper`.
///
/// # Example
///
/// ```
/// use ecc_distribution::BoundsPair;
///
/// let bounds = BoundsPair::new(-40.0, 50.0).unwrap();
/// assert!(bounds.contains_strictly(12.0));
/// assert!(BoundsPair::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsPair {
    lower: f64,
    upper: f64,
}

impl BoundsPair {
    /// Creates a bounds pair.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidBounds`] unless both values are
    /// finite and `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DistributionError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `true` if `lower < value < upper`.
    pub fn contains_strictly(&self, value: f64) -> bool {
        self.lower < value && value < self.upper
    }

    /// `true` if `lower <= value <= upper`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn exceeded(&self, value: f64) -> DistributionError {
        DistributionError::RangeExceeded {
            value,
            lower: self.lower,
            upper: self.upper,
        }
    }
}

fn check_axis_matches(
    axis_len: usize,
    values: &ArrayView2<'_, f64>,
) -> Result<(), DistributionError> {
    if values.ncols() != axis_len {
        return Err(DistributionError::InvalidAxisShape {
            reason: format!(
                "axis has {axis_len} samples but values have {} columns",
                values.ncols()
            ),
        });
    }
    Ok(())
}

/// Prepends `first` and appends `last` to every row of `values`.
fn pad_columns(values: &ArrayView2<'_, f64>, first: f64, last: f64) -> Array2<f64> {
    let (n_points, k) = values.dim();
    let mut padded = Array2::zeros((n_points, k + 2));
    padded.column_mut(0).fill(first);
    padded.slice_mut(s![.., 1..=k]).assign(values);
    padded.column_mut(k + 1).fill(last);
    padded
}

/// Pads a threshold axis and its CDF values with the distribution bounds.
///
/// `probabilities` is an `(n_points, K)` matrix of non-exceedance
/// probabilities, one row per point. The returned axis is
/// `[lower, thresholds.., upper]` and every returned row is
/// `[0, row.., 1]`.
///
/// # Errors
///
/// - [`DistributionError::InvalidAxisShape`] if the axis length differs
///   from the column count.
/// - [`DistributionError::RangeExceeded`] if any threshold is not strictly
///   inside the bounds.
pub fn pad_cdf(
    thresholds: &[f64],
    probabilities: ArrayView2<'_, f64>,
    bounds: &BoundsPair,
) -> Result<(Vec<f64>, Array2<f64>), DistributionError> {
    check_axis_matches(thresholds.len(), &probabilities)?;

    if let Some(&t) = thresholds.iter().find(|&&t| !bounds.contains_strictly(t)) {
        return Err(bounds.exceeded(t));
    }

    let mut axis = Vec::with_capacity(thresholds.len() + 2);
    axis.push(bounds.lower());
    axis.extend_from_slice(thresholds);
    axis.push(bounds.upper());

    Ok((axis, pad_columns(&probabilities, 0.0, 1.0)))
}

/// Pads a percentile axis and its quantile values with the distribution bounds.
///
/// `values` is an `(n_points, K)` matrix of physical values at each
/// percentile. The returned axis is `[0, percentiles.., 1]` and every
/// returned row is `[lower, row.., upper]`.
///
/// # Errors
///
/// - [`DistributionError::InvalidAxisShape`] if the axis length differs
///   from the column count.
/// - [`DistributionError::NonAscendingAxis`] if a percentile lies outside
///   \[0, 1\] or the percentiles decrease. Endpoints 0 and 1 are accepted.
/// - [`DistributionError::RangeExceeded`] if a value lies outside the bounds.
pub fn pad_quantiles(
    percentiles: &[f64],
    values: ArrayView2<'_, f64>,
    bounds: &BoundsPair,
) -> Result<(Vec<f64>, Array2<f64>), DistributionError> {
    check_axis_matches(percentiles.len(), &values)?;

    let mut axis = Vec::with_capacity(percentiles.len() + 2);
    axis.push(0.0);
    axis.extend_from_slice(percentiles);
    axis.push(1.0);
    validate_axis_ascending(&axis)?;

    if let Some(&v) = values.iter().find(|&&v| !bounds.contains(v)) {
        return Err(bounds.exceeded(v));
    }

    Ok((axis, pad_columns(&values, bounds.lower(), bounds.upper())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn bounds() -> BoundsPair {
        BoundsPair::new(-40.0, 50.0).unwrap()
    }

    #[test]
    fn bounds_rejects_inverted() {
        assert!(matches!(
            BoundsPair::new(50.0, -40.0),
            Err(DistributionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn bounds_rejects_nan() {
        assert!(BoundsPair::new(f64::NAN, 1.0).is_err());
        assert!(BoundsPair::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn pad_cdf_adds_bounds_and_probabilities() {
        let probs = array![[0.05, 0.7, 0.95], [0.1, 0.2, 0.3]];
        let (axis, padded) = pad_cdf(&[8.0, 10.0, 12.0], probs.view(), &bounds()).unwrap();
        assert_eq!(axis, vec![-40.0, 8.0, 10.0, 12.0, 50.0]);
        assert_eq!(padded.dim(), (2, 5));
        assert_eq!(padded.row(0).to_vec(), vec![0.0, 0.05, 0.7, 0.95, 1.0]);
        assert_eq!(padded.row(1).to_vec(), vec![0.0, 0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn pad_cdf_endpoints_ignore_input_shape() {
        // Even a decreasing CDF gets exact 0 and 1 endpoints; validation is separate.
        let probs = array![[0.9, 0.5, 0.1]];
        let (_, padded) = pad_cdf(&[1.0, 2.0, 3.0], probs.view(), &bounds()).unwrap();
        assert_eq!(padded[[0, 0]], 0.0);
        assert_eq!(padded[[0, 4]], 1.0);
    }

    #[test]
    fn pad_cdf_single_threshold() {
        let probs = array![[0.4]];
        let (axis, padded) = pad_cdf(&[8.0], probs.view(), &bounds()).unwrap();
        assert_eq!(axis.len(), 3);
        assert_eq!(padded.row(0).to_vec(), vec![0.0, 0.4, 1.0]);
    }

    #[test]
    fn pad_cdf_range_exceeded() {
        let probs = array![[0.05, 0.7, 0.95]];
        let result = pad_cdf(&[8.0, 10.0, 60.0], probs.view(), &bounds());
        assert!(matches!(
            result,
            Err(DistributionError::RangeExceeded { value, .. }) if value == 60.0
        ));
    }

    #[test]
    fn pad_cdf_threshold_on_bound_is_rejected() {
        let probs = array![[0.5]];
        let result = pad_cdf(&[-40.0], probs.view(), &bounds());
        assert!(matches!(result, Err(DistributionError::RangeExceeded { .. })));
    }

    #[test]
    fn pad_cdf_shape_mismatch() {
        let probs = array![[0.05, 0.7]];
        let result = pad_cdf(&[8.0, 10.0, 12.0], probs.view(), &bounds());
        assert!(matches!(
            result,
            Err(DistributionError::InvalidAxisShape { .. })
        ));
    }

    #[test]
    fn pad_quantiles_adds_bounds_as_values() {
        let values = array![[8.0, 10.0, 12.0]];
        let (axis, padded) = pad_quantiles(&[0.1, 0.5, 0.9], values.view(), &bounds()).unwrap();
        assert_eq!(axis, vec![0.0, 0.1, 0.5, 0.9, 1.0]);
        assert_eq!(padded.row(0).to_vec(), vec![-40.0, 8.0, 10.0, 12.0, 50.0]);
    }

    #[test]
    fn pad_quantiles_value_outside_bounds() {
        let values = array![[8.0, 10.0, 60.0]];
        let result = pad_quantiles(&[0.05, 0.7, 0.95], values.view(), &bounds());
        assert!(matches!(
            result,
            Err(DistributionError::RangeExceeded { value, .. }) if value == 60.0
        ));
    }

    #[test]
    fn pad_quantiles_accepts_unit_endpoints() {
        let values = array![[-40.0, 10.0, 50.0]];
        let (axis, padded) = pad_quantiles(&[0.0, 0.5, 1.0], values.view(), &bounds()).unwrap();
        assert_eq!(axis, vec![0.0, 0.0, 0.5, 1.0, 1.0]);
        assert_eq!(padded.row(0).to_vec(), vec![-40.0, -40.0, 10.0, 50.0, 50.0]);
    }

    #[test]
    fn pad_quantiles_percentile_outside_unit_interval() {
        let values = array![[8.0, 10.0]];
        let result = pad_quantiles(&[-0.1, 0.5], values.view(), &bounds());
        assert!(matches!(
            result,
            Err(DistributionError::NonAscendingAxis { index: 1, .. })
        ));

        let result = pad_quantiles(&[0.5, 1.2], values.view(), &bounds());
        assert!(matches!(
            result,
            Err(DistributionError::NonAscendingAxis { index: 3, .. })
        ));
    }
}
