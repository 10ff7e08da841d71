//! Percentiles of a normal distribution described by mean and variance.

use ndarray::{Array1, Array2, ArrayD, IxDyn, Zip};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use ecc_grid::{AxisCoord, GridError, LabelledGrid};

use crate::error::PercentileError;
use crate::sampling::validate_percentiles;

/// Builds a percentile grid from gridded mean and variance, assuming each
/// point is normally distributed.
///
/// The value at percentile `p` is `mean + sqrt(variance) * z(p)`, where `z`
/// is the standard normal quantile function. The percentile axis is appended
/// as the last dimension. A zero variance gives the mean at every percentile.
///
/// # Errors
///
/// - [`PercentileError::ShapeMismatch`] if `mean` and `variance` differ in shape.
/// - [`PercentileError::InvalidVariance`] for a negative or non-finite variance.
/// - [`PercentileError::InvalidPercentiles`] for a bad percentile set.
#[tracing::instrument(skip_all, fields(variable = variable, n_percentiles = percentiles.len()))]
pub fn percentiles_from_mean_and_variance(
    variable: &str,
    units: &str,
    mean: &ArrayD<f64>,
    variance: &ArrayD<f64>,
    percentiles: &[f64],
) -> Result<LabelledGrid, PercentileError> {
    if mean.shape() != variance.shape() {
        return Err(PercentileError::ShapeMismatch {
            mean: mean.shape().to_vec(),
            variance: variance.shape().to_vec(),
        });
    }
    validate_percentiles(percentiles)?;
    if let Some((index, &value)) = variance
        .iter()
        .enumerate()
        .find(|&(_, &v)| !(v.is_finite() && v >= 0.0))
    {
        return Err(PercentileError::InvalidVariance { index, value });
    }

    let standard = Normal::standard();
    let z: Vec<f64> = percentiles.iter().map(|&p| standard.inverse_cdf(p)).collect();

    let means: Array1<f64> = mean.iter().copied().collect();
    let sds: Array1<f64> = variance.iter().map(|v| v.sqrt()).collect();
    debug!(n_points = means.len(), "computing normal percentiles");

    let mut out = Array2::zeros((means.len(), percentiles.len()));
    Zip::from(out.rows_mut())
        .and(&means)
        .and(&sds)
        .par_for_each(|mut row, &mu, &sd| {
            for (slot, &zp) in row.iter_mut().zip(&z) {
                *slot = mu + sd * zp;
            }
        });

    let mut shape = mean.shape().to_vec();
    shape.push(percentiles.len());
    let axis_dim = shape.len() - 1;
    let data = out
        .into_shape_with_order(IxDyn(&shape))
        .map_err(|e| GridError::Reshape {
            reason: e.to_string(),
        })?;

    let grid = LabelledGrid::new(
        variable,
        units,
        data,
        AxisCoord::percentile(percentiles.to_vec()),
        axis_dim,
    )?;
    Ok(grid)
}
