//! Batched piecewise-linear interpolation along a sample axis.
//!
//! Both entry points reduce to [`interp_one`] applied independently to every
//! point, in parallel over the rows of the point matrix. They differ only in
//! which side of the `(axis, values)` pairing varies per point:
//!
//! - [`interpolate_shared_axis`]: one axis for all points, values per point.
//!   Used to re-express percentiles at new percentiles.
//! - [`interpolate_per_point`]: axis per point, shared values. Used to invert
//!   a CDF, where each point's probabilities become the axis and the shared
//!   thresholds become the values.

use std::borrow::Cow;

use ndarray::{Array2, ArrayView1, ArrayView2, Zip};

use crate::error::DistributionError;

/// Linear interpolation of `(xp, fp)` at `x`, clamped to the end values.
///
/// `xp` must be sorted ascending and have the same length as `fp`. Queries
/// below `xp[0]` return `fp[0]`; queries above the last sample return the
/// last value.
///
/// When `x` equals a sample that occurs more than once in `xp`, the first
/// occurrence wins, so the lower value of a vertical step is returned.
/// A query strictly between samples uses the last sample below it.
///
/// # Panics
///
/// Panics if `xp` is empty or `fp` is shorter than `xp`. The batched
/// functions below check both before calling this.
///
/// # Example
///
/// ```
/// use ecc_distribution::interp_one;
///
/// let xp = [0.0, 0.5, 0.5, 1.0];
/// let fp = [0.0, 1.0, 3.0, 4.0];
/// assert_eq!(interp_one(0.25, &xp, &fp), 0.5);
/// assert_eq!(interp_one(0.5, &xp, &fp), 1.0);
/// assert_eq!(interp_one(0.75, &xp, &fp), 3.5);
/// assert_eq!(interp_one(2.0, &xp, &fp), 4.0);
/// ```
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let last = xp.len() - 1;
    if x < xp[0] {
        return fp[0];
    }
    if x > xp[last] {
        return fp[last];
    }

    let idx = xp.partition_point(|&v| v < x);
    if idx == 0 || idx > last {
        return fp[idx.min(last)];
    }
    if xp[idx] == x {
        return fp[idx];
    }

    let lo = idx - 1;
    let t = (x - xp[lo]) / (xp[idx] - xp[lo]);
    fp[lo] + t * (fp[idx] - fp[lo])
}

fn check_samples(axis_len: usize, values_len: usize) -> Result<(), DistributionError> {
    if axis_len != values_len {
        return Err(DistributionError::InvalidAxisShape {
            reason: format!("axis has {axis_len} samples but values have {values_len}"),
        });
    }
    if axis_len < 2 {
        return Err(DistributionError::InvalidAxisShape {
            reason: format!("need at least 2 samples to interpolate, got {axis_len}"),
        });
    }
    Ok(())
}

fn row_slice<'a>(row: &'a ArrayView1<'_, f64>) -> Cow<'a, [f64]> {
    match row.as_slice() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(row.to_vec()),
    }
}

/// Interpolates every row of `values`, sampled on the common `axis`, at
/// `queries`.
///
/// Returns an `(n_points, queries.len())` matrix.
///
/// # Errors
///
/// Returns [`DistributionError::InvalidAxisShape`] if `axis` and the value
/// columns differ in length or there are fewer than 2 samples.
pub fn interpolate_shared_axis(
    axis: &[f64],
    values: ArrayView2<'_, f64>,
    queries: &[f64],
) -> Result<Array2<f64>, DistributionError> {
    check_samples(axis.len(), values.ncols())?;

    let mut out = Array2::zeros((values.nrows(), queries.len()));
    Zip::from(out.rows_mut())
        .and(values.rows())
        .par_for_each(|mut out_row, fp| {
            let fp = row_slice(&fp);
            for (slot, &q) in out_row.iter_mut().zip(queries) {
                *slot = interp_one(q, axis, &fp);
            }
        });
    Ok(out)
}

/// Interpolates the shared `values`, sampled on each row of `axes`, at
/// `queries`.
///
/// Each row of `axes` is the sorted source axis of one point. Returns an
/// `(n_points, queries.len())` matrix.
///
/// # Errors
///
/// Returns [`DistributionError::InvalidAxisShape`] if the axis rows and
/// `values` differ in length or there are fewer than 2 samples.
pub fn interpolate_per_point(
    axes: ArrayView2<'_, f64>,
    values: &[f64],
    queries: &[f64],
) -> Result<Array2<f64>, DistributionError> {
    check_samples(axes.ncols(), values.len())?;

    let mut out = Array2::zeros((axes.nrows(), queries.len()));
    Zip::from(out.rows_mut())
        .and(axes.rows())
        .par_for_each(|mut out_row, xp| {
            let xp = row_slice(&xp);
            for (slot, &q) in out_row.iter_mut().zip(queries) {
                *slot = interp_one(q, &xp, values);
            }
        });
    Ok(out)
}
