//! Re-expressing percentile forecasts at a new set of percentiles.

use ecc_distribution::{BoundsPair, interpolate_shared_axis, pad_quantiles, validate_monotonic};
use ecc_grid::{AxisCoord, AxisKind, LabelledGrid};
use tracing::debug;

use crate::error::PercentileError;
use crate::sampling::{PercentileRequest, Sampling, validate_percentiles};

/// Resamples percentile grids at different percentiles by linear interpolation.
///
/// Without bounds, requested percentiles outside the input range take the
/// value of the nearest input percentile. With bounds (see
/// [`PercentileResampler::with_bounds`]) the distribution is first padded so
/// that percentile 0 maps to the lower bound and 1 to the upper bound.
///
/// Values along the percentile axis are assumed non-decreasing for every
/// point; this is only checked in debug builds.
#[derive(Debug, Clone, Default)]
pub struct PercentileResampler {
    sampling: Sampling,
    bounds: Option<BoundsPair>,
}

impl PercentileResampler {
    /// Creates a resampler with quantile sampling and no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how percentile counts are turned into percentiles.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Pads every distribution with `bounds` before interpolating.
    pub fn with_bounds(mut self, bounds: BoundsPair) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Returns the configured bounds, if any.
    pub fn bounds(&self) -> Option<&BoundsPair> {
        self.bounds.as_ref()
    }

    /// Resamples `grid` at the percentiles described by `request`.
    pub fn process(
        &self,
        grid: &LabelledGrid,
        request: &PercentileRequest,
    ) -> Result<LabelledGrid, PercentileError> {
        let percentiles = request.resolve(grid.axis().len(), self.sampling)?;
        self.resample(grid, &percentiles)
    }

    /// Resamples `grid` at exactly `percentiles`.
    ///
    /// The output has the same shape as `grid` except along the percentile
    /// axis, which takes the length of `percentiles`.
    ///
    /// # Errors
    ///
    /// - [`PercentileError::Grid`] if the grid has no percentile axis.
    /// - [`PercentileError::InvalidAxis`] if the input percentiles are not
    ///   strictly ascending, or there are fewer than two of them and no
    ///   bounds are configured.
    /// - [`PercentileError::InvalidPercentiles`] for a bad request.
    /// - [`PercentileError::Distribution`] wrapping `RangeExceeded` when
    ///   bounds are configured and a value lies outside them.
    #[tracing::instrument(skip_all, fields(
        variable = grid.variable(),
        n_points = grid.n_points(),
        n_input = grid.axis().len(),
        n_output = percentiles.len(),
    ))]
    pub fn resample(
        &self,
        grid: &LabelledGrid,
        percentiles: &[f64],
    ) -> Result<LabelledGrid, PercentileError> {
        grid.require_axis(AxisKind::Percentile)?;
        validate_percentiles(percentiles)?;

        let input = grid.axis();
        if !input.is_strictly_ascending() {
            return Err(PercentileError::InvalidAxis {
                reason: format!(
                    "input percentiles {:?} are not strictly ascending",
                    input.points()
                ),
            });
        }
        if self.bounds.is_none() && input.len() < 2 {
            return Err(PercentileError::InvalidAxis {
                reason: "resampling without bounds needs at least 2 input percentiles"
                    .to_string(),
            });
        }

        let values = grid.to_point_matrix()?;
        debug_assert!(
            validate_monotonic(values.view()).is_ok(),
            "percentile values must be non-decreasing along the axis"
        );

        let resampled = match &self.bounds {
            Some(bounds) => {
                let (axis, padded) = pad_quantiles(input.points(), values.view(), bounds)?;
                debug!(
                    lower = bounds.lower(),
                    upper = bounds.upper(),
                    "padded quantiles with bounds"
                );
                interpolate_shared_axis(&axis, padded.view(), percentiles)?
            }
            None => interpolate_shared_axis(input.points(), values.view(), percentiles)?,
        };

        let out =
            grid.with_point_matrix(resampled, AxisCoord::percentile(percentiles.to_vec()))?;
        Ok(out)
    }
}
