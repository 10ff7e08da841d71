//! Conversion of exceedance probabilities at thresholds into percentiles.

use ecc_distribution::{
    BoundsPair, interpolate_per_point, pad_cdf, validate_axis_ascending, validate_monotonic,
};
use ecc_grid::{AxisCoord, AxisKind, LabelledGrid};
use tracing::debug;

use crate::error::PercentileError;
use crate::sampling::{PercentileRequest, Sampling, validate_percentiles};

/// Turns probability-of-exceedance grids into value-at-percentile grids.
///
/// Each point's exceedance probabilities are flipped into a CDF, closed off
/// with a [`BoundsPair`] (probability 0 at the lower bound, 1 at the upper
/// bound), checked for monotonicity and inverted by linear interpolation at
/// the requested percentiles.
///
/// # Example
///
/// ```
/// use ecc_distribution::BoundsPair;
/// use ecc_grid::{AxisCoord, LabelledGrid};
/// use ecc_percentile::ProbabilityToPercentileConverter;
///
/// let grid = LabelledGrid::from_flat(
///     "air_temperature",
///     "1",
///     &[3],
///     vec![0.95, 0.3, 0.05],
///     AxisCoord::threshold(vec![8.0, 10.0, 12.0], "degC"),
///     0,
/// )
/// .unwrap();
/// let bounds = BoundsPair::new(-40.0, 50.0).unwrap();
///
/// let out = ProbabilityToPercentileConverter::new()
///     .convert(&grid, &bounds, &[0.1, 0.5, 0.9])
///     .unwrap();
/// assert!((out.data()[[2]] - 11.6).abs() < 1e-9);
/// assert_eq!(out.units(), "degC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbabilityToPercentileConverter {
    sampling: Sampling,
}

impl ProbabilityToPercentileConverter {
    /// Creates a converter using evenly spaced percentile sampling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how percentile counts are turned into percentiles.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Returns the percentile sampling mode.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Converts `grid` at the percentiles described by `request`.
    ///
    /// [`PercentileRequest::Default`] produces as many percentiles as the
    /// grid has thresholds.
    pub fn process(
        &self,
        grid: &LabelledGrid,
        bounds: &BoundsPair,
        request: &PercentileRequest,
    ) -> Result<LabelledGrid, PercentileError> {
        let percentiles = request.resolve(grid.axis().len(), self.sampling)?;
        self.convert(grid, bounds, &percentiles)
    }

    /// Converts `grid` at exactly `percentiles`.
    ///
    /// `grid` must carry an ascending threshold axis; its values are
    /// probabilities of exceeding each threshold. The result replaces the
    /// threshold axis with a percentile axis at the same dimension and takes
    /// its value units from the threshold axis.
    ///
    /// # Errors
    ///
    /// - [`PercentileError::InvalidPercentiles`] if `percentiles` is empty,
    ///   unordered or outside (0, 1).
    /// - [`PercentileError::Grid`] if the grid has no threshold axis.
    /// - [`PercentileError::Distribution`] wrapping `RangeExceeded` when a
    ///   threshold lies outside `bounds`, or `NonMonotonicDistribution` when
    ///   any point's CDF decreases.
    #[tracing::instrument(skip_all, fields(
        variable = grid.variable(),
        n_points = grid.n_points(),
        n_thresholds = grid.axis().len(),
        n_percentiles = percentiles.len(),
    ))]
    pub fn convert(
        &self,
        grid: &LabelledGrid,
        bounds: &BoundsPair,
        percentiles: &[f64],
    ) -> Result<LabelledGrid, PercentileError> {
        grid.require_axis(AxisKind::Threshold)?;
        validate_percentiles(percentiles)?;

        let thresholds = grid.axis().points();
        validate_axis_ascending(thresholds)?;

        let cdf = grid.to_point_matrix()?.mapv_into(|p| 1.0 - p);
        let (padded_thresholds, padded_cdf) = pad_cdf(thresholds, cdf.view(), bounds)?;
        validate_monotonic(padded_cdf.view())?;
        debug!(
            lower = bounds.lower(),
            upper = bounds.upper(),
            "padded and validated CDF"
        );

        // Swapped axes: each point's CDF is the source axis and the shared
        // thresholds are the source values.
        let quantiles = interpolate_per_point(padded_cdf.view(), &padded_thresholds, percentiles)?;

        let units = grid.axis().units().to_string();
        let out = grid
            .with_point_matrix(quantiles, AxisCoord::percentile(percentiles.to_vec()))?
            .with_units(units);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ecc_distribution::DistributionError;
    use ecc_grid::GridError;

    fn bounds() -> BoundsPair {
        BoundsPair::new(-40.0, 50.0).unwrap()
    }

    fn single_point(probabilities: Vec<f64>, thresholds: Vec<f64>) -> LabelledGrid {
        LabelledGrid::from_flat(
            "air_temperature",
            "1",
            &[probabilities.len()],
            probabilities,
            AxisCoord::threshold(thresholds, "degC"),
            0,
        )
        .unwrap()
    }

    #[test]
    fn converts_single_point() {
        let grid = single_point(vec![0.95, 0.3, 0.05], vec![8.0, 10.0, 12.0]);
        let out = ProbabilityToPercentileConverter::new()
            .convert(&grid, &bounds(), &[0.1, 0.5, 0.9])
            .unwrap();
        assert_eq!(out.axis().kind(), AxisKind::Percentile);
        assert_eq!(out.axis().points(), &[0.1, 0.5, 0.9]);
        assert_relative_eq!(out.data()[[0]], 8.1538, epsilon = 1e-4);
        assert_relative_eq!(out.data()[[1]], 9.3846, epsilon = 1e-4);
        assert_relative_eq!(out.data()[[2]], 11.6, epsilon = 1e-9);
    }

    #[test]
    fn increasing_exceedance_is_non_monotonic() {
        let grid = single_point(vec![0.05, 0.7, 0.95], vec![8.0, 10.0, 12.0]);
        let result =
            ProbabilityToPercentileConverter::new().convert(&grid, &bounds(), &[0.1, 0.5, 0.9]);
        assert!(matches!(
            result,
            Err(PercentileError::Distribution(
                DistributionError::NonMonotonicDistribution { .. }
            ))
        ));
    }

    #[test]
    fn threshold_beyond_bounds_is_range_exceeded() {
        let grid = single_point(vec![0.95, 0.3, 0.05], vec![8.0, 10.0, 60.0]);
        let result =
            ProbabilityToPercentileConverter::new().convert(&grid, &bounds(), &[0.1, 0.5, 0.9]);
        assert!(matches!(
            result,
            Err(PercentileError::Distribution(
                DistributionError::RangeExceeded { .. }
            ))
        ));
    }

    #[test]
    fn requires_threshold_axis() {
        let grid = LabelledGrid::from_flat(
            "air_temperature",
            "K",
            &[3],
            vec![1.0, 2.0, 3.0],
            AxisCoord::percentile(vec![0.25, 0.5, 0.75]),
            0,
        )
        .unwrap();
        let result = ProbabilityToPercentileConverter::new().convert(&grid, &bounds(), &[0.5]);
        assert!(matches!(
            result,
            Err(PercentileError::Grid(GridError::MissingAxis { .. }))
        ));
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let grid = single_point(vec![0.3, 0.95, 0.05], vec![10.0, 8.0, 12.0]);
        let result = ProbabilityToPercentileConverter::new().convert(&grid, &bounds(), &[0.5]);
        assert!(matches!(
            result,
            Err(PercentileError::Distribution(
                DistributionError::NonAscendingAxis { .. }
            ))
        ));
    }

    #[test]
    fn sampling_defaults_to_quantile() {
        assert_eq!(
            ProbabilityToPercentileConverter::new().sampling(),
            Sampling::Quantile
        );
        let random = Sampling::Random { seed: Some(11) };
        assert_eq!(
            ProbabilityToPercentileConverter::new()
                .with_sampling(random)
                .sampling(),
            random
        );
    }

    #[test]
    fn process_default_matches_threshold_count() {
        let grid = single_point(vec![0.95, 0.3, 0.05], vec![8.0, 10.0, 12.0]);
        let out = ProbabilityToPercentileConverter::new()
            .process(&grid, &bounds(), &PercentileRequest::Default)
            .unwrap();
        assert_eq!(out.axis().points(), &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn certain_exceedance_maps_to_upper_segment() {
        // Every threshold certainly exceeded: CDF is 0 up to 12, then rises to 1 at 50.
        let grid = single_point(vec![1.0, 1.0, 1.0], vec![8.0, 10.0, 12.0]);
        let out = ProbabilityToPercentileConverter::new()
            .convert(&grid, &bounds(), &[0.5])
            .unwrap();
        assert_relative_eq!(out.data()[[0]], 31.0, epsilon = 1e-12);
    }
}
