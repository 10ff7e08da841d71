//! End-to-end conversions on multi-dimensional grids.

use approx::assert_relative_eq;
use ecc_distribution::BoundsPair;
use ecc_grid::{AxisCoord, AxisKind, LabelledGrid};
use ecc_percentile::{
    PercentileRequest, PercentileResampler, ProbabilityToPercentileConverter, Sampling,
};
use ndarray::{ArrayD, IxDyn};

fn bounds() -> BoundsPair {
    BoundsPair::new(-40.0, 50.0).expect("valid bounds")
}

/// (threshold=3, y=2, x=2); every point holds the same exceedance curve,
/// shifted by `0.01 * (y * 2 + x)` at the middle threshold.
fn threshold_grid_leading_axis() -> LabelledGrid {
    let base = [0.95, 0.3, 0.05];
    let data = ArrayD::from_shape_fn(IxDyn(&[3, 2, 2]), |ix| {
        let shift = if ix[0] == 1 {
            0.01 * (ix[1] * 2 + ix[2]) as f64
        } else {
            0.0
        };
        base[ix[0]] + shift
    });
    LabelledGrid::new(
        "air_temperature",
        "1",
        data,
        AxisCoord::threshold(vec![8.0, 10.0, 12.0], "degC"),
        0,
    )
    .expect("valid grid")
}

#[test]
fn converts_grid_with_leading_threshold_axis() {
    let grid = threshold_grid_leading_axis();
    let out = ProbabilityToPercentileConverter::new()
        .convert(&grid, &bounds(), &[0.1, 0.5, 0.9])
        .unwrap();

    assert_eq!(out.shape(), &[3, 2, 2]);
    assert_eq!(out.axis_dim(), 0);
    assert_eq!(out.axis().kind(), AxisKind::Percentile);
    assert_eq!(out.units(), "degC");

    // Point (0, 0) carries the unshifted curve.
    assert_relative_eq!(out.data()[[0, 0, 0]], 8.153846153846153, epsilon = 1e-9);
    assert_relative_eq!(out.data()[[1, 0, 0]], 9.384615384615385, epsilon = 1e-9);
    assert_relative_eq!(out.data()[[2, 0, 0]], 11.6, epsilon = 1e-9);

    // Higher exceedance at 10 pushes the median up for later points.
    assert!(out.data()[[1, 1, 1]] > out.data()[[1, 0, 0]]);
}

#[test]
fn converts_grid_with_middle_threshold_axis() {
    // (y=2, threshold=3): second row is a shifted copy of the first.
    let grid = LabelledGrid::from_flat(
        "air_temperature",
        "1",
        &[2, 3],
        vec![0.95, 0.3, 0.05, 0.9, 0.5, 0.1],
        AxisCoord::threshold(vec![8.0, 10.0, 12.0], "degC"),
        1,
    )
    .unwrap();
    let out = ProbabilityToPercentileConverter::new()
        .convert(&grid, &bounds(), &[0.5])
        .unwrap();
    assert_eq!(out.shape(), &[2, 1]);
    assert_relative_eq!(out.data()[[0, 0]], 9.384615384615385, epsilon = 1e-9);
    // CDF [0.1, 0.5, 0.9] has its median exactly at the middle threshold.
    assert_relative_eq!(out.data()[[1, 0]], 10.0, epsilon = 1e-12);
}

#[test]
fn output_is_monotonic_along_percentiles() {
    let grid = threshold_grid_leading_axis();
    let out = ProbabilityToPercentileConverter::new()
        .process(&grid, &bounds(), &PercentileRequest::Count(19))
        .unwrap();
    let matrix = out.to_point_matrix().unwrap();
    for row in matrix.rows() {
        assert!(row.windows(2).into_iter().all(|w| w[0] <= w[1]));
    }
}

#[test]
fn duplicate_percentiles_give_identical_values() {
    let grid = threshold_grid_leading_axis();
    let out = ProbabilityToPercentileConverter::new()
        .convert(&grid, &bounds(), &[0.4, 0.4])
        .unwrap();
    let matrix = out.to_point_matrix().unwrap();
    for row in matrix.rows() {
        assert_eq!(row[0], row[1]);
    }
}

#[test]
fn single_threshold_grid() {
    let grid = LabelledGrid::from_flat(
        "air_temperature",
        "1",
        &[1, 2],
        vec![0.5, 0.25],
        AxisCoord::threshold(vec![8.0], "degC"),
        0,
    )
    .unwrap();
    let out = ProbabilityToPercentileConverter::new()
        .convert(&grid, &bounds(), &[0.5])
        .unwrap();
    assert_relative_eq!(out.data()[[0, 0]], 8.0, epsilon = 1e-12);
    // CDF 0.75 at 8: median sits on the lower segment.
    assert_relative_eq!(out.data()[[0, 1]], -40.0 + 48.0 * (0.5 / 0.75), epsilon = 1e-9);
}

#[test]
fn converted_percentiles_resample_consistently() {
    let grid = threshold_grid_leading_axis();
    let converted = ProbabilityToPercentileConverter::new()
        .convert(&grid, &bounds(), &[0.1, 0.5, 0.9])
        .unwrap();
    let resampled = PercentileResampler::new()
        .resample(&converted, &[0.1, 0.5, 0.9])
        .unwrap();
    assert_eq!(resampled, converted);
}

#[test]
fn resampler_keeps_non_axis_dimensions() {
    // (y=2, percentile=3, x=2)
    let data = ArrayD::from_shape_fn(IxDyn(&[2, 3, 2]), |ix| {
        (ix[0] * 10 + ix[2]) as f64 + ix[1] as f64
    });
    let grid = LabelledGrid::new(
        "air_temperature",
        "degC",
        data,
        AxisCoord::percentile(vec![0.25, 0.5, 0.75]),
        1,
    )
    .unwrap();
    let out = PercentileResampler::new()
        .resample(&grid, &[0.375, 0.625])
        .unwrap();
    assert_eq!(out.shape(), &[2, 2, 2]);
    assert_relative_eq!(out.data()[[1, 0, 1]], 11.5, epsilon = 1e-12);
    assert_relative_eq!(out.data()[[1, 1, 1]], 12.5, epsilon = 1e-12);
}

#[test]
fn random_sampling_is_reproducible() {
    let grid = threshold_grid_leading_axis();
    let converter =
        ProbabilityToPercentileConverter::new().with_sampling(Sampling::Random { seed: Some(3) });
    let a = converter
        .process(&grid, &bounds(), &PercentileRequest::Count(5))
        .unwrap();
    let b = converter
        .process(&grid, &bounds(), &PercentileRequest::Count(5))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.axis().len(), 5);
}

#[test]
fn percentile_output_rebadges_as_realizations() {
    let grid = threshold_grid_leading_axis();
    let out = ProbabilityToPercentileConverter::new()
        .process(&grid, &bounds(), &PercentileRequest::Default)
        .unwrap()
        .rebadge_as_realizations()
        .unwrap();
    assert_eq!(out.axis().kind(), AxisKind::Realization);
    assert_eq!(out.axis().points(), &[0.0, 1.0, 2.0]);
}
