//! Crisp and fuzzy threshold truth values.

use ndarray::{Array2, ArrayD, Zip};
use tracing::debug;

use ecc_grid::{AxisCoord, AxisKind, LabelledGrid};

use crate::error::ThresholdError;

/// A threshold truth criterion for one physical threshold.
///
/// # Example
///
/// ```
/// use ecc_threshold::BasicThreshold;
///
/// let crisp = BasicThreshold::new(10.0).unwrap();
/// assert_eq!(crisp.truth_value(10.5), 1.0);
/// assert_eq!(crisp.truth_value(10.0), 0.0);
///
/// // Ramp from 8 to 12 around a threshold of 10.
/// let fuzzy = BasicThreshold::new(10.0).unwrap().with_fuzzy_factor(0.8).unwrap();
/// assert!((fuzzy.truth_value(11.0) - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicThreshold {
    threshold: f64,
    fuzzy_factor: Option<f64>,
    below_threshold_ok: bool,
}

impl BasicThreshold {
    /// Creates a crisp threshold counting values above `threshold` as true.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::ZeroThreshold`] for a zero threshold, since
    /// the fuzzy ramp is defined relative to the threshold value, and
    /// [`ThresholdError::NonFiniteThreshold`] for NaN or infinity.
    pub fn new(threshold: f64) -> Result<Self, ThresholdError> {
        if !threshold.is_finite() {
            return Err(ThresholdError::NonFiniteThreshold { value: threshold });
        }
        if threshold == 0.0 {
            return Err(ThresholdError::ZeroThreshold);
        }
        Ok(Self {
            threshold,
            fuzzy_factor: None,
            below_threshold_ok: false,
        })
    }

    /// Applies a linear membership ramp between `threshold * factor` and
    /// `threshold * (2 - factor)`.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidFuzzyFactor`] unless `0 < factor < 1`.
    pub fn with_fuzzy_factor(mut self, factor: f64) -> Result<Self, ThresholdError> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(ThresholdError::InvalidFuzzyFactor { value: factor });
        }
        self.fuzzy_factor = Some(factor);
        Ok(self)
    }

    /// Counts values *below* the threshold as true instead.
    pub fn with_below_threshold_ok(mut self, below: bool) -> Self {
        self.below_threshold_ok = below;
        self
    }

    /// Returns the threshold value.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the fuzzy factor, if any.
    pub fn fuzzy_factor(&self) -> Option<f64> {
        self.fuzzy_factor
    }

    /// Returns `true` if values below the threshold count as true.
    pub fn below_threshold_ok(&self) -> bool {
        self.below_threshold_ok
    }

    /// Truth value of a single non-NaN value, in \[0, 1\].
    pub fn truth_value(&self, value: f64) -> f64 {
        let truth = match self.fuzzy_factor {
            None => {
                if value > self.threshold {
                    1.0
                } else {
                    0.0
                }
            }
            Some(f) => {
                // Ordered so the ramp rises through negative thresholds too.
                let a = self.threshold * f;
                let b = self.threshold * (2.0 - f);
                let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
                ((value - lower) / (upper - lower)).clamp(0.0, 1.0)
            }
        };
        if self.below_threshold_ok {
            1.0 - truth
        } else {
            truth
        }
    }

    /// Converts every element of `values` to its truth value.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::NanInput`] if any element is NaN.
    pub fn apply(&self, values: &ArrayD<f64>) -> Result<ArrayD<f64>, ThresholdError> {
        check_nan(values)?;
        Ok(values.mapv(|v| self.truth_value(v)))
    }
}

fn check_nan(values: &ArrayD<f64>) -> Result<(), ThresholdError> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(ThresholdError::NanInput { index }),
        None => Ok(()),
    }
}

/// Exceedance probabilities of an ensemble at each of `thresholds`.
///
/// `members` must have a realization axis. For every point, each threshold's
/// truth value is averaged over the realizations. The result has a threshold
/// axis in place of the realization axis, carrying the member units, and
/// dimensionless values.
///
/// # Errors
///
/// - [`ThresholdError::Grid`] if `members` has no realization axis.
/// - [`ThresholdError::InvalidThresholds`] if `thresholds` is empty or not
///   strictly ascending.
/// - [`ThresholdError::NanInput`] if any member value is NaN.
#[tracing::instrument(skip_all, fields(
    variable = members.variable(),
    n_points = members.n_points(),
    n_members = members.axis().len(),
    n_thresholds = thresholds.len(),
))]
pub fn exceedance_probabilities(
    members: &LabelledGrid,
    thresholds: &[BasicThreshold],
) -> Result<LabelledGrid, ThresholdError> {
    members.require_axis(AxisKind::Realization)?;
    if thresholds.is_empty() {
        return Err(ThresholdError::InvalidThresholds {
            reason: "at least one threshold is required".to_string(),
        });
    }
    let points: Vec<f64> = thresholds.iter().map(BasicThreshold::threshold).collect();
    if let Some(w) = points.windows(2).find(|w| w[1] <= w[0]) {
        return Err(ThresholdError::InvalidThresholds {
            reason: format!(
                "thresholds must be strictly ascending, {} follows {}",
                w[1], w[0]
            ),
        });
    }
    check_nan(members.data())?;

    let values = members.to_point_matrix()?;
    let n_members = values.ncols() as f64;
    let mut out = Array2::zeros((values.nrows(), thresholds.len()));
    Zip::from(out.rows_mut())
        .and(values.rows())
        .par_for_each(|mut out_row, row| {
            for (slot, t) in out_row.iter_mut().zip(thresholds) {
                let total: f64 = row.iter().map(|&v| t.truth_value(v)).sum();
                *slot = total / n_members;
            }
        });
    debug!("averaged truth values over realizations");

    let axis = AxisCoord::threshold(points, members.units());
    let grid = members.with_point_matrix(out, axis)?.with_units("1");
    Ok(grid)
}
