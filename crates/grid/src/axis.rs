//! The labelled probabilistic axis of a grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the points of a probabilistic axis represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Physical thresholds; grid values are exceedance probabilities.
    Threshold,
    /// Percentile fractions in \[0, 1\]; grid values are physical quantities.
    Percentile,
    /// Ensemble member indices; grid values are physical quantities.
    Realization,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AxisKind::Threshold => "threshold",
            AxisKind::Percentile => "percentile",
            AxisKind::Realization => "realization",
        };
        f.write_str(s)
    }
}

/// A named, typed coordinate along the probabilistic dimension of a grid.
///
/// # Example
///
/// ```
/// use ecc_grid::{AxisCoord, AxisKind};
///
/// let axis = AxisCoord::threshold(vec![8.0, 10.0, 12.0], "degC");
/// assert_eq!(axis.kind(), AxisKind::Threshold);
/// assert_eq!(axis.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisCoord {
    name: String,
    kind: AxisKind,
    points: Vec<f64>,
    #[serde(default)]
    units: String,
}

impl AxisCoord {
    /// Creates an axis from its parts.
    pub fn new(
        name: impl Into<String>,
        kind: AxisKind,
        points: Vec<f64>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
            units: units.into(),
        }
    }

    /// A threshold axis named `threshold`.
    pub fn threshold(points: Vec<f64>, units: impl Into<String>) -> Self {
        Self::new("threshold", AxisKind::Threshold, points, units)
    }

    /// A dimensionless percentile axis named `percentile`.
    pub fn percentile(points: Vec<f64>) -> Self {
        Self::new("percentile", AxisKind::Percentile, points, "1")
    }

    /// A realization axis numbered `0..n`.
    pub fn realization(n: usize) -> Self {
        Self::new(
            "realization",
            AxisKind::Realization,
            (0..n).map(|i| i as f64).collect(),
            "1",
        )
    }

    /// Returns the axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the axis kind.
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Returns the coordinate points.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns the coordinate units.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Number of coordinate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the axis has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the points are strictly increasing.
    pub fn is_strictly_ascending(&self) -> bool {
        self.points.windows(2).all(|w| w[0] < w[1])
    }
}
