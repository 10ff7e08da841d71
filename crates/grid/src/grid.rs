//! N-dimensional data with one labelled probabilistic dimension.

use ndarray::{Array2, ArrayD, IxDyn};

use crate::axis::{AxisCoord, AxisKind};
use crate::error::GridError;

/// An N-dimensional array of forecast values with one labelled axis.
///
/// The labelled axis (thresholds, percentiles or realizations) may sit at any
/// dimension. All other dimensions are opaque and are preserved unchanged by
/// the operations in this workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledGrid {
    variable: String,
    units: String,
    data: ArrayD<f64>,
    axis: AxisCoord,
    axis_dim: usize,
}

impl LabelledGrid {
    /// Creates a grid, checking that `axis` matches `data` along `axis_dim`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::AxisDimOutOfRange`] if `axis_dim` is not a
    /// dimension of `data`, or [`GridError::AxisLengthMismatch`] if the axis
    /// length differs from the data extent along that dimension.
    pub fn new(
        variable: impl Into<String>,
        units: impl Into<String>,
        data: ArrayD<f64>,
        axis: AxisCoord,
        axis_dim: usize,
    ) -> Result<Self, GridError> {
        let ndim = data.ndim();
        if axis_dim >= ndim {
            return Err(GridError::AxisDimOutOfRange { axis_dim, ndim });
        }
        let dim_len = data.shape()[axis_dim];
        if dim_len != axis.len() {
            return Err(GridError::AxisLengthMismatch {
                axis_len: axis.len(),
                dim_len,
            });
        }
        Ok(Self {
            variable: variable.into(),
            units: units.into(),
            data,
            axis,
            axis_dim,
        })
    }

    /// Creates a grid from row-major flat data.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `values` does not fill
    /// `shape`, plus any error from [`LabelledGrid::new`].
    pub fn from_flat(
        variable: impl Into<String>,
        units: impl Into<String>,
        shape: &[usize],
        values: Vec<f64>,
        axis: AxisCoord,
        axis_dim: usize,
    ) -> Result<Self, GridError> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(GridError::ShapeMismatch {
                shape: shape.to_vec(),
                expected,
                got: values.len(),
            });
        }
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| {
            GridError::Reshape {
                reason: e.to_string(),
            }
        })?;
        Self::new(variable, units, data, axis, axis_dim)
    }

    /// Returns the forecast variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the units of the grid values.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Returns the grid values.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Consumes `self` and returns the owned grid values.
    pub fn into_data(self) -> ArrayD<f64> {
        self.data
    }

    /// Returns the labelled axis.
    pub fn axis(&self) -> &AxisCoord {
        &self.axis
    }

    /// Returns the dimension index of the labelled axis.
    pub fn axis_dim(&self) -> usize {
        self.axis_dim
    }

    /// Returns the shape of the grid values.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of independent points, i.e. the product of all non-axis extents.
    pub fn n_points(&self) -> usize {
        self.data
            .shape()
            .iter()
            .enumerate()
            .filter(|&(d, _)| d != self.axis_dim)
            .map(|(_, &n)| n)
            .product()
    }

    /// Fails with [`GridError::MissingAxis`] unless the axis is of `kind`.
    pub fn require_axis(&self, kind: AxisKind) -> Result<(), GridError> {
        if self.axis.kind() != kind {
            return Err(GridError::MissingAxis {
                expected: kind,
                found: self.axis.kind(),
            });
        }
        Ok(())
    }

    /// Returns a copy of the values as an `(n_points, axis_len)` matrix.
    ///
    /// The labelled axis is moved to the last position and every other
    /// dimension is collapsed, in row-major order, into the first.
    pub fn to_point_matrix(&self) -> Result<Array2<f64>, GridError> {
        let ndim = self.data.ndim();
        let mut order: Vec<usize> = (0..ndim).filter(|&d| d != self.axis_dim).collect();
        order.push(self.axis_dim);

        let permuted = self.data.view().permuted_axes(IxDyn(&order));
        permuted
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order((self.n_points(), self.axis.len()))
            .map_err(|e| GridError::Reshape {
                reason: e.to_string(),
            })
    }

    /// Builds a grid with the same non-axis dimensions as `self` from an
    /// `(n_points, axis.len())` matrix, placing the new axis at the same
    /// dimension as the current one.
    ///
    /// Variable name and units carry over from `self`.
    pub fn with_point_matrix(
        &self,
        matrix: Array2<f64>,
        axis: AxisCoord,
    ) -> Result<LabelledGrid, GridError> {
        let (rows, cols) = matrix.dim();
        if rows != self.n_points() || cols != axis.len() {
            return Err(GridError::ShapeMismatch {
                shape: vec![self.n_points(), axis.len()],
                expected: self.n_points() * axis.len(),
                got: rows * cols,
            });
        }

        let ndim = self.data.ndim();
        let mut collapsed_shape: Vec<usize> = self
            .data
            .shape()
            .iter()
            .enumerate()
            .filter(|&(d, _)| d != self.axis_dim)
            .map(|(_, &n)| n)
            .collect();
        collapsed_shape.push(axis.len());

        let expanded = matrix
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order(IxDyn(&collapsed_shape))
            .map_err(|e| GridError::Reshape {
                reason: e.to_string(),
            })?;

        let axis_dim = self.axis_dim;
        let restore: Vec<usize> = (0..ndim)
            .map(|d| match d.cmp(&axis_dim) {
                std::cmp::Ordering::Less => d,
                std::cmp::Ordering::Equal => ndim - 1,
                std::cmp::Ordering::Greater => d - 1,
            })
            .collect();
        let data = expanded
            .permuted_axes(IxDyn(&restore))
            .as_standard_layout()
            .into_owned();

        LabelledGrid::new(
            self.variable.clone(),
            self.units.clone(),
            data,
            axis,
            axis_dim,
        )
    }

    /// Returns the grid with its value units replaced.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Relabels a percentile grid as ensemble realizations `0..n`.
    ///
    /// Values are untouched; only the axis changes. This lets a quantised
    /// percentile forecast stand in for an ensemble without a reordering
    /// step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingAxis`] unless the axis is a percentile axis.
    pub fn rebadge_as_realizations(self) -> Result<LabelledGrid, GridError> {
        self.require_axis(AxisKind::Percentile)?;
        let axis = AxisCoord::realization(self.axis.len());
        Ok(LabelledGrid { axis, ..self })
    }
}
