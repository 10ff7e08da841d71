//! Labelled grids for probabilistic forecasts.
//!
//! A [`LabelledGrid`] pairs an N-dimensional array of forecast values with a
//! single [`AxisCoord`] describing its probabilistic dimension: thresholds
//! (values are exceedance probabilities), percentiles (values are physical
//! quantities) or ensemble realizations.
//!
//! Downstream crates work on the [point matrix](LabelledGrid::to_point_matrix)
//! view, where every independent grid point is one row and the probabilistic
//! axis runs along the columns.

mod axis;
mod error;
mod grid;

pub use axis::{AxisCoord, AxisKind};
pub use error::GridError;
pub use grid::LabelledGrid;
