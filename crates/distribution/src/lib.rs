//! Building blocks for resampling empirical distributions on a grid.
//!
//! Every operation here works on a *point matrix*: an `(n_points, K)` array
//! where each row is the distribution of one independent grid point sampled
//! at `K` positions along a threshold or percentile axis.
//!
//! # Components
//!
//! - **Padding** ([`pad_cdf`], [`pad_quantiles`]): close off a partially
//!   sampled distribution with a [`BoundsPair`] so it spans the full
//!   probability range.
//! - **Validation** ([`validate_monotonic`], [`validate_axis_ascending`]):
//!   reject distributions that decrease along their axis.
//! - **Interpolation** ([`interpolate_shared_axis`], [`interpolate_per_point`]):
//!   piecewise-linear resampling of every point at a common set of queries,
//!   run in parallel across points.
//!
//! # Glossary
//!
//! - **CDF**: probability that the quantity is at or below a threshold.
//! - **Quantile**: value below which a given fraction of the distribution lies.
//! - **Bounds pair**: physical extremes used as the ends of a CDF.

mod bounds;
mod error;
mod interpolate;
mod monotonic;

pub use bounds::{BoundsPair, pad_cdf, pad_quantiles};
pub use error::DistributionError;
pub use interpolate::{interp_one, interpolate_per_point, interpolate_shared_axis};
pub use monotonic::{validate_axis_ascending, validate_monotonic};
