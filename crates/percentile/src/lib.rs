//! Percentile generation for probabilistic forecast grids.
//!
//! Turns threshold-exceedance and percentile grids into percentile grids at a
//! chosen set of percentiles, ready to be treated as pseudo-ensemble members.
//!
//! # Components
//!
//! - [`ProbabilityToPercentileConverter`]: inverts the CDF implied by
//!   exceedance probabilities at thresholds, closed off with a
//!   [`BoundsPair`](ecc_distribution::BoundsPair).
//! - [`PercentileResampler`]: re-expresses a percentile grid at different
//!   percentiles, optionally padding the tails with bounds.
//! - [`percentiles_from_mean_and_variance`]: percentiles of a gridded
//!   normal distribution.
//! - [`create_percentiles`] / [`PercentileRequest`]: choosing the output
//!   percentiles, evenly spaced or randomly drawn.
//!
//! All percentiles are fractions in the open interval (0, 1).

mod error;
mod from_probabilities;
mod mean_variance;
mod resample;
mod sampling;

pub use error::PercentileError;
pub use from_probabilities::ProbabilityToPercentileConverter;
pub use mean_variance::percentiles_from_mean_and_variance;
pub use resample::PercentileResampler;
pub use sampling::{PercentileRequest, Sampling, create_percentiles, validate_percentiles};
