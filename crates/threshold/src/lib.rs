//! Threshold truth values for ensemble forecasts.
//!
//! [`BasicThreshold`] maps physical values to a truth value in \[0, 1\],
//! either crisply (`1` above the threshold, `0` otherwise) or through a
//! linear membership ramp around the threshold. [`exceedance_probabilities`]
//! averages those truth values over the realizations of an ensemble grid,
//! producing the threshold-axis probability grids consumed by
//! `ecc_percentile`.

mod basic;
mod error;

pub use basic::{BasicThreshold, exceedance_probabilities};
pub use error::ThresholdError;
