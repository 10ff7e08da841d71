//! Choosing the set of percentiles to produce.

use rand::distr::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PercentileError;

/// How a percentile count is turned into concrete percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Evenly spaced percentiles dividing the CDF into blocks of equal
    /// probability: `i / (n + 1)` for `i = 1..=n`.
    #[default]
    Quantile,
    /// Sorted uniform random draws in (0, 1). `None` seeds from the OS.
    Random {
        /// RNG seed.
        seed: Option<u64>,
    },
}

/// The percentiles requested from a conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PercentileRequest {
    /// As many percentiles as the input axis has points.
    #[default]
    Default,
    /// This many percentiles, generated with the configured [`Sampling`].
    Count(usize),
    /// Exactly these percentiles (fractions, ascending, inside (0, 1)).
    Explicit(Vec<f64>),
}

impl PercentileRequest {
    /// Resolves the request into concrete percentiles.
    ///
    /// `input_len` is the number of points on the input axis, used by
    /// [`PercentileRequest::Default`].
    pub fn resolve(
        &self,
        input_len: usize,
        sampling: Sampling,
    ) -> Result<Vec<f64>, PercentileError> {
        match self {
            PercentileRequest::Default => create_percentiles(input_len, sampling),
            PercentileRequest::Count(n) => create_percentiles(*n, sampling),
            PercentileRequest::Explicit(p) => {
                validate_percentiles(p)?;
                Ok(p.clone())
            }
        }
    }
}

/// Generates `n` percentiles strictly between 0 and 1.
///
/// # Example
///
/// ```
/// use ecc_percentile::{Sampling, create_percentiles};
///
/// let p = create_percentiles(3, Sampling::Quantile).unwrap();
/// assert_eq!(p, vec![0.25, 0.5, 0.75]);
/// ```
///
/// # Errors
///
/// Returns [`PercentileError::InvalidPercentiles`] if `n` is zero.
pub fn create_percentiles(n: usize, sampling: Sampling) -> Result<Vec<f64>, PercentileError> {
    if n == 0 {
        return Err(PercentileError::InvalidPercentiles {
            reason: "at least one percentile is required".to_string(),
        });
    }

    let percentiles = match sampling {
        Sampling::Quantile => {
            let denom = (n + 1) as f64;
            (1..=n).map(|i| i as f64 / denom).collect()
        }
        Sampling::Random { seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let mut draws: Vec<f64> = (0..n).map(|_| rng.sample(Open01)).collect();
            draws.sort_by(f64::total_cmp);
            draws
        }
    };
    Ok(percentiles)
}

/// Checks that `percentiles` is non-empty, ascending and inside (0, 1).
///
/// Repeated values are allowed.
pub fn validate_percentiles(percentiles: &[f64]) -> Result<(), PercentileError> {
    if percentiles.is_empty() {
        return Err(PercentileError::InvalidPercentiles {
            reason: "at least one percentile is required".to_string(),
        });
    }
    if let Some(&p) = percentiles.iter().find(|&&p| !(p > 0.0 && p < 1.0)) {
        return Err(PercentileError::InvalidPercentiles {
            reason: format!("percentile {p} outside (0, 1)"),
        });
    }
    if let Some(w) = percentiles.windows(2).find(|w| w[1] < w[0]) {
        return Err(PercentileError::InvalidPercentiles {
            reason: format!("percentiles must be ascending, {} follows {}", w[1], w[0]),
        });
    }
    Ok(())
}
