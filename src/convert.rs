//! Pure conversion functions: TOML config and CLI values -> library types.

use anyhow::{Context, Result, bail};

use ecc_distribution::BoundsPair;
use ecc_percentile::{PercentileRequest, Sampling};
use ecc_threshold::BasicThreshold;

use crate::config::{EccConfig, PercentilesToml};

/// Parses a percentile sampling name into the corresponding enum variant.
pub fn parse_sampling(s: &str, seed: Option<u64>) -> Result<Sampling> {
    match s.to_lowercase().as_str() {
        "quantile" => Ok(Sampling::Quantile),
        "random" => Ok(Sampling::Random { seed }),
        other => bail!("unknown percentile sampling: {other:?}"),
    }
}

/// Builds the [`Sampling`] mode from config, with CLI overrides.
///
/// `--random` or an explicit `--seed` switches to random sampling; the CLI
/// seed wins over the config seed.
pub fn build_sampling(
    percentiles: &PercentilesToml,
    random: bool,
    seed: Option<u64>,
) -> Result<Sampling> {
    if random || seed.is_some() {
        return Ok(Sampling::Random {
            seed: seed.or(percentiles.seed),
        });
    }
    parse_sampling(&percentiles.sampling, percentiles.seed)
}

/// Builds the [`PercentileRequest`]: explicit percentiles, then the CLI
/// count, then the config count, then the input axis length.
pub fn build_request(
    percentiles: &PercentilesToml,
    count: Option<usize>,
    explicit: Option<&[f64]>,
) -> PercentileRequest {
    if let Some(p) = explicit {
        return PercentileRequest::Explicit(p.to_vec());
    }
    match count.or(percentiles.count) {
        Some(n) => PercentileRequest::Count(n),
        None => PercentileRequest::Default,
    }
}

/// Resolves the bounds for `variable`.
///
/// A CLI pair takes precedence over the `[bounds.<variable>]` config table.
/// Returns `None` if neither is present.
pub fn build_bounds(
    variable: &str,
    cli: Option<(f64, f64)>,
    config: &EccConfig,
) -> Result<Option<BoundsPair>> {
    let pair = match cli {
        Some(pair) => Some(pair),
        None => config.bounds.get(variable).map(|b| (b.lower, b.upper)),
    };
    pair.map(|(lower, upper)| {
        BoundsPair::new(lower, upper)
            .with_context(|| format!("invalid bounds for variable {variable:?}"))
    })
    .transpose()
}

/// Builds one [`BasicThreshold`] per value, sharing the fuzzy factor and
/// direction.
pub fn build_thresholds(
    values: &[f64],
    fuzzy_factor: Option<f64>,
    below: bool,
) -> Result<Vec<BasicThreshold>> {
    values
        .iter()
        .map(|&v| {
            let mut t = BasicThreshold::new(v)
                .with_context(|| format!("invalid threshold {v}"))?
                .with_below_threshold_ok(below);
            if let Some(f) = fuzzy_factor {
                t = t.with_fuzzy_factor(f)?;
            }
            Ok(t)
        })
        .collect()
}
