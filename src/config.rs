use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ecc configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EccConfig {
    /// Output percentile settings.
    #[serde(default)]
    pub percentiles: PercentilesToml,

    /// Distribution bounds keyed by variable name.
    #[serde(default)]
    pub bounds: BTreeMap<String, BoundsToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PercentilesToml {
    #[serde(default = "default_sampling")]
    pub sampling: String,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PercentilesToml {
    fn default() -> Self {
        Self {
            sampling: default_sampling(),
            count: None,
            seed: None,
        }
    }
}

fn default_sampling() -> String {
    "quantile".to_string()
}

/// Physical extremes of one variable.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsToml {
    pub lower: f64,
    pub upper: f64,
}

/// Reads a TOML config file, or returns the defaults when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<EccConfig> {
    let Some(path) = path else {
        return Ok(EccConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: EccConfig = toml::from_str(
            r#"
            [percentiles]
            sampling = "random"
            count = 9
            seed = 42

            [bounds.air_temperature]
            lower = -40.0
            upper = 50.0

            [bounds.wind_speed]
            lower = 0.0
            upper = 75.0
            "#,
        )
        .unwrap();
        assert_eq!(config.percentiles.sampling, "random");
        assert_eq!(config.percentiles.count, Some(9));
        assert_eq!(config.percentiles.seed, Some(42));
        assert_eq!(config.bounds.len(), 2);
        assert_eq!(config.bounds["air_temperature"].lower, -40.0);
        assert_eq!(config.bounds["wind_speed"].upper, 75.0);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: EccConfig = toml::from_str("").unwrap();
        assert_eq!(config.percentiles.sampling, "quantile");
        assert!(config.percentiles.count.is_none());
        assert!(config.bounds.is_empty());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<EccConfig, _> = toml::from_str("[percentiles]\nsamples = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_without_path_gives_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.percentiles.sampling, "quantile");
    }
}
