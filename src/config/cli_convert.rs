//! CLI to Config conversion utilities

use crate::config::cli::Cli;
use crate::config::{toml, validator, GeneratorConfig, SamplingConfig};
use crate::distribution::DistributionParameters;
use anyhow::{Context, Result};
use thiserror::Error;

/// Malformed positional argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Format of num_samples parameter is invalid: {0}")]
    InvalidSampleCount(String),

    #[error("Format of gamma parameter is invalid: {0}")]
    InvalidGamma(String),
}

impl ArgumentError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgumentError::InvalidSampleCount(_) => 3,
            ArgumentError::InvalidGamma(_) => 4,
        }
    }
}

/// Parse the requested sample count; zero and negative counts are valid
pub fn parse_num_samples(s: &str) -> Result<i64, ArgumentError> {
    s.trim()
        .parse()
        .map_err(|_| ArgumentError::InvalidSampleCount(s.to_string()))
}

/// Parse the power-law exponent
pub fn parse_gamma(s: &str) -> Result<f64, ArgumentError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite())
        .ok_or_else(|| ArgumentError::InvalidGamma(s.to_string()))
}

/// Build and validate the effective configuration
///
/// Starts from the config file when one is given, otherwise from defaults,
/// then overlays command line values.
pub fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let gamma = parse_gamma(&cli.gamma)?;

    let base = match &cli.config {
        Some(path) => toml::parse_toml_file(path)?,
        None => GeneratorConfig {
            distribution: DistributionParameters::power_law(gamma),
            sampling: SamplingConfig::default(),
        },
    };

    let config = toml::merge_cli_with_config(cli, gamma, base);

    validator::validate_config(&config).context("Configuration validation failed")?;

    Ok(config)
}
