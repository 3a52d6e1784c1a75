//! TOML configuration file parsing
//!
//! ```toml
//! [distribution]
//! gamma = 2.5
//! kappa = 1000.0
//! offset = 0.0
//!
//! [sampling]
//! resolution = 100000
//! block_size = 16384
//! seed = 42
//! ```

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<GeneratorConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Render configuration as TOML
pub fn to_toml_string(config: &GeneratorConfig) -> Result<String> {
    ::toml::to_string(config).context("Failed to serialize configuration")
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
///
/// The file supplies every value the command line leaves unset; gamma on
/// the command line always wins.
pub fn merge_cli_with_config(cli: &Cli, gamma: f64, mut config: GeneratorConfig) -> GeneratorConfig {
    config.distribution.gamma = gamma;

    if let Some(kappa) = cli.kappa {
        config.distribution.kappa = kappa;
    }
    if let Some(offset) = cli.offset {
        config.distribution.offset = offset;
    }
    if cli.continuous {
        config.distribution.continuous = true;
    }

    if let Some(resolution) = cli.resolution {
        config.sampling.resolution = resolution;
    }
    if let Some(block_size) = cli.block_size {
        config.sampling.block_size = block_size;
    }
    if cli.seed.is_some() {
        config.sampling.seed = cli.seed;
    }

    config
}
