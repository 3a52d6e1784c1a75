//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

pub use crate::distribution::DistributionParameters;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default support size N
pub const DEFAULT_RESOLUTION: usize = 100_000;

/// Default number of samples drawn per block
pub const DEFAULT_BLOCK_SIZE: usize = 16_384;

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub distribution: DistributionParameters,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// Process-wide sampling tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Support size N; values above N-1 are never drawn
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    /// Samples drawn per block, bounding peak memory
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Seed for a reproducible stream (random when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            block_size: DEFAULT_BLOCK_SIZE,
            seed: None,
        }
    }
}

impl SamplingConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.distribution;
        write!(f, "P(k) ∝ k^(-{})", d.gamma)?;
        if d.kappa > 0.0 {
            write!(f, " · exp(-k/{})", d.kappa)?;
        }
        write!(f, ", k = 1..{}", self.sampling.resolution.saturating_sub(1))?;
        if d.offset != 0.0 {
            write!(f, ", offset {}", d.offset)?;
        }
        Ok(())
    }
}
