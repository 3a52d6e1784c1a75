//! Configuration validation

use super::*;
use crate::error::ConfigError;

/// Validate complete configuration
pub fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    validate_distribution(&config.distribution)?;
    validate_sampling(&config.sampling)?;

    Ok(())
}

/// Validate distribution parameters
///
/// `continuous` is not rejected here: it is a valid request that the
/// driver reports as unsupported once sampling starts.
pub fn validate_distribution(params: &DistributionParameters) -> Result<(), ConfigError> {
    for (name, value) in [
        ("gamma", params.gamma),
        ("kappa", params.kappa),
        ("offset", params.offset),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { name, value });
        }
    }

    params.cutoff()?;

    Ok(())
}

/// Validate sampling tunables
pub fn validate_sampling(sampling: &SamplingConfig) -> Result<(), ConfigError> {
    if sampling.resolution < 2 {
        return Err(ConfigError::InvalidResolution(sampling.resolution));
    }

    if sampling.block_size == 0 {
        return Err(ConfigError::InvalidBlockSize(sampling.block_size));
    }

    Ok(())
}
