//! Error types for the sampling pipeline
//!
//! Every failure is terminal for a run. Errors are surfaced to the caller
//! unchanged; the binary maps them to process exit codes via
//! [`RunError::exit_code`].

use std::io;
use thiserror::Error;

/// Invalid generator configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// kappa == 0 makes the cutoff term exp(-k/kappa) undefined
    #[error("kappa may not be zero")]
    ZeroCutoff,

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Support must contain at least one drawable value besides k=0
    #[error("resolution must be at least 2, got {0}")]
    InvalidResolution(usize),

    #[error("block_size must be at least 1, got {0}")]
    InvalidBlockSize(usize),
}

/// Discrete sampler construction failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// Weight table is empty or every weight is zero
    #[error("weight table is empty or all weights are zero")]
    DegenerateWeights,

    /// A weight is negative, NaN, infinite, or too large to sum safely
    #[error("weight table contains an invalid weight")]
    InvalidWeight,

    #[error("support of {0} outcomes is too large for the alias table")]
    TooManyOutcomes(usize),
}

/// Failure of a complete generation run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("error while initializing sampler: {0}")]
    Sampler(#[from] SamplerError),

    #[error("{0} not implemented yet")]
    Unsupported(&'static str),

    #[error("not enough memory")]
    AllocationFailure,

    #[error("failed to write samples: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Unsupported(_) => 5,
            RunError::Config(ConfigError::ZeroCutoff) => 8,
            RunError::Config(_) => 6,
            RunError::AllocationFailure => 7,
            RunError::Sampler(_) => 9,
            RunError::Io(_) => 10,
        }
    }

    /// True when the downstream reader closed the pipe
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RunError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
