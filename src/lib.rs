//! plgen - Power-law sample generator
//!
//! plgen draws independent samples from a discretized power-law distribution
//! with an optional exponential cutoff, `P(k) ∝ k^(-gamma) · exp(-k/kappa)`,
//! and streams them one integer per line. It is meant for producing synthetic
//! heavy-tailed datasets at large sample counts.
//!
//! # Architecture
//!
//! - **Distribution builder**: unnormalized weight table over a bounded support
//! - **Discrete sampler**: alias method, O(N) setup and O(1) per draw
//! - **Streaming driver**: block-wise draw loop with bounded memory
//! - **Configuration**: CLI, TOML files, validation

pub mod config;
pub mod distribution;
pub mod driver;
pub mod error;
pub mod output;
pub mod sampler;

// Re-export commonly used types
pub use config::{GeneratorConfig, SamplingConfig};
pub use distribution::DistributionParameters;
pub use driver::{run, RunSummary};
pub use error::{ConfigError, RunError, SamplerError};
