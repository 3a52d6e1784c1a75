//! Power-law distribution with optional exponential cutoff
//!
//! This module turns user-facing distribution parameters into an unnormalized
//! weight table over a bounded integer support {0, ..., N-1}:
//!
//! ```text
//! P(k) ∝ k^(-gamma) · exp(-k/kappa),   k = 1..N-1
//! ```
//!
//! # Regimes
//!
//! - **Pure power law** (`kappa < 0`): weight[k] = k^(-gamma)
//! - **Power law with cutoff** (`kappa > 0`): weight[k] = exp(-k/kappa) · k^(-gamma)
//! - **Invalid** (`kappa == 0`): rejected with [`ConfigError::ZeroCutoff`]
//!
//! weight[0] is always zero, so k=0 is never drawn. Values above N-1 are
//! truncated away; this is an accepted approximation, not an error.
//!
//! # Example
//!
//! ```
//! use plgen::distribution::build;
//!
//! let table = build(2.0, -1.0, 1000).unwrap();
//! assert_eq!(table.len(), 1000);
//! assert_eq!(table.as_slice()[0], 0.0);
//! assert_eq!(table.as_slice()[1], 1.0);
//! ```

pub mod weights;

pub use weights::{build, WeightTable};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters of the sampled distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParameters {
    /// Power-law exponent
    pub gamma: f64,
    /// Cutoff scale; negative disables the cutoff, zero is invalid
    #[serde(default = "default_kappa")]
    pub kappa: f64,
    /// Added to every drawn value before it is written
    #[serde(default)]
    pub offset: f64,
    /// Request continuous samples (unsupported)
    #[serde(default)]
    pub continuous: bool,
}

/// Sentinel kappa meaning "no cutoff"
pub const NO_CUTOFF: f64 = -1.0;

fn default_kappa() -> f64 {
    NO_CUTOFF
}

impl DistributionParameters {
    /// Pure power law with the given exponent
    pub fn power_law(gamma: f64) -> Self {
        Self {
            gamma,
            kappa: NO_CUTOFF,
            offset: 0.0,
            continuous: false,
        }
    }

    /// Power law with exponential cutoff
    pub fn with_cutoff(gamma: f64, kappa: f64) -> Self {
        Self {
            kappa,
            ..Self::power_law(gamma)
        }
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Parsed cutoff regime
    pub fn cutoff(&self) -> Result<Cutoff, ConfigError> {
        Cutoff::from_kappa(self.kappa)
    }
}

impl Default for DistributionParameters {
    fn default() -> Self {
        Self::power_law(2.0)
    }
}

/// Exponential cutoff regime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    /// Pure power law
    None,
    /// Multiply by exp(-k/scale); scale is strictly positive
    Exponential(f64),
}

impl Cutoff {
    /// Interpret a raw kappa value
    ///
    /// Negative kappa disables the cutoff. Zero is never coerced to either
    /// regime and always fails.
    pub fn from_kappa(kappa: f64) -> Result<Self, ConfigError> {
        if kappa == 0.0 {
            Err(ConfigError::ZeroCutoff)
        } else if kappa > 0.0 {
            Ok(Cutoff::Exponential(kappa))
        } else {
            Ok(Cutoff::None)
        }
    }
}
