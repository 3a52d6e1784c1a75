//! Unnormalized weight table construction
//!
//! Weights are left unnormalized; the alias sampler normalizes them during
//! its own setup.

use super::Cutoff;
use crate::error::RunError;

/// Unnormalized weights over the support {0, ..., N-1}
///
/// Index 0 is always zero. Every other entry is non-negative; entries may
/// underflow to zero far in the tail, which makes them unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    /// Number of entries, including the zero-weight index 0
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights (the normalization constant 1/C)
    pub fn total_mass(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Index of the largest weight, or None for an all-zero table
    pub fn mode(&self) -> Option<usize> {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0.0)
            .fold(None, |best: Option<(usize, f64)>, (i, &w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((i, w)),
            })
            .map(|(i, _)| i)
    }

    /// Hand the raw weights over to sampler construction
    pub fn into_inner(self) -> Vec<f64> {
        self.weights
    }
}

impl From<Vec<f64>> for WeightTable {
    fn from(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

/// Build the weight table for (gamma, kappa) over `resolution` entries
///
/// Fails with `ConfigError::ZeroCutoff` before allocating anything when
/// `kappa == 0`, and with `RunError::AllocationFailure` when the table
/// cannot be reserved.
pub fn build(gamma: f64, kappa: f64, resolution: usize) -> Result<WeightTable, RunError> {
    let cutoff = Cutoff::from_kappa(kappa)?;

    let mut weights: Vec<f64> = Vec::new();
    weights
        .try_reserve_exact(resolution)
        .map_err(|_| RunError::AllocationFailure)?;

    if resolution > 0 {
        weights.push(0.0);
    }

    match cutoff {
        Cutoff::Exponential(kappa) => {
            // Evaluated in log space: exp(-i/kappa) * i^(-gamma) could be 0 * inf
            // for negative gamma, which would be NaN.
            weights.extend((1..resolution).map(|i| {
                let k = i as f64;
                (-k / kappa - gamma * k.ln()).exp()
            }));
        }
        Cutoff::None => {
            weights.extend((1..resolution).map(|i| (i as f64).powf(-gamma)));
        }
    }

    Ok(WeightTable { weights })
}
