//! Discrete samplers over a weighted integer support
//!
//! The driver only depends on the [`DiscreteSampler`] contract: draw blocks
//! of indices proportionally to the weights the sampler was built from, as
//! often as needed, without rebuilding. Releasing a sampler is dropping it;
//! ownership guarantees that happens exactly once on every exit path.
//!
//! # Samplers
//!
//! - **Alias**: Walker/Vose alias method, O(N) setup, O(1) per draw
//! - **Scripted**: replays a fixed index sequence (testing only)
//!
//! # Example
//!
//! ```
//! use plgen::distribution::build;
//! use plgen::sampler::{alias::AliasSampler, DiscreteSampler};
//!
//! let table = build(2.0, -1.0, 1000).unwrap();
//! let mut sampler = AliasSampler::seeded(table, 42).unwrap();
//!
//! let mut block = Vec::new();
//! sampler.draw_many(16, &mut block);
//! assert_eq!(block.len(), 16);
//! assert!(block.iter().all(|&k| k >= 1 && k < 1000));
//! ```

pub mod alias;
pub mod mock;

/// Repeated independent draws from a fixed discrete distribution
///
/// # Thread Safety
///
/// Implementations are not required to be `Sync`: exactly one draw stream
/// uses a sampler instance at a time.
pub trait DiscreteSampler {
    /// Number of outcomes in the support, including zero-weight ones
    fn support_len(&self) -> usize;

    /// Draw `count` indices with replacement into `out`
    ///
    /// `out` is cleared first so a single buffer can be reused across blocks.
    /// Every index is in `0..support_len()` and has non-zero weight.
    fn draw_many(&mut self, count: usize, out: &mut Vec<usize>);
}
