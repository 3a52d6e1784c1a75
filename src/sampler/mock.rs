//! Scripted sampler for testing
//!
//! Replays a fixed sequence of indices instead of drawing at random, and
//! records every block request and release so tests can check the driver's
//! block accounting and release discipline.
//!
//! # Example
//!
//! ```
//! use plgen::sampler::{mock::ScriptedSampler, DiscreteSampler};
//!
//! let mut sampler = ScriptedSampler::new(vec![1, 2, 3], 10);
//! let log = sampler.log();
//!
//! let mut block = Vec::new();
//! sampler.draw_many(5, &mut block);
//! assert_eq!(block, vec![1, 2, 3, 1, 2]);
//!
//! drop(sampler);
//! assert_eq!(log.releases(), 1);
//! assert_eq!(log.block_sizes(), vec![5]);
//! ```

use super::DiscreteSampler;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared record of what happened to a [`ScriptedSampler`]
#[derive(Clone, Default)]
pub struct SamplerLog {
    block_sizes: Arc<Mutex<Vec<usize>>>,
    releases: Arc<AtomicUsize>,
}

impl SamplerLog {
    /// Sizes of every `draw_many` call, in order
    pub fn block_sizes(&self) -> Vec<usize> {
        self.block_sizes.lock().map(|b| b.clone()).unwrap_or_default()
    }

    /// Number of times the sampler was released
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Sampler replaying `script` cyclically
pub struct ScriptedSampler {
    script: Vec<usize>,
    position: usize,
    support_len: usize,
    log: SamplerLog,
}

impl ScriptedSampler {
    /// `script` must be non-empty
    pub fn new(script: Vec<usize>, support_len: usize) -> Self {
        assert!(!script.is_empty(), "Script must not be empty");

        Self {
            script,
            position: 0,
            support_len,
            log: SamplerLog::default(),
        }
    }

    /// Handle to this sampler's log, valid after the sampler is dropped
    pub fn log(&self) -> SamplerLog {
        self.log.clone()
    }
}

impl DiscreteSampler for ScriptedSampler {
    fn support_len(&self) -> usize {
        self.support_len
    }

    fn draw_many(&mut self, count: usize, out: &mut Vec<usize>) {
        if let Ok(mut sizes) = self.log.block_sizes.lock() {
            sizes.push(count);
        }

        out.clear();
        for _ in 0..count {
            out.push(self.script[self.position]);
            self.position = (self.position + 1) % self.script.len();
        }
    }
}

impl Drop for ScriptedSampler {
    fn drop(&mut self) {
        self.log.releases.fetch_add(1, Ordering::SeqCst);
    }
}
