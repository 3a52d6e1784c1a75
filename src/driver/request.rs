//! Total-count accounting for a generation run

/// Number of samples still to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    remaining: u64,
}

impl SampleRequest {
    /// Request `total_count` samples; zero or negative requests nothing
    pub fn new(total_count: i64) -> Self {
        Self {
            remaining: total_count.max(0) as u64,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Size of the next block: min(remaining, block_size)
    pub fn next_block(&self, block_size: usize) -> usize {
        self.remaining.min(block_size as u64) as usize
    }

    /// Account for a drawn block
    ///
    /// # Panics
    ///
    /// Panics if `drawn` exceeds the remaining count.
    pub fn consume(&mut self, drawn: usize) {
        assert!(
            drawn as u64 <= self.remaining,
            "Drew {} samples with only {} remaining",
            drawn,
            self.remaining
        );
        self.remaining -= drawn as u64;
    }
}
