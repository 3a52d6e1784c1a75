//! Streaming sampler driver
//!
//! The driver owns one generation run from parameters to output lines:
//!
//! ```text
//! Idle → BuildingTable → ConstructingSampler → Sampling → Done
//!                     ↘            ↘              ↘
//!                              Failed(kind)
//! ```
//!
//! # Memory
//!
//! Samples are drawn in blocks of at most `block_size` into a single buffer
//! reused for the whole run, so the working set is bounded by the support
//! size plus one block regardless of how many samples are requested.
//!
//! # Example
//!
//! ```
//! use plgen::config::SamplingConfig;
//! use plgen::distribution::DistributionParameters;
//! use plgen::driver;
//!
//! let params = DistributionParameters::power_law(2.0);
//! let mut out = Vec::new();
//! let summary = driver::run(&params, 5, &SamplingConfig::with_seed(1), &mut out).unwrap();
//!
//! assert_eq!(summary.samples_written, 5);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
//! ```

pub mod request;

pub use request::SampleRequest;

use crate::config::{validator, SamplingConfig};
use crate::distribution::{self, DistributionParameters};
use crate::error::{ConfigError, RunError};
use crate::output::SampleWriter;
use crate::sampler::alias::AliasSampler;
use crate::sampler::DiscreteSampler;
use std::io::Write;

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    BuildingTable,
    ConstructingSampler,
    Sampling { remaining: u64 },
    Done,
    /// Terminal failure, carrying the failure's exit code
    Failed { exit_code: i32 },
}

impl DriverState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DriverState::Done | DriverState::Failed { .. })
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub samples_written: u64,
    pub blocks: u64,
}

/// Drives a single generation run
pub struct Driver<'a> {
    config: &'a SamplingConfig,
    state: DriverState,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a SamplingConfig) -> Self {
        Self {
            config,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Generate `total_count` samples into `sink`
    ///
    /// A zero or negative count succeeds without building anything.
    pub fn run<W: Write>(
        &mut self,
        params: &DistributionParameters,
        total_count: i64,
        sink: &mut W,
    ) -> Result<RunSummary, RunError> {
        let request = SampleRequest::new(total_count);
        if request.is_done() {
            self.state = DriverState::Done;
            return Ok(RunSummary::default());
        }

        let result = self.build_and_drive(params, request, sink);
        if let Err(ref e) = result {
            if !self.state.is_terminal() {
                self.fail(e);
            }
        }
        result
    }

    fn build_and_drive<W: Write>(
        &mut self,
        params: &DistributionParameters,
        request: SampleRequest,
        sink: &mut W,
    ) -> Result<RunSummary, RunError> {
        validator::validate_sampling(self.config)?;

        self.state = DriverState::BuildingTable;
        let table = distribution::build(params.gamma, params.kappa, self.config.resolution)?;
        tracing::debug!(
            gamma = params.gamma,
            kappa = params.kappa,
            resolution = table.len(),
            "weight table built"
        );

        self.state = DriverState::ConstructingSampler;
        let sampler = match self.config.seed {
            Some(seed) => AliasSampler::seeded(table, seed)?,
            None => AliasSampler::from_entropy(table)?,
        };

        self.drive(sampler, params, request, sink)
    }

    /// Draw `request` samples from an already constructed sampler
    ///
    /// Takes ownership of the sampler; it is released exactly once when
    /// this returns, whether sampling succeeded or failed.
    pub fn drive<S: DiscreteSampler, W: Write>(
        &mut self,
        sampler: S,
        params: &DistributionParameters,
        request: SampleRequest,
        sink: &mut W,
    ) -> Result<RunSummary, RunError> {
        let result = self.sample_blocks(sampler, params, request, sink);
        match result {
            Ok(_) => self.state = DriverState::Done,
            Err(ref e) => self.fail(e),
        }
        result
    }

    fn sample_blocks<S: DiscreteSampler, W: Write>(
        &mut self,
        mut sampler: S,
        params: &DistributionParameters,
        mut request: SampleRequest,
        sink: &mut W,
    ) -> Result<RunSummary, RunError> {
        let block_size = self.config.block_size;
        if block_size == 0 {
            return Err(ConfigError::InvalidBlockSize(block_size).into());
        }

        let mut block: Vec<usize> = Vec::new();
        block
            .try_reserve_exact(request.next_block(block_size))
            .map_err(|_| RunError::AllocationFailure)?;

        tracing::debug!(
            support_len = sampler.support_len(),
            total = request.remaining(),
            block_size,
            "sampling started"
        );

        let mut writer = SampleWriter::new(sink, params.offset);
        let mut blocks = 0u64;

        while !request.is_done() {
            self.state = DriverState::Sampling {
                remaining: request.remaining(),
            };

            let n = request.next_block(block_size);
            sampler.draw_many(n, &mut block);

            if params.continuous {
                return Err(RunError::Unsupported("continuous sampling"));
            }

            writer.write_block(&block)?;

            request.consume(n);
            blocks += 1;
            tracing::trace!(block = blocks, drawn = n, remaining = request.remaining(), "block written");
        }

        writer.flush()?;

        Ok(RunSummary {
            samples_written: writer.lines_written(),
            blocks,
        })
    }

    fn fail(&mut self, err: &RunError) {
        if !err.is_broken_pipe() {
            tracing::debug!(state = ?self.state, error = %err, "run failed");
        }
        self.state = DriverState::Failed {
            exit_code: err.exit_code(),
        };
    }
}

/// Generate `total_count` samples of `params` into `sink`
pub fn run<W: Write>(
    params: &DistributionParameters,
    total_count: i64,
    config: &SamplingConfig,
    sink: &mut W,
) -> Result<RunSummary, RunError> {
    Driver::new(config).run(params, total_count, sink)
}
