//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// plgen - power-law sample generator
#[derive(Parser, Debug)]
#[command(name = "plgen")]
#[command(version, about, allow_negative_numbers = true)]
#[command(long_about = concat!(
    "Generates a given number of samples from a power-law distribution\n",
    "with an optional exponential cutoff. The pdf being sampled is given\n",
    "as follows:\n\n",
    "    P(k) = C * k^(-gamma) * exp(-k/kappa)\n\n",
    "where C is an appropriate normalization constant. gamma is given by\n",
    "the second positional argument, kappa is given by the -k switch.",
))]
pub struct Cli {
    /// Number of samples to generate (zero or negative generates nothing)
    #[arg(value_name = "NUM_SAMPLES")]
    pub num_samples: String,

    /// Power-law exponent
    #[arg(value_name = "GAMMA")]
    pub gamma: String,

    // === Distribution Options ===
    /// Use exponential cutoff with the given kappa (negative = no cutoff)
    #[arg(short = 'k', long)]
    pub kappa: Option<f64>,

    /// Add OFFSET to each generated sample
    #[arg(short = 'o', long)]
    pub offset: Option<f64>,

    /// Generate continuous samples
    #[arg(short = 'c', long)]
    pub continuous: bool,

    // === Sampling Options ===
    /// Size of the discretized support; samples are drawn from 1..N-1
    #[arg(long, value_name = "N")]
    pub resolution: Option<usize>,

    /// Number of samples drawn per block
    #[arg(long)]
    pub block_size: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, env = "PLGEN_SEED")]
    pub seed: Option<u64>,

    // === Runtime Options ===
    /// TOML configuration file (command line values take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate and print the effective configuration without sampling
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["plgen", "1000", "2.5"]).unwrap();

        assert_eq!(cli.num_samples, "1000");
        assert_eq!(cli.gamma, "2.5");
        assert_eq!(cli.kappa, None);
        assert_eq!(cli.offset, None);
        assert!(!cli.continuous);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["plgen", "-c", "-k", "50", "-o", "-3", "10", "2"]).unwrap();

        assert!(cli.continuous);
        assert_eq!(cli.kappa, Some(50.0));
        assert_eq!(cli.offset, Some(-3.0));
    }

    #[test]
    fn test_parse_negative_positionals() {
        let cli = Cli::try_parse_from(["plgen", "-5", "-1.5", "-k", "-1"]).unwrap();

        assert_eq!(cli.num_samples, "-5");
        assert_eq!(cli.gamma, "-1.5");
        assert_eq!(cli.kappa, Some(-1.0));
    }

    #[test]
    fn test_missing_gamma_is_usage_error() {
        let err = Cli::try_parse_from(["plgen", "100"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
