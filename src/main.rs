//! plgen CLI entry point

use anyhow::Result;
use plgen::config::cli::Cli;
use plgen::config::cli_convert::{self, ArgumentError};
use plgen::config::toml::to_toml_string;
use plgen::{driver, ConfigError, RunError};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Usage errors exit with 2, --help and --version with 0
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(run_err) = e.downcast_ref::<RunError>() {
                if run_err.is_broken_pipe() {
                    tracing::debug!("output closed by reader");
                    return ExitCode::SUCCESS;
                }
            }
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Log to stderr; stdout carries the samples
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let num_samples = cli_convert::parse_num_samples(&cli.num_samples)?;
    let config = cli_convert::build_config(cli)?;

    tracing::info!(%config, num_samples, seed = ?config.sampling.seed, "configuration loaded");

    if cli.dry_run {
        eprint!("{}", to_toml_string(&config)?);
        eprintln!();
        eprintln!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    let summary = driver::run(&config.distribution, num_samples, &config.sampling, &mut sink)?;
    tracing::info!(
        samples = summary.samples_written,
        blocks = summary.blocks,
        "generation complete"
    );

    Ok(())
}

/// Map a failure to its process exit code
fn exit_code(e: &anyhow::Error) -> u8 {
    let code = if let Some(err) = e.downcast_ref::<ArgumentError>() {
        err.exit_code()
    } else if let Some(err) = e.downcast_ref::<RunError>() {
        err.exit_code()
    } else if let Some(err) = e.downcast_ref::<ConfigError>() {
        RunError::from(err.clone()).exit_code()
    } else {
        // Unreadable or malformed config file
        6
    };

    code as u8
}
