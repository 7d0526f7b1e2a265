//! Application configuration from CLI flags and environment.

use clap::Parser;

use picalc_core::constants::{DEFAULT_ITERATIONS, DEFAULT_WORKER_COUNT, MAX_WORKER_COUNT};
use picalc_core::options::WorkloadOptions;

/// picalc — parallel Leibniz-series π workload.
///
/// Spawns a fixed number of workers that each sum the same number of series
/// terms, waits for all of them, and reports every worker's estimate.
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of concurrent workers.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORKER_COUNT,
        env = "PICALC_WORKERS",
        value_parser = parse_worker_count
    )]
    pub workers: usize,

    /// Series terms summed by each worker.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_ITERATIONS,
        env = "PICALC_ITERATIONS",
        value_parser = parse_iterations
    )]
    pub iterations: u64,

    /// Pin each worker thread to a CPU core.
    #[arg(long)]
    pub pin_cores: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only the Start/Done markers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Fail when workers disagree instead of warning.
    #[arg(long)]
    pub strict: bool,

    /// Also write the JSON report to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Options for the orchestrator, normalized.
    #[must_use]
    pub fn workload_options(&self) -> WorkloadOptions {
        WorkloadOptions {
            worker_count: self.workers,
            iterations: self.iterations,
            pin_cores: self.pin_cores,
        }
        .normalize()
    }
}

fn parse_worker_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a worker count"))?;
    if n == 0 || n > MAX_WORKER_COUNT {
        return Err(format!("worker count must be between 1 and {MAX_WORKER_COUNT}"));
    }
    Ok(n)
}

/// Parse an iteration bound, allowing `_` or `,` as digit separators.
fn parse_iterations(s: &str) -> Result<u64, String> {
    let digits: String = s.trim().chars().filter(|c| *c != '_' && *c != ',').collect();
    digits
        .parse()
        .map_err(|_| format!("`{s}` is not a non-negative iteration count"))
}
