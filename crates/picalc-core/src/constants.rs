//! Constants for workload sizing and process exit codes.

/// Default number of concurrent workers.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default per-worker iteration bound (one billion series terms).
pub const DEFAULT_ITERATIONS: u64 = 1_000_000_000;

/// Upper bound on the worker count accepted from configuration.
pub const MAX_WORKER_COUNT: usize = 1024;

/// Prefix for the names of worker threads.
pub const WORKER_THREAD_PREFIX: &str = "picalc-worker";

/// Exit codes returned by the `picalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Worker results disagreed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
