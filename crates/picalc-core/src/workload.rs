//! Workload trait and the error type shared across the workspace.
//!
//! `Workload` is the public trait consumed by orchestration: one call to
//! `run` is the whole job of a single worker.

/// Error type for parallel workload runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker pool could not be started.
    #[error("failed to spawn workers: {0}")]
    Spawn(String),

    /// Workers given identical input produced different results.
    #[error("result mismatch between workers")]
    Mismatch,
}

/// A CPU-bound unit of work run to completion by one worker.
///
/// Implementations must be pure in `iterations`: the orchestrator relies on
/// identical inputs producing identical outputs when it cross-checks workers.
pub trait Workload: Send + Sync {
    /// Run the workload for the given iteration bound.
    fn run(&self, iterations: u64) -> f64;

    /// Get the name of this workload.
    fn name(&self) -> &'static str;
}
