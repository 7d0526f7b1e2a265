//! Workload options and configuration.

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_WORKER_COUNT, MAX_WORKER_COUNT};
use crate::workload::PiError;

/// Options for a parallel workload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadOptions {
    /// Number of concurrent workers.
    pub worker_count: usize,
    /// Series terms summed by each worker.
    pub iterations: u64,
    /// Pin each worker thread to a CPU core.
    pub pin_cores: bool,
}

impl Default for WorkloadOptions {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            iterations: DEFAULT_ITERATIONS,
            pin_cores: false,
        }
    }
}

impl WorkloadOptions {
    /// Create options for the given worker count and iteration bound.
    #[must_use]
    pub fn new(worker_count: usize, iterations: u64) -> Self {
        Self {
            worker_count,
            iterations,
            pin_cores: false,
        }
    }

    /// Normalize options, applying the default worker count when zero.
    ///
    /// The CLI already rejects a zero worker count; this covers library
    /// callers that build options by hand, where zero means "use the default"
    /// rather than the empty run `run_workload` performs for zero workers.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.worker_count == 0 {
            self.worker_count = DEFAULT_WORKER_COUNT;
        }
        self
    }

    /// Reject worker counts above [`MAX_WORKER_COUNT`].
    pub fn validate(&self) -> Result<(), PiError> {
        if self.worker_count > MAX_WORKER_COUNT {
            return Err(PiError::Config(format!(
                "worker count {} exceeds maximum of {MAX_WORKER_COUNT}",
                self.worker_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = WorkloadOptions::default();
        assert_eq!(opts.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(opts.iterations, DEFAULT_ITERATIONS);
        assert!(!opts.pin_cores);
    }

    #[test]
    fn normalize_zero_workers() {
        let opts = WorkloadOptions::new(0, 10).normalize();
        assert_eq!(opts.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(opts.iterations, 10);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = WorkloadOptions::new(7, 0).normalize();
        assert_eq!(opts.worker_count, 7);
        assert_eq!(opts.iterations, 0);
    }

    #[test]
    fn validate_rejects_too_many_workers() {
        let opts = WorkloadOptions::new(MAX_WORKER_COUNT + 1, 10);
        assert!(matches!(opts.validate(), Err(PiError::Config(_))));
        assert!(WorkloadOptions::new(MAX_WORKER_COUNT, 10).validate().is_ok());
    }
}
