//! Worker progress updates.

use std::time::Duration;

/// Update sent from a worker to observers when it starts and when it finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerUpdate {
    /// Worker index within the pool.
    pub worker_index: usize,
    /// Name of the workload being run.
    pub workload: &'static str,
    /// Iteration bound the worker was given.
    pub iterations: u64,
    /// Computed value, present once the worker is done.
    pub estimate: Option<f64>,
    /// Time spent in the workload so far.
    pub elapsed: Duration,
    /// Whether this is the final update for the worker.
    pub done: bool,
}

impl WorkerUpdate {
    /// Create a start notification.
    #[must_use]
    pub fn started(worker_index: usize, workload: &'static str, iterations: u64) -> Self {
        Self {
            worker_index,
            workload,
            iterations,
            estimate: None,
            elapsed: Duration::ZERO,
            done: false,
        }
    }

    /// Create a completion notification.
    #[must_use]
    pub fn finished(
        worker_index: usize,
        workload: &'static str,
        iterations: u64,
        estimate: f64,
        elapsed: Duration,
    ) -> Self {
        Self {
            worker_index,
            workload,
            iterations,
            estimate: Some(estimate),
            elapsed,
            done: true,
        }
    }
}
