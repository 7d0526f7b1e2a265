//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

/// Trait for presenting a workload run to the user.
pub trait ResultPresenter: Send + Sync {
    /// Announce the start of the parallel phase.
    fn present_start(&self, worker_count: usize, iterations: u64);

    /// Announce that every worker has finished.
    fn present_done(&self, report: &WorkloadReport);

    /// Present per-worker results.
    fn present_report(&self, report: &WorkloadReport, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerResult {
    /// Worker index within the pool.
    pub worker: usize,
    /// Value the workload returned.
    pub estimate: f64,
    /// Time the worker spent in the workload.
    pub duration: Duration,
}

/// Outcome of a complete parallel run, one result per worker in index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadReport {
    /// Workload name.
    pub workload: String,
    /// Per-worker iteration bound.
    pub iterations: u64,
    /// Number of workers spawned.
    pub worker_count: usize,
    /// Per-worker results.
    pub results: Vec<WorkerResult>,
    /// Wall-clock time of the whole fan-out/join.
    pub elapsed: Duration,
}

impl WorkloadReport {
    /// Report for a run that spawned no workers.
    #[must_use]
    pub fn empty(workload: &str, iterations: u64) -> Self {
        Self {
            workload: workload.to_string(),
            iterations,
            worker_count: 0,
            results: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Estimates in worker order.
    #[must_use]
    pub fn estimates(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.estimate).collect()
    }

    /// Longest single-worker duration.
    #[must_use]
    pub fn slowest(&self) -> Option<&WorkerResult> {
        self.results.iter().max_by_key(|r| r.duration)
    }
}
