//! # picalc-orchestration
//!
//! Parallel execution of workloads and analysis of per-worker results.

pub mod affinity;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{ResultPresenter, WorkerResult, WorkloadReport};
pub use orchestrator::{analyze_results, run_parallel, run_workload, run_workload_with_observer};
