//! # picalc-core
//!
//! Core library for picalc: a Leibniz-type π series used as a CPU-bound
//! workload, plus the trait, options and observers the orchestrator runs
//! it through.

pub mod constants;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod series;
pub mod workload;

// Re-exports
pub use constants::{exit_codes, DEFAULT_ITERATIONS, DEFAULT_WORKER_COUNT, MAX_WORKER_COUNT};
pub use observer::{WorkerObserver, WorkerSubject};
pub use options::WorkloadOptions;
pub use progress::WorkerUpdate;
pub use series::{estimate_pi, LeibnizSeries};
pub use workload::{PiError, Workload};
