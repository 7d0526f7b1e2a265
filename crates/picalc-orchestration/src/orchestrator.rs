//! Core orchestration: parallel fan-out/join and result analysis.

use std::time::Instant;

use tracing::{debug, info};

use picalc_core::constants::WORKER_THREAD_PREFIX;
use picalc_core::observer::WorkerObserver;
use picalc_core::observers::NoOpObserver;
use picalc_core::options::WorkloadOptions;
use picalc_core::progress::WorkerUpdate;
use picalc_core::series::LeibnizSeries;
use picalc_core::workload::{PiError, Workload};

use crate::affinity;
use crate::interfaces::{WorkerResult, WorkloadReport};

/// Run `worker_count` concurrent π estimations of `iterations` terms each.
///
/// Blocks until every worker has finished and returns one result per worker.
pub fn run_parallel(worker_count: usize, iterations: u64) -> Result<WorkloadReport, PiError> {
    run_workload(
        &LeibnizSeries::new(),
        &WorkloadOptions::new(worker_count, iterations),
    )
}

/// Run a workload on every worker described by `opts`.
pub fn run_workload(
    workload: &dyn Workload,
    opts: &WorkloadOptions,
) -> Result<WorkloadReport, PiError> {
    run_workload_with_observer(workload, opts, &NoOpObserver::new())
}

/// Run a workload on every worker described by `opts`, reporting each
/// worker's start and finish to `observer`.
///
/// A dedicated pool of exactly `worker_count` threads is built for the call
/// and torn down afterwards. Each worker runs on its own pool thread, which is
/// also the thread pinned by `opts.pin_cores`, and writes only its own result
/// slot.
pub fn run_workload_with_observer(
    workload: &dyn Workload,
    opts: &WorkloadOptions,
    observer: &dyn WorkerObserver,
) -> Result<WorkloadReport, PiError> {
    opts.validate()?;

    let worker_count = opts.worker_count;
    let iterations = opts.iterations;
    if worker_count == 0 {
        debug!(workload = workload.name(), "No workers requested");
        return Ok(WorkloadReport::empty(workload.name(), iterations));
    }

    let pool = build_pool(worker_count, opts.pin_cores)?;

    info!(
        workload = workload.name(),
        workers = worker_count,
        iterations,
        "Starting parallel workload"
    );
    let start_time = Instant::now();

    // Broadcast runs the closure once on every pool thread; results come back
    // in thread-index order, so worker i is pool thread i.
    let results: Vec<WorkerResult> =
        pool.broadcast(|ctx| run_worker(workload, observer, ctx.index(), iterations));

    let elapsed = start_time.elapsed();
    info!(
        workload = workload.name(),
        workers = worker_count,
        elapsed = ?elapsed,
        "All workers finished"
    );

    Ok(WorkloadReport {
        workload: workload.name().to_string(),
        iterations,
        worker_count,
        results,
        elapsed,
    })
}

fn run_worker(
    workload: &dyn Workload,
    observer: &dyn WorkerObserver,
    index: usize,
    iterations: u64,
) -> WorkerResult {
    observer.on_update(&WorkerUpdate::started(index, workload.name(), iterations));

    let start = Instant::now();
    let estimate = workload.run(iterations);
    let duration = start.elapsed();

    observer.on_update(&WorkerUpdate::finished(
        index,
        workload.name(),
        iterations,
        estimate,
        duration,
    ));

    WorkerResult {
        worker: index,
        estimate,
        duration,
    }
}

fn build_pool(worker_count: usize, pin_cores: bool) -> Result<rayon::ThreadPool, PiError> {
    let mut builder = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .thread_name(|i| format!("{WORKER_THREAD_PREFIX}-{i}"));

    if pin_cores {
        let cores = affinity::available_cores();
        debug!(cores = cores.len(), "Pinning worker threads");
        builder = builder.start_handler(move |index| {
            affinity::pin_current(index, &cores);
        });
    }

    builder.build().map_err(|e| PiError::Spawn(e.to_string()))
}

/// Check that every worker produced the same value.
pub fn analyze_results(results: &[WorkerResult]) -> Result<(), PiError> {
    let Some(first) = results.first() else {
        return Err(PiError::Calculation("no worker results".into()));
    };

    let expected = first.estimate.to_bits();
    for result in &results[1..] {
        if result.estimate.to_bits() != expected {
            return Err(PiError::Mismatch);
        }
    }

    Ok(())
}
