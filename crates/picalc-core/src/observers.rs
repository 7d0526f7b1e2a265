//! Concrete observer implementations.

use tracing::{debug, info};

use crate::observer::WorkerObserver;
use crate::progress::WorkerUpdate;

/// Observer that logs worker starts and completions.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerObserver for LoggingObserver {
    fn on_update(&self, update: &WorkerUpdate) {
        if update.done {
            info!(
                worker = update.worker_index,
                workload = %update.workload,
                estimate = update.estimate.unwrap_or(f64::NAN),
                elapsed = ?update.elapsed,
                "Worker finished"
            );
        } else {
            debug!(
                worker = update.worker_index,
                workload = %update.workload,
                iterations = update.iterations,
                "Worker started"
            );
        }
    }
}

/// Null object pattern — does nothing with worker updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerObserver for NoOpObserver {
    fn on_update(&self, _update: &WorkerUpdate) {
        // Intentionally empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn noop_observer_does_nothing() {
        let observer = NoOpObserver::new();
        observer.on_update(&WorkerUpdate::started(0, "test", 10));
    }

    #[test]
    fn logging_observer_handles_both_kinds() {
        let observer = LoggingObserver::default();
        observer.on_update(&WorkerUpdate::started(1, "test", 10));
        observer.on_update(&WorkerUpdate::finished(
            1,
            "test",
            10,
            3.0,
            Duration::from_millis(1),
        ));
    }
}
