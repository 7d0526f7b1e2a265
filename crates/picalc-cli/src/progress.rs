//! Progress bar driven by worker completions.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use picalc_core::observer::WorkerObserver;
use picalc_core::progress::WorkerUpdate;

const TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:30} {pos}/{len} workers done";

/// Observer that advances a progress bar each time a worker finishes.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Create a bar sized for `worker_count` workers. Hidden when `hidden`.
    #[must_use]
    pub fn new(worker_count: usize, hidden: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(worker_count as u64),
            if hidden {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            },
        );
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style);
        }
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        Self { bar }
    }

    /// Number of workers reported finished so far.
    #[must_use]
    pub fn finished(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl WorkerObserver for ProgressBarObserver {
    fn on_update(&self, update: &WorkerUpdate) {
        if update.done {
            self.bar.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn counts_finished_workers_only() {
        let observer = ProgressBarObserver::new(2, true);
        observer.on_update(&WorkerUpdate::started(0, "test", 1));
        assert_eq!(observer.finished(), 0);
        observer.on_update(&WorkerUpdate::finished(0, "test", 1, 1.0, Duration::ZERO));
        observer.on_update(&WorkerUpdate::finished(1, "test", 1, 1.0, Duration::ZERO));
        assert_eq!(observer.finished(), 2);
        observer.finish();
    }
}
