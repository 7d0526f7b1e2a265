//! CLI result presenter.

use std::f64::consts::PI;

use picalc_orchestration::interfaces::{ResultPresenter, WorkloadReport};

use crate::output::{
    format_duration, format_error, format_estimate, format_number, parallel_speedup,
    report_to_json,
};
use crate::ui;

/// CLI result presenter.
///
/// `Start` and `Done` always frame the parallel phase. In JSON mode they go
/// to stderr so stdout stays machine-readable.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    fn marker(&self, text: &str) {
        if self.json {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_start(&self, worker_count: usize, iterations: u64) {
        self.marker("Start");
        if self.verbose && !self.quiet {
            eprintln!(
                "Spawning {worker_count} workers, {} iterations each",
                format_number(iterations)
            );
        }
    }

    fn present_done(&self, report: &WorkloadReport) {
        self.marker("Done");
        if self.verbose && !self.quiet {
            eprintln!("Parallel phase took {}", format_duration(report.elapsed));
        }
    }

    fn present_report(&self, report: &WorkloadReport, details: bool) {
        if self.quiet {
            return;
        }

        if self.json {
            match report_to_json(report) {
                Ok(json) => println!("{json}"),
                Err(e) => self.present_error(&format!("failed to encode report: {e}")),
            }
            return;
        }

        ui::print_header("Workers");
        println!(
            "  {:<8} {:>16} {:>12} {:>12}",
            "Worker", "Estimate", "|Error|", "Duration"
        );
        println!("  {:-<51}", "");
        for result in &report.results {
            let error_cell = format!("{:>12}", format_error(result.estimate));
            println!(
                "  {:<8} {:>16} {} {:>12}",
                result.worker,
                format_estimate(result.estimate),
                ui::style_error_cell(&error_cell, (result.estimate - PI).abs()),
                format_duration(result.duration),
            );
        }

        if details {
            println!();
            println!("Workload: {}", report.workload);
            println!("Iterations per worker: {}", format_number(report.iterations));
            println!("Workers: {}", report.worker_count);
            println!("Wall time: {}", format_duration(report.elapsed));
            if let Some(slowest) = report.slowest() {
                println!(
                    "Slowest worker: {} ({})",
                    slowest.worker,
                    format_duration(slowest.duration)
                );
            }
            if let Some(speedup) = parallel_speedup(report) {
                println!("Parallel speedup: {speedup:.2}x");
            }
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
