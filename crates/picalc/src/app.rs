//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use picalc_cli::output::write_report;
use picalc_cli::presenter::CLIResultPresenter;
use picalc_cli::progress::ProgressBarObserver;
use picalc_cli::ui;
use picalc_core::observer::WorkerSubject;
use picalc_core::observers::LoggingObserver;
use picalc_core::series::LeibnizSeries;
use picalc_core::workload::Workload;
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::orchestrator::{analyze_results, run_workload_with_observer};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_with_workload(config, &LeibnizSeries::new())
}

/// Run the parallel phase for `workload` and present the outcome.
pub fn run_with_workload(config: &AppConfig, workload: &dyn Workload) -> Result<()> {
    let opts = config.workload_options();
    opts.validate()?;
    info!(version = %crate::version::full_version(), "Starting");

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);
    let progress = Arc::new(ProgressBarObserver::new(opts.worker_count, config.quiet));

    let observers = WorkerSubject::new();
    observers.register(Arc::new(LoggingObserver::new()));
    observers.register(progress.clone());

    presenter.present_start(opts.worker_count, opts.iterations);
    let report = run_workload_with_observer(workload, &opts, &observers)
        .context("parallel phase failed")?;
    progress.finish();
    presenter.present_done(&report);

    if report.results.len() > 1 {
        if let Err(e) = analyze_results(&report.results) {
            if config.strict {
                return Err(e).context("worker results disagree");
            }
            warn!(error = %e, "Worker results disagree");
            ui::print_warning(&e.to_string());
        }
    }

    presenter.present_report(&report, config.details);

    if let Some(ref path) = config.output {
        write_report(path, &report).with_context(|| format!("failed to write report to {path}"))?;
    }

    Ok(())
}
