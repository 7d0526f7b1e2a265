//! CLI output formatting.

use std::f64::consts::PI;
use std::io::{self, Write};
use std::time::Duration;

use picalc_orchestration::interfaces::WorkloadReport;

/// Format an estimate with enough digits to see where it leaves π.
#[must_use]
pub fn format_estimate(value: f64) -> String {
    format!("{value:.12}")
}

/// Format the absolute distance of an estimate from π.
#[must_use]
pub fn format_error(value: f64) -> String {
    format!("{:.3e}", (value - PI).abs())
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Ratio of summed worker time to wall time; close to the worker count when
/// the workers really ran side by side.
#[must_use]
pub fn parallel_speedup(report: &WorkloadReport) -> Option<f64> {
    let wall = report.elapsed.as_secs_f64();
    if report.results.is_empty() || wall <= 0.0 {
        return None;
    }
    let busy: f64 = report.results.iter().map(|r| r.duration.as_secs_f64()).sum();
    Some(busy / wall)
}

/// Render a report as pretty-printed JSON.
pub fn report_to_json(report: &WorkloadReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write a report to a file as JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, report: &WorkloadReport) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, report)?;
    writeln!(file)?;
    Ok(())
}
