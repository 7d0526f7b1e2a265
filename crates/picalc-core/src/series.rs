//! Leibniz-type alternating series for π.
//!
//! The counter walks down from the bound two terms at a time, so the
//! partial sums differ from textbook Leibniz indexing. Odd bounds converge
//! to π; even bounds settle roughly 0.38 above it.

use crate::workload::Workload;

/// Approximate π by summing `iterations` terms of the series.
///
/// Pure and infallible; `estimate_pi(0)` is exactly `4.0`.
///
/// # Example
/// ```
/// use picalc_core::series::estimate_pi;
///
/// assert_eq!(estimate_pi(0), 4.0);
/// assert_eq!(estimate_pi(2), 3.2);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_pi(iterations: u64) -> f64 {
    let mut n = iterations;
    let mut decimal = 1.0f64;

    while n > 2 {
        decimal -= 1.0 / (2.0 * n as f64 + 1.0);
        n -= 1;
        decimal += 1.0 / (2.0 * n as f64 + 1.0);
        n -= 1;
    }
    // Odd leftover.
    if n > 0 {
        decimal -= 1.0 / (2.0 * n as f64 + 1.0);
    }

    4.0 * decimal
}

/// The series as a [`Workload`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LeibnizSeries;

impl LeibnizSeries {
    /// Create a new series workload.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Workload for LeibnizSeries {
    fn run(&self, iterations: u64) -> f64 {
        estimate_pi(iterations)
    }

    fn name(&self) -> &'static str {
        "LeibnizSeries"
    }
}
