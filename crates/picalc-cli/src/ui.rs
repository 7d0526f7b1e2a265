//! Terminal styling for headers, diagnostics and the worker table.

use console::{style, Color};

/// Distance from π under which an estimate is shown as converged.
const CLOSE_ERROR: f64 = 1e-3;
/// Distance from π under which an estimate is shown as approximate.
const ROUGH_ERROR: f64 = 1e-1;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

fn paint(text: &str, color: Color, bold: bool) -> String {
    if is_color_disabled() {
        return text.to_string();
    }
    let styled = style(text).fg(color);
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

/// Print a section header above the worker table.
pub fn print_header(text: &str) {
    println!("{}", paint(&format!("=== {text} ==="), Color::Cyan, true));
}

/// Print a warning, e.g. workers that disagree.
pub fn print_warning(text: &str) {
    eprintln!("{} {text}", paint("[WARN]", Color::Yellow, true));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", paint("[ERROR]", Color::Red, true));
}

/// Colour an already formatted `|error|` cell by how far the estimate is from π.
#[must_use]
pub fn style_error_cell(cell: &str, error: f64) -> String {
    let color = if error < CLOSE_ERROR {
        Color::Green
    } else if error < ROUGH_ERROR {
        Color::Yellow
    } else {
        Color::Red
    };
    paint(cell, color, false)
}
