//! Pinning worker threads to CPU cores.

use core_affinity::CoreId;
use tracing::{debug, warn};

/// Core ids available for pinning; empty when the platform reports none.
#[must_use]
pub fn available_cores() -> Vec<CoreId> {
    core_affinity::get_core_ids().unwrap_or_default()
}

/// Pin the current thread to `cores[index % cores.len()]`.
///
/// Returns whether the thread was pinned. Failures are logged, never fatal.
pub fn pin_current(index: usize, cores: &[CoreId]) -> bool {
    if cores.is_empty() {
        warn!(worker = index, "No core ids reported; worker not pinned");
        return false;
    }
    let core = cores[index % cores.len()];
    let pinned = core_affinity::set_for_current(core);
    if pinned {
        debug!(worker = index, core = core.id, "Pinned worker thread");
    } else {
        warn!(worker = index, core = core.id, "Failed to pin worker thread");
    }
    pinned
}
