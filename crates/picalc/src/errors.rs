//! Error handling and exit codes.

use picalc_core::constants::exit_codes;
use picalc_core::workload::PiError;

/// Map a workload error to the process exit code.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::Calculation(_) | PiError::Spawn(_) => exit_codes::ERROR_GENERIC,
        PiError::Config(_) => exit_codes::ERROR_CONFIG,
        PiError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error reaching `main`, looking for a `PiError` in the chain.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PiError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
