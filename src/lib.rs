//! Workspace-level integration tests for picalc.
//!
//! The tests live under `tests/`; this crate has no code of its own.
