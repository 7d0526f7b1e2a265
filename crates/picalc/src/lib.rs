//! picalc library — application logic for the parallel π workload.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
