//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod scan;

// Re-export main command functions
pub use scan::{execute_scan, validate_args, ScanArgs};
