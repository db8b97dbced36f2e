//! Output writers for tally data.
//!
//! This module handles:
//! - JSON stat files (compact and pretty)
//! - Text summaries for stdout

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_stat, stat_to_string, validate_path, write_stat};
pub use summary::generate_text_summary;
