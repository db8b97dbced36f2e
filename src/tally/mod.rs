//! Per-method occurrence counting.
//!
//! This module provides:
//! - The tally map fed by the event scanner
//! - Ranking of a tally map by descending count

pub mod tally_map;

// Re-export main types
pub use tally_map::{RankedTally, TallyMap};
