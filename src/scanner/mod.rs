//! Streaming scan of JIT compilation logs.
//!
//! This module handles:
//! - Forward-only, node-by-node reading of the XML log
//! - Recognizing deoptimization and uncommon trap events
//! - Attributing each event to methods and tallying them

pub mod cursor;
pub mod event;
pub mod event_scanner;

// Re-export main types
pub use cursor::{Advance, Element, LogCursor, Node};
pub use event::EventKind;
pub use event_scanner::{
    scan, scan_file, MissingAttributePolicy, ScanConfig, ScanOutcome, ScanStats, ScanVariant,
};
