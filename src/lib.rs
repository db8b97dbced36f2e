//! JIT Log Stat
//!
//! Deoptimization and uncommon trap frequency tables from the XML
//! compilation log a JVM writes with `-XX:+LogCompilation`.
//!
//! This crate provides the core implementation for the
//! `jit-log-stat` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! jit-log-stat --input hotspot_pid1234.log --summary
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use jit_log_stat::scanner::{scan_file, ScanConfig};
//!
//! let outcome = scan_file("hotspot_pid1234.log", &ScanConfig::default())?;
//! let ranked = outcome.deoptimizations.ranked();
//! ```

pub mod commands;
pub mod output;
pub mod scanner;
pub mod tally;
pub mod utils;
