//! Scan command implementation.
//!
//! The scan command:
//! 1. Scans the JIT log
//! 2. Ranks both tallies
//! 3. Writes both stat files
//! 4. Optionally prints a text summary

use crate::output::{generate_text_summary, validate_path, write_stat};
use crate::scanner::{scan_file, ScanConfig, ScanOutcome};
use crate::utils::config::{
    DEFAULT_DEOPTIMIZED_OUTPUT, DEFAULT_SUMMARY_ROWS, DEFAULT_UNCOMMON_TRAPS_OUTPUT,
    MAX_SUMMARY_ROWS,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the scan command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// JIT log to scan
    pub input: PathBuf,

    /// Output path for the deoptimization stat
    pub output_deoptimized: PathBuf,

    /// Output path for the uncommon trap stat
    pub output_uncommon_traps: PathBuf,

    /// Variant and missing-attribute policy
    pub scan_config: ScanConfig,

    /// Indent the JSON output
    pub pretty: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows per summary table
    pub summary_rows: usize,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_deoptimized: PathBuf::from(DEFAULT_DEOPTIMIZED_OUTPUT),
            output_uncommon_traps: PathBuf::from(DEFAULT_UNCOMMON_TRAPS_OUTPUT),
            scan_config: ScanConfig::default(),
            pretty: false,
            print_summary: false,
            summary_rows: DEFAULT_SUMMARY_ROWS,
        }
    }
}

/// Execute the scan command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The scan outcome, after both stat files have been written
///
/// # Errors
/// * Input cannot be opened
/// * Missing attribute under the `fail` policy
/// * Stat file write errors
pub fn execute_scan(args: &ScanArgs) -> Result<ScanOutcome> {
    let start_time = Instant::now();

    info!("Step 1/3: Scanning {}...", args.input.display());
    debug!(
        "Variant: {:?}, missing attributes: {:?}",
        args.scan_config.variant, args.scan_config.on_missing
    );
    let outcome = scan_file(&args.input, &args.scan_config)
        .with_context(|| format!("Failed to scan JIT log {}", args.input.display()))?;

    info!(
        "Found {} deoptimizations and {} uncommon traps",
        outcome.stats.deoptimizations, outcome.stats.uncommon_traps
    );

    info!("Step 2/3: Ranking methods...");
    let deopt_ranked = outcome.deoptimizations.ranked();
    let trap_ranked = outcome.uncommon_traps.ranked();

    info!("Step 3/3: Writing output files...");
    write_stat(&deopt_ranked, &args.output_deoptimized, args.pretty).with_context(|| {
        format!(
            "Failed to write deoptimization stat to {}",
            args.output_deoptimized.display()
        )
    })?;
    info!("✓ Deoptimizations written to: {}", args.output_deoptimized.display());

    write_stat(&trap_ranked, &args.output_uncommon_traps, args.pretty).with_context(|| {
        format!(
            "Failed to write uncommon trap stat to {}",
            args.output_uncommon_traps.display()
        )
    })?;
    info!("✓ Uncommon traps written to: {}", args.output_uncommon_traps.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("JIT LOG SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:           {}", args.input.display());
        println!("Deoptimizations: {}", outcome.stats.deoptimizations);
        println!("Uncommon traps:  {}", outcome.stats.uncommon_traps);
        if outcome.stats.truncated {
            println!("Note: log was malformed or truncated, counts are partial");
        }
        println!(
            "\n{}",
            generate_text_summary("DEOPTIMIZED METHODS", &deopt_ranked, args.summary_rows)
        );
        println!(
            "\n{}",
            generate_text_summary("UNCOMMON TRAP METHODS", &trap_ranked, args.summary_rows)
        );
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Scan completed in {:.2}s", elapsed.as_secs_f64());

    Ok(outcome)
}

/// Validate scan arguments
///
/// **Public** - called before execute_scan for early validation
pub fn validate_args(args: &ScanArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    validate_path(&args.output_deoptimized).context("Invalid deoptimization output path")?;
    validate_path(&args.output_uncommon_traps).context("Invalid uncommon trap output path")?;

    if args.output_deoptimized == args.output_uncommon_traps {
        anyhow::bail!(
            "Both stats would be written to {}",
            args.output_deoptimized.display()
        );
    }

    if args.summary_rows == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.summary_rows > MAX_SUMMARY_ROWS {
        anyhow::bail!("top is too large (max {})", MAX_SUMMARY_ROWS);
    }

    Ok(())
}
