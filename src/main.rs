//! JIT Log Stat CLI
//!
//! Counts, per method, the deoptimizations and uncommon traps recorded in a
//! JVM JIT compilation log and writes both tables as JSON.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use jit_log_stat::commands::{execute_scan, validate_args, ScanArgs};
use jit_log_stat::scanner::{MissingAttributePolicy, ScanConfig, ScanVariant};
use jit_log_stat::utils::config::{
    DEFAULT_DEOPTIMIZED_OUTPUT, DEFAULT_SUMMARY_ROWS, DEFAULT_UNCOMMON_TRAPS_OUTPUT,
};

/// Java JIT log deoptimized methods counter
#[derive(Parser, Debug)]
#[command(name = "jit-log-stat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to JIT log file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output file for deoptimized methods stat
    #[arg(short = 'd', long, alias = "od", default_value = DEFAULT_DEOPTIMIZED_OUTPUT)]
    output_deoptimized: PathBuf,

    /// Path to output file for uncommon traps stat
    #[arg(short = 't', long, alias = "ot", default_value = DEFAULT_UNCOMMON_TRAPS_OUTPUT)]
    output_uncommon_traps: PathBuf,

    /// Log format variant to attribute against
    #[arg(long, value_enum, default_value_t = ScanVariant::ReasonAttribution)]
    variant: ScanVariant,

    /// What to do when a method attribute is missing
    #[arg(long, value_enum, default_value_t = MissingAttributePolicy::Skip)]
    on_missing: MissingAttributePolicy,

    /// Write indented JSON
    #[arg(long)]
    pretty: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Number of methods per summary table
    #[arg(long, default_value_t = DEFAULT_SUMMARY_ROWS)]
    top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ScanArgs {
        input: cli.input,
        output_deoptimized: cli.output_deoptimized,
        output_uncommon_traps: cli.output_uncommon_traps,
        scan_config: ScanConfig {
            variant: cli.variant,
            on_missing: cli.on_missing,
        },
        pretty: cli.pretty,
        print_summary: cli.summary,
        summary_rows: cli.top,
    };

    // Validate args first
    validate_args(&args)?;

    execute_scan(&args)?;

    Ok(())
}
