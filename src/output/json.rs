//! JSON stat output writer.
//!
//! A stat file is one flat object mapping method to count, with fields in
//! ranked order: `{"foo":3,"bar":0}`.

use crate::tally::RankedTally;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a ranked tally to a JSON stat file
///
/// **Public** - main entry point for stat output
///
/// # Arguments
/// * `ranked` - Tally already ranked by descending count
/// * `output_path` - Destination file
/// * `pretty` - Indent the JSON instead of writing it on one line
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
///
/// # Example
/// ```ignore
/// let ranked = outcome.deoptimizations.ranked();
/// write_stat(&ranked, "outputDeoptimizedStat.txt", false)?;
/// ```
pub fn write_stat(
    ranked: &RankedTally,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} methods to: {}", ranked.len(), output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, ranked)?;
    } else {
        serde_json::to_writer(&mut writer, ranked)?;
    }
    writer.flush()?;

    debug!("Stat written ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Serialize a ranked tally to a string
///
/// **Public** - useful for tests and debugging
pub fn stat_to_string(ranked: &RankedTally, pretty: bool) -> Result<String, OutputError> {
    let text = if pretty {
        serde_json::to_string_pretty(ranked)?
    } else {
        serde_json::to_string(ranked)?
    };
    Ok(text)
}

/// Validate that output path is writable
///
/// **Public** - also used by the scan command before scanning
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a stat file back, preserving field order
///
/// **Public** - used for round-trip checks
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - Not a flat object of non-negative integers
pub fn read_stat(input_path: impl AsRef<Path>) -> Result<RankedTally, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading stat from: {}", input_path.display());

    let file = File::open(input_path)?;
    let ranked: RankedTally = serde_json::from_reader(BufReader::new(file))?;

    debug!("Stat loaded: {} methods", ranked.len());

    Ok(ranked)
}
