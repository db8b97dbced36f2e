//! Event scanner for JIT compilation logs.
//!
//! Walks the log once, front to back. Every `<deoptimized>` and
//! `<uncommon_trap>` element opens a block; each `<jvms method=...>` found
//! inside the block is tallied for the block's event kind. In the
//! reason-attribution variant a trap whose `reason` is
//! `transfer_to_interpreter` is also tallied under its own
//! `jvmci_mirror_name`.

use super::cursor::{Advance, Element, LogCursor, Node};
use super::event::EventKind;
use crate::tally::TallyMap;
use crate::utils::config::{
    JVMS_ELEMENT, METHOD_ATTRIBUTE, MIRROR_NAME_ATTRIBUTE, REASON_ATTRIBUTE,
    TRANSFER_TO_INTERPRETER, UNKNOWN_METHOD_KEY,
};
use crate::utils::error::ScanError;
use clap::ValueEnum;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Which log format variant to attribute against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScanVariant {
    /// Nested frames plus `jvmci_mirror_name` on transfer_to_interpreter traps
    #[default]
    ReasonAttribution,
    /// Nested frames only
    NestedFramesOnly,
}

/// What to do when an attribute needed for attribution is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MissingAttributePolicy {
    /// Ignore the element
    #[default]
    Skip,
    /// Tally the occurrence under `<unknown>`
    Sentinel,
    /// Stop the scan with an error
    Fail,
}

/// Scan options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub variant: ScanVariant,
    pub on_missing: MissingAttributePolicy,
}

/// Counters collected during a scan (informational only)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// `<deoptimized>` elements seen
    pub deoptimizations: u64,

    /// `<uncommon_trap>` elements seen
    pub uncommon_traps: u64,

    /// `<jvms>` elements seen inside event blocks
    pub frames: u64,

    /// Attribution attributes that were absent
    pub missing_attributes: u64,

    /// The scan stopped on a read failure instead of end of stream
    pub truncated: bool,
}

/// Result of one scan
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub deoptimizations: TallyMap,
    pub uncommon_traps: TallyMap,
    pub stats: ScanStats,
}

impl ScanOutcome {
    /// Tally fed by events of `kind`
    pub fn tally(&self, kind: EventKind) -> &TallyMap {
        match kind {
            EventKind::Deoptimization => &self.deoptimizations,
            EventKind::UncommonTrap => &self.uncommon_traps,
        }
    }

    fn tally_mut(&mut self, kind: EventKind) -> &mut TallyMap {
        match kind {
            EventKind::Deoptimization => &mut self.deoptimizations,
            EventKind::UncommonTrap => &mut self.uncommon_traps,
        }
    }

    fn count_event(&mut self, kind: EventKind) {
        match kind {
            EventKind::Deoptimization => self.stats.deoptimizations += 1,
            EventKind::UncommonTrap => self.stats.uncommon_traps += 1,
        }
    }
}

/// Open and scan a JIT log file
///
/// **Public** - main entry point for the scan command
///
/// # Errors
/// * `ScanError::OpenFailed` - the file cannot be opened
/// * `ScanError::MissingAttribute` - only under `MissingAttributePolicy::Fail`
pub fn scan_file(path: impl AsRef<Path>, config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    let path = path.as_ref();

    info!("Scanning JIT log: {}", path.display());

    let file = File::open(path).map_err(|source| ScanError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    // The file handle is dropped on every return path out of scan
    scan(BufReader::new(file), config)
}

/// Scan a JIT log stream
///
/// **Public** - works on any buffered source, used directly by tests
///
/// # Arguments
/// * `source` - XML byte stream; need not be well-formed
/// * `config` - variant and missing-attribute policy
///
/// # Returns
/// Both tallies with whatever was accumulated before end of stream or the
/// first read failure
pub fn scan<R: BufRead>(source: R, config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    let mut cursor = LogCursor::new(source);
    let mut outcome = ScanOutcome::default();

    while let Advance::Node(node) = cursor.advance() {
        let Node::Open(element) = node else {
            continue;
        };
        let Some(kind) = EventKind::from_element_name(&element.name) else {
            continue;
        };

        outcome.count_event(kind);

        if kind == EventKind::UncommonTrap && config.variant == ScanVariant::ReasonAttribution {
            attribute_trap(&mut outcome, &element, config.on_missing)?;
        }

        if !element.self_closing {
            scan_frames(&mut cursor, &mut outcome, kind, config.on_missing)?;
        }
    }

    outcome.stats.truncated = cursor.is_truncated();

    if outcome.stats.truncated {
        warn!("JIT log is malformed or truncated, reporting partial results");
    }

    debug!(
        "Scan finished: {} deoptimizations, {} uncommon traps, {} frames, {} missing attributes",
        outcome.stats.deoptimizations,
        outcome.stats.uncommon_traps,
        outcome.stats.frames,
        outcome.stats.missing_attributes
    );

    Ok(outcome)
}

/// Tally `<jvms>` descendants until the event element closes
///
/// **Private** - inner loop of scan
fn scan_frames<R: BufRead>(
    cursor: &mut LogCursor<R>,
    outcome: &mut ScanOutcome,
    kind: EventKind,
    policy: MissingAttributePolicy,
) -> Result<(), ScanError> {
    // Depth relative to the event element; 0 means its close tag was read
    let mut depth = 1usize;

    while depth > 0 {
        match cursor.advance() {
            Advance::Exhausted => break,
            Advance::Node(Node::Close) => depth -= 1,
            Advance::Node(Node::Open(element)) => {
                if !element.self_closing {
                    depth += 1;
                }
                if element.name == JVMS_ELEMENT {
                    outcome.stats.frames += 1;
                    record_attribute(outcome, kind, &element, METHOD_ATTRIBUTE, policy)?;
                }
            }
            Advance::Node(Node::Other) => {}
        }
    }

    Ok(())
}

/// Element-level attribution for `transfer_to_interpreter` traps
///
/// **Private** - reason-attribution variant only
fn attribute_trap(
    outcome: &mut ScanOutcome,
    element: &Element,
    policy: MissingAttributePolicy,
) -> Result<(), ScanError> {
    match element.attribute(REASON_ATTRIBUTE) {
        Some(TRANSFER_TO_INTERPRETER) => record_attribute(
            outcome,
            EventKind::UncommonTrap,
            element,
            MIRROR_NAME_ATTRIBUTE,
            policy,
        ),
        Some(_) => Ok(()),
        None => {
            outcome.stats.missing_attributes += 1;
            if policy == MissingAttributePolicy::Fail {
                return Err(missing(element, REASON_ATTRIBUTE));
            }
            debug!("<{}> without '{}', skipped", element.name, REASON_ATTRIBUTE);
            Ok(())
        }
    }
}

/// Tally the method named by `attribute` on `element`
///
/// **Private** - applies the missing-attribute policy
fn record_attribute(
    outcome: &mut ScanOutcome,
    kind: EventKind,
    element: &Element,
    attribute: &str,
    policy: MissingAttributePolicy,
) -> Result<(), ScanError> {
    if let Some(method) = element.attribute(attribute) {
        outcome.tally_mut(kind).record(method);
        return Ok(());
    }

    outcome.stats.missing_attributes += 1;

    match policy {
        MissingAttributePolicy::Skip => {
            debug!("<{}> without '{}' in {} block, skipped", element.name, attribute, kind);
            Ok(())
        }
        MissingAttributePolicy::Sentinel => {
            outcome.tally_mut(kind).record(UNKNOWN_METHOD_KEY);
            Ok(())
        }
        MissingAttributePolicy::Fail => Err(missing(element, attribute)),
    }
}

fn missing(element: &Element, attribute: &str) -> ScanError {
    ScanError::MissingAttribute {
        element: element.name.clone(),
        attribute: attribute.to_string(),
    }
}
