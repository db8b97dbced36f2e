//! Configuration and constants for the CLI.

/// Element that marks a full deoptimization
pub const DEOPTIMIZED_ELEMENT: &str = "deoptimized";

/// Element that marks an uncommon trap
pub const UNCOMMON_TRAP_ELEMENT: &str = "uncommon_trap";

/// Nested frame element carrying the method attribute
pub const JVMS_ELEMENT: &str = "jvms";

// Attribute names used for attribution
pub const METHOD_ATTRIBUTE: &str = "method";
pub const REASON_ATTRIBUTE: &str = "reason";
pub const MIRROR_NAME_ATTRIBUTE: &str = "jvmci_mirror_name";

/// Only traps with this reason are attributed through `jvmci_mirror_name`
pub const TRANSFER_TO_INTERPRETER: &str = "transfer_to_interpreter";

/// Default output path for the deoptimization stat
pub const DEFAULT_DEOPTIMIZED_OUTPUT: &str = "outputDeoptimizedStat.txt";

/// Default output path for the uncommon trap stat
pub const DEFAULT_UNCOMMON_TRAPS_OUTPUT: &str = "outputUncommonTrapsStat.txt";

/// Key used by the `sentinel` missing-attribute policy
pub const UNKNOWN_METHOD_KEY: &str = "<unknown>";

// Summary table limits
pub const DEFAULT_SUMMARY_ROWS: usize = 10;
pub const MAX_SUMMARY_ROWS: usize = 1000;
