//! Event kinds recognized in the JIT log.

use crate::utils::config::{DEOPTIMIZED_ELEMENT, UNCOMMON_TRAP_ELEMENT};
use std::fmt;

/// Kind of compiler event, selected by element name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `<deoptimized>`: compiled code was thrown away
    Deoptimization,
    /// `<uncommon_trap>`: a speculative assumption failed
    UncommonTrap,
}

impl EventKind {
    /// Map an element name to the event it marks, if any
    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            DEOPTIMIZED_ELEMENT => Some(Self::Deoptimization),
            UNCOMMON_TRAP_ELEMENT => Some(Self::UncommonTrap),
            _ => None,
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Deoptimization => DEOPTIMIZED_ELEMENT,
            Self::UncommonTrap => UNCOMMON_TRAP_ELEMENT,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}
