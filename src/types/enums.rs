//! Enumeration types for the rehabilitation registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the registry moves an already-housed patient to a new enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReassignmentPolicy {
    /// Detach from the previous enclosure before trying the target.
    ///
    /// A failed add leaves the patient unhoused; the previous placement is not
    /// restored.
    #[default]
    DetachFirst,
    /// Confirm the target can take the patient before detaching.
    ///
    /// A failed reassignment leaves every record untouched.
    Transactional,
}

impl fmt::Display for ReassignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReassignmentPolicy::DetachFirst => write!(f, "detach-first"),
            ReassignmentPolicy::Transactional => write!(f, "transactional"),
        }
    }
}

impl FromStr for ReassignmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "detach-first" | "detach_first" | "detachfirst" => Ok(ReassignmentPolicy::DetachFirst),
            "transactional" | "atomic" => Ok(ReassignmentPolicy::Transactional),
            _ => Err(format!("Unknown reassignment policy: {}", s)),
        }
    }
}
