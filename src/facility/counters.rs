//! Live record counters
//!
//! Diagnostic counts of records the registry currently holds. They move only
//! inside registration and teardown, and nothing relies on them for invariants.

use serde::{Deserialize, Serialize};

/// Counts of live patient and enclosure records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCounters {
    /// Patients registered and not yet disposed
    pub patients: usize,
    /// Enclosures registered and not yet disposed
    pub enclosures: usize,
}

impl LiveCounters {
    /// Start from zero
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn patient_registered(&mut self) {
        self.patients += 1;
    }

    pub(crate) fn patient_disposed(&mut self) {
        self.patients = self.patients.saturating_sub(1);
    }

    pub(crate) fn enclosure_registered(&mut self) {
        self.enclosures += 1;
    }

    pub(crate) fn enclosure_disposed(&mut self) {
        self.enclosures = self.enclosures.saturating_sub(1);
    }

    /// Whether every counted record has been released
    pub fn is_zero(&self) -> bool {
        self.patients == 0 && self.enclosures == 0
    }
}
