//! Enclosure records and capacity accounting
//!
//! An enclosure houses at most `capacity` patients, each at most once, in the
//! order they were added.

use crate::facility::error::{RegistryError, RegistryResult};
use crate::types::{EnclosureId, PatientId};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// A capacity-bounded housing unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    id: EnclosureId,
    enclosure_type: String,
    capacity: usize,
    housed: Vec<PatientId>,
    active: bool,
}

impl Enclosure {
    /// Create an empty, active enclosure
    ///
    /// Fails with [`RegistryError::InvalidArgument`] unless `capacity` is
    /// positive.
    pub fn new(
        id: impl Into<String>,
        enclosure_type: impl Into<String>,
        capacity: i64,
    ) -> RegistryResult<Self> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or_else(|| RegistryError::invalid_argument("Capacity must be a positive integer"))?;

        Ok(Self {
            id: EnclosureId::new(id),
            enclosure_type: enclosure_type.into(),
            capacity,
            housed: Vec::new(),
            active: true,
        })
    }

    /// Enclosure identifier
    pub fn id(&self) -> &EnclosureId {
        &self.id
    }

    /// Descriptive category (aviary, mammal habitat, ...)
    pub fn enclosure_type(&self) -> &str {
        &self.enclosure_type
    }

    /// Maximum number of housed patients
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of patients currently housed
    pub fn occupancy(&self) -> usize {
        self.housed.len()
    }

    /// Free places left
    pub fn available_capacity(&self) -> usize {
        self.capacity - self.housed.len()
    }

    /// Whether no more patients fit
    pub fn is_full(&self) -> bool {
        self.housed.len() >= self.capacity
    }

    /// Whether the enclosure has not been disposed
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Snapshot of the housed patient ids in insertion order
    pub fn housed_patients(&self) -> Vec<PatientId> {
        self.housed.clone()
    }

    /// Check if a patient is housed here
    pub fn houses(&self, patient_id: &str) -> bool {
        self.housed.iter().any(|id| id.as_str() == patient_id)
    }

    /// House a patient
    ///
    /// Returns false without changes if the enclosure is full or already
    /// houses the patient.
    pub fn add_patient(&mut self, patient_id: impl Into<PatientId>) -> bool {
        let patient_id = patient_id.into();

        if self.is_full() {
            debug!(enclosure = %self.id, patient = %patient_id, "Enclosure at capacity");
            return false;
        }

        if self.houses(patient_id.as_str()) {
            return false;
        }

        self.housed.push(patient_id);
        true
    }

    /// Remove a housed patient
    ///
    /// Returns false without changes if the patient is not housed here.
    pub fn remove_patient(&mut self, patient_id: &str) -> bool {
        match self.housed.iter().position(|id| id.as_str() == patient_id) {
            Some(index) => {
                self.housed.remove(index);
                true
            }
            None => false,
        }
    }

    /// One-line description for listings
    pub fn summarize(&self) -> String {
        format!(
            "{} | {} | Capacity: {}/{}",
            self.id,
            self.enclosure_type,
            self.housed.len(),
            self.capacity
        )
    }

    /// Release the enclosure at teardown
    ///
    /// Clears the housed list and deactivates the enclosure. Returns how many
    /// patients were still housed; anything above zero means a caller left
    /// patients behind.
    pub fn dispose(&mut self) -> usize {
        let leftover = self.housed.len();
        if leftover > 0 {
            warn!(
                enclosure = %self.id,
                leftover,
                "Enclosure disposed while still housing patients"
            );
        }

        self.housed.clear();
        self.active = false;
        leftover
    }
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summarize())
    }
}
