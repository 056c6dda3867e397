//! Patient records
//!
//! A patient is tracked from intake to discharge. Its housing assignment is
//! owned by the registry; the record only stores the current enclosure id.

use crate::facility::error::{RegistryError, RegistryResult};
use crate::types::{EnclosureId, PatientId};
use serde::Serialize;
use std::fmt;

/// Status given to every patient at intake
pub const IN_REHABILITATION: &str = "In rehabilitation";

/// A wildlife patient admitted to the facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: PatientId,
    species: String,
    condition: String,
    intake_date: String,
    discharge_date: Option<String>,
    status: String,
    assigned_enclosure: Option<EnclosureId>,
}

impl Patient {
    /// Admit a new patient
    ///
    /// Fails with [`RegistryError::InvalidArgument`] when `id` is empty.
    pub fn new(
        id: impl Into<String>,
        species: impl Into<String>,
        condition: impl Into<String>,
        intake_date: impl Into<String>,
    ) -> RegistryResult<Self> {
        let id = PatientId::new(id);
        if id.is_empty() {
            return Err(RegistryError::invalid_argument("Patient ID must be a non-empty string"));
        }

        Ok(Self {
            id,
            species: species.into(),
            condition: condition.into(),
            intake_date: intake_date.into(),
            discharge_date: None,
            status: IN_REHABILITATION.to_string(),
            assigned_enclosure: None,
        })
    }

    /// Patient identifier
    pub fn id(&self) -> &PatientId {
        &self.id
    }

    /// Species of the patient
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Reason for admission
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Date the patient was admitted
    pub fn intake_date(&self) -> &str {
        &self.intake_date
    }

    /// Date the patient was discharged, if any
    pub fn discharge_date(&self) -> Option<&str> {
        self.discharge_date.as_deref()
    }

    /// Current status text
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Enclosure currently housing the patient
    pub fn assigned_enclosure(&self) -> Option<&str> {
        self.assigned_enclosure.as_ref().map(EnclosureId::as_str)
    }

    /// Whether a discharge date has been recorded
    pub fn is_discharged(&self) -> bool {
        self.discharge_date.is_some()
    }

    /// Record a discharge
    ///
    /// Leaves the housing assignment alone; the registry clears it once the
    /// enclosure side has been updated.
    pub fn discharge(
        &mut self,
        discharge_date: impl Into<String>,
        status: impl Into<String>,
    ) -> bool {
        self.discharge_date = Some(discharge_date.into());
        self.status = status.into();
        true
    }

    pub(crate) fn set_assigned_enclosure(&mut self, enclosure_id: Option<EnclosureId>) {
        self.assigned_enclosure = enclosure_id;
    }

    /// One-line description for listings
    pub fn summarize(&self) -> String {
        format!(
            "{} | {} | {} | Status: {}",
            self.id, self.species, self.condition, self.status
        )
    }

    /// Release the record at teardown
    ///
    /// Stamps `today` as the discharge date when the patient was never
    /// discharged and returns whether that fallback applied. Status is left
    /// untouched.
    pub fn dispose(&mut self, today: &str) -> bool {
        if self.discharge_date.is_some() {
            return false;
        }
        self.discharge_date = Some(today.to_string());
        true
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summarize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_creation() {
        let patient = Patient::new("A001", "Red Fox", "Injured leg", "2023-05-15").unwrap();

        assert_eq!(patient.id(), "A001");
        assert_eq!(patient.species(), "Red Fox");
        assert_eq!(patient.condition(), "Injured leg");
        assert_eq!(patient.intake_date(), "2023-05-15");
        assert_eq!(patient.status(), IN_REHABILITATION);
        assert_eq!(patient.discharge_date(), None);
        assert_eq!(patient.assigned_enclosure(), None);
        assert!(!patient.is_discharged());
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Patient::new("", "Species", "Condition", "2023-06-01");
        assert!(matches!(result, Err(RegistryError::InvalidArgument(_))));
    }

    #[test]
    fn test_discharge_sets_date_and_status() {
        let mut patient = Patient::new("A002", "Barn Owl", "Wing injury", "2023-05-20").unwrap();
        patient.set_assigned_enclosure(Some(EnclosureId::new("E001")));

        assert!(patient.discharge("2023-06-01", "Released"));
        assert_eq!(patient.status(), "Released");
        assert_eq!(patient.discharge_date(), Some("2023-06-01"));
        assert!(patient.is_discharged());
        // Housing is the registry's job
        assert_eq!(patient.assigned_enclosure(), Some("E001"));
    }

    #[test]
    fn test_summary_format() {
        let patient = Patient::new("A003", "Box Turtle", "Shell damage", "2023-05-22").unwrap();
        assert_eq!(
            patient.summarize(),
            "A003 | Box Turtle | Shell damage | Status: In rehabilitation"
        );
        assert_eq!(patient.to_string(), patient.summarize());
    }

    #[test]
    fn test_dispose_fallback_discharge_date() {
        let mut patient = Patient::new("A004", "Raccoon", "Minor injuries", "2023-05-25").unwrap();

        assert!(patient.dispose("2023-07-01"));
        assert_eq!(patient.discharge_date(), Some("2023-07-01"));
        assert_eq!(patient.status(), IN_REHABILITATION);

        // Second disposal keeps the first stamp
        assert!(!patient.dispose("2023-08-01"));
        assert_eq!(patient.discharge_date(), Some("2023-07-01"));
    }

    #[test]
    fn test_dispose_keeps_explicit_discharge() {
        let mut patient = Patient::new("A005", "Fox", "Injured paw", "2023-05-25").unwrap();
        patient.discharge("2023-06-10", "Released");

        assert!(!patient.dispose("2023-07-01"));
        assert_eq!(patient.discharge_date(), Some("2023-06-10"));
    }
}
