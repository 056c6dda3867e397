//! Facility registry and cross-record bookkeeping
//!
//! This module contains the FacilityRegistry struct, which owns every patient
//! and enclosure record of one rehabilitation facility and is the only place
//! that changes housing assignments. Keeping both sides of an assignment in
//! one owner lets it maintain the invariant that an assigned patient is listed
//! by exactly one registered enclosure.

use crate::facility::counters::LiveCounters;
use crate::facility::enclosure::Enclosure;
use crate::facility::error::{RegistryError, RegistryResult};
use crate::facility::patient::{Patient, IN_REHABILITATION};
use crate::reporting::statistics::{FacilityStatistics, TeardownReport};
use crate::types::{EnclosureId, FacilityConfig, PatientId, ReassignmentPolicy};
use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The owning collection of a facility's patients and enclosures
#[derive(Debug)]
pub struct FacilityRegistry {
    name: String,
    location: String,
    patients: HashMap<PatientId, Patient>,
    enclosures: HashMap<EnclosureId, Enclosure>,
    start_time: DateTime<Utc>,
    policy: ReassignmentPolicy,
    counters: LiveCounters,
    closed: bool,
}

impl FacilityRegistry {
    /// Create an empty registry using the default reassignment policy
    ///
    /// Fails with [`RegistryError::InvalidArgument`] when `name` is empty.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> RegistryResult<Self> {
        Self::with_policy(name, location, ReassignmentPolicy::default())
    }

    /// Create an empty registry with an explicit reassignment policy
    pub fn with_policy(
        name: impl Into<String>,
        location: impl Into<String>,
        policy: ReassignmentPolicy,
    ) -> RegistryResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::invalid_argument("Center name must be a non-empty string"));
        }

        let location = location.into();
        debug!(name = %name, location = %location, policy = %policy, "Opening facility registry");

        Ok(Self {
            name,
            location,
            patients: HashMap::new(),
            enclosures: HashMap::new(),
            start_time: Utc::now(),
            policy,
            counters: LiveCounters::new(),
            closed: false,
        })
    }

    /// Build a registry from configuration
    ///
    /// Registers the seed enclosures and patients, then applies the seed
    /// assignments and discharges in order. Any seed the registry refuses is
    /// reported as [`RegistryError::SeedRejected`].
    pub fn from_config(config: &FacilityConfig) -> RegistryResult<Self> {
        let mut registry =
            Self::with_policy(&config.name, &config.location, config.reassignment_policy)?;

        for seed in &config.enclosures {
            let enclosure = Enclosure::new(&seed.id, &seed.enclosure_type, seed.capacity)?;
            if !registry.add_enclosure(enclosure) {
                return Err(RegistryError::seed_rejected(format!(
                    "enclosure {} is already registered",
                    seed.id
                )));
            }
        }

        let today = today();
        for seed in &config.patients {
            let intake_date = seed.intake_date.clone().unwrap_or_else(|| today.clone());
            let patient = Patient::new(&seed.id, &seed.species, &seed.condition, intake_date)?;
            if !registry.add_patient(patient) {
                return Err(RegistryError::seed_rejected(format!(
                    "patient {} is already registered",
                    seed.id
                )));
            }
        }

        for seed in &config.assignments {
            if !registry.assign_patient_to_enclosure(&seed.patient, &seed.enclosure) {
                return Err(RegistryError::seed_rejected(format!(
                    "could not assign patient {} to enclosure {}",
                    seed.patient, seed.enclosure
                )));
            }
        }

        for seed in &config.discharges {
            let date = seed.date.clone().unwrap_or_else(|| today.clone());
            if !registry.discharge_animal(&seed.patient, date, &seed.status) {
                return Err(RegistryError::seed_rejected(format!(
                    "could not discharge patient {}",
                    seed.patient
                )));
            }
        }

        info!(
            name = %registry.name,
            patients = registry.patient_count(),
            enclosures = registry.enclosure_count(),
            "Facility registry seeded from configuration"
        );
        Ok(registry)
    }

    /// Facility name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Facility address or description
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Reassignment policy in effect
    pub fn policy(&self) -> ReassignmentPolicy {
        self.policy
    }

    /// When the registry was opened
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Time elapsed since the registry was opened
    pub fn uptime(&self) -> chrono::Duration {
        Utc::now() - self.start_time
    }

    /// Live record counters
    pub fn live_counters(&self) -> LiveCounters {
        self.counters
    }

    /// Number of registered patients
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of registered enclosures
    pub fn enclosure_count(&self) -> usize {
        self.enclosures.len()
    }

    /// Register a patient
    ///
    /// Returns false, dropping `patient`, if the id is already registered.
    pub fn add_patient(&mut self, patient: Patient) -> bool {
        if self.patients.contains_key(patient.id()) {
            debug!(patient = %patient.id(), "Patient already registered");
            return false;
        }

        self.patients.insert(patient.id().clone(), patient);
        self.counters.patient_registered();
        true
    }

    /// Get a patient by ID
    pub fn get_patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    /// Register an enclosure
    ///
    /// Returns false, dropping `enclosure`, if the id is already registered.
    pub fn add_enclosure(&mut self, enclosure: Enclosure) -> bool {
        if self.enclosures.contains_key(enclosure.id()) {
            debug!(enclosure = %enclosure.id(), "Enclosure already registered");
            return false;
        }

        self.enclosures.insert(enclosure.id().clone(), enclosure);
        self.counters.enclosure_registered();
        true
    }

    /// Get an enclosure by ID
    pub fn get_enclosure(&self, enclosure_id: &str) -> Option<&Enclosure> {
        self.enclosures.get(enclosure_id)
    }

    /// All patients, ordered by ID
    pub fn patients(&self) -> Vec<&Patient> {
        let mut patients: Vec<&Patient> = self.patients.values().collect();
        patients.sort_by(|a, b| a.id().cmp(b.id()));
        patients
    }

    /// All enclosures, ordered by ID
    pub fn enclosures(&self) -> Vec<&Enclosure> {
        let mut enclosures: Vec<&Enclosure> = self.enclosures.values().collect();
        enclosures.sort_by(|a, b| a.id().cmp(b.id()));
        enclosures
    }

    /// Assign a patient to an enclosure
    ///
    /// Returns false without changes when either id is unknown. A patient that
    /// is already housed is moved according to the registry's
    /// [`ReassignmentPolicy`]:
    ///
    /// - `DetachFirst`: the patient leaves its previous enclosure before the
    ///   target is tried. If the target rejects it (full, or already listing
    ///   the patient) the call returns false and the patient stays unhoused.
    /// - `Transactional`: the target is checked first and a rejected move
    ///   changes nothing.
    ///
    /// A previous enclosure that is no longer registered is skipped.
    pub fn assign_patient_to_enclosure(&mut self, patient_id: &str, enclosure_id: &str) -> bool {
        let Some(patient) = self.patients.get_mut(patient_id) else {
            debug!(patient = patient_id, "Assignment requested for unknown patient");
            return false;
        };
        let Some(target) = self.enclosures.get(enclosure_id) else {
            debug!(enclosure = enclosure_id, "Assignment requested for unknown enclosure");
            return false;
        };

        let previous = patient.assigned_enclosure().map(EnclosureId::from);

        if self.policy == ReassignmentPolicy::Transactional {
            if previous.as_ref().is_some_and(|id| id == enclosure_id) && target.houses(patient_id) {
                return true;
            }
            if target.is_full() || target.houses(patient_id) {
                debug!(
                    patient = patient_id,
                    enclosure = enclosure_id,
                    "Target enclosure cannot take patient; assignment unchanged"
                );
                return false;
            }
        }

        if let Some(previous) = &previous {
            match self.enclosures.get_mut(previous.as_str()) {
                Some(old) => {
                    old.remove_patient(patient_id);
                }
                // Safety net: enclosures are only removed wholesale at teardown
                None => {
                    warn!(
                        patient = patient_id,
                        enclosure = %previous,
                        "Previous enclosure is not registered; skipping removal"
                    );
                }
            }
            patient.set_assigned_enclosure(None);
        }

        let Some(target) = self.enclosures.get_mut(enclosure_id) else {
            return false;
        };
        if !target.add_patient(patient_id) {
            crate::facility_event!(
                warn,
                "Assignment rejected by target enclosure",
                patient = patient_id,
                enclosure = enclosure_id,
                detached = previous.is_some(),
            );
            return false;
        }

        patient.set_assigned_enclosure(Some(target.id().clone()));
        crate::facility_event!(
            info,
            "Patient assigned to enclosure",
            patient = patient_id,
            enclosure = enclosure_id,
        );
        true
    }

    /// Discharge a patient and release its housing
    ///
    /// Returns false if the patient is unknown. The patient is removed from its
    /// enclosure (when that enclosure is still registered) before the discharge
    /// is recorded, and its assignment is cleared afterwards. A discharged
    /// patient can still be assigned again later; that does not change its
    /// status.
    pub fn discharge_animal(
        &mut self,
        patient_id: &str,
        discharge_date: impl Into<String>,
        status: impl Into<String>,
    ) -> bool {
        let Some(patient) = self.patients.get_mut(patient_id) else {
            debug!(patient = patient_id, "Discharge requested for unknown patient");
            return false;
        };

        if let Some(enclosure_id) = patient.assigned_enclosure() {
            if let Some(enclosure) = self.enclosures.get_mut(enclosure_id) {
                enclosure.remove_patient(patient_id);
            }
        }

        patient.discharge(discharge_date, status);
        patient.set_assigned_enclosure(None);

        crate::facility_event!(
            info,
            "Patient discharged",
            patient = patient_id,
            status = patient.status(),
        );
        true
    }

    /// Snapshot of occupancy and patient outcomes
    pub fn statistics(&self) -> FacilityStatistics {
        let housed_patients = self
            .patients
            .values()
            .filter(|p| p.assigned_enclosure().is_some())
            .count();
        let in_rehabilitation = self
            .patients
            .values()
            .filter(|p| !p.is_discharged() && p.status() == IN_REHABILITATION)
            .count();
        let discharged = self.patients.values().filter(|p| p.is_discharged()).count();

        FacilityStatistics {
            total_patients: self.patients.len(),
            total_enclosures: self.enclosures.len(),
            housed_patients,
            in_rehabilitation,
            discharged,
            total_capacity: self.enclosures.values().map(Enclosure::capacity).sum(),
            available_capacity: self.enclosures.values().map(Enclosure::available_capacity).sum(),
            full_enclosures: self.enclosures.values().filter(|e| e.is_full()).count(),
            live: self.counters,
        }
    }

    /// Check that every assignment is mirrored by exactly one enclosure
    pub fn validate(&self) -> Result<(), String> {
        for (id, patient) in &self.patients {
            if id != patient.id() {
                return Err(format!("Patient key {} does not match record {}", id, patient.id()));
            }

            let listed_by: Vec<&EnclosureId> = self
                .enclosures
                .values()
                .filter(|e| e.houses(id.as_str()))
                .map(Enclosure::id)
                .collect();

            match patient.assigned_enclosure() {
                Some(assigned) if listed_by.len() != 1 || listed_by[0] != assigned => {
                    return Err(format!(
                        "Patient {} is assigned to {} but listed by {:?}",
                        id, assigned, listed_by
                    ));
                }
                None if !listed_by.is_empty() => {
                    return Err(format!("Unhoused patient {} is listed by {:?}", id, listed_by));
                }
                _ => {}
            }
        }

        for (id, enclosure) in &self.enclosures {
            if id != enclosure.id() {
                return Err(format!(
                    "Enclosure key {} does not match record {}",
                    id,
                    enclosure.id()
                ));
            }
            if enclosure.occupancy() > enclosure.capacity() {
                return Err(format!("Enclosure {} is over capacity", id));
            }
        }

        Ok(())
    }

    /// Dispose every record and report what was left behind
    pub fn close(mut self) -> TeardownReport {
        self.teardown()
    }

    fn teardown(&mut self) -> TeardownReport {
        if self.closed {
            return TeardownReport::default();
        }
        self.closed = true;

        let today = today();
        let mut report = TeardownReport::default();

        for (id, mut patient) in self.patients.drain() {
            if patient.dispose(&today) {
                warn!(patient = %id, "Patient disposed without discharge; stamping today's date");
                report.fallback_discharges += 1;
            }
            self.counters.patient_disposed();
            report.patients_disposed += 1;
        }

        for (_, mut enclosure) in self.enclosures.drain() {
            let leftover = enclosure.dispose();
            if leftover > 0 {
                report.occupied_enclosures += 1;
                report.leftover_housed += leftover;
            }
            self.counters.enclosure_disposed();
            report.enclosures_disposed += 1;
        }

        report.runtime = self.uptime().to_std().unwrap_or_default();
        report.live_after = self.counters;

        info!(
            name = %self.name,
            patients = report.patients_disposed,
            enclosures = report.enclosures_disposed,
            runtime_secs = report.runtime.as_secs_f64(),
            "Facility registry closed"
        );
        report
    }
}

impl Drop for FacilityRegistry {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(policy: ReassignmentPolicy) -> FacilityRegistry {
        let mut registry =
            FacilityRegistry::with_policy("Test Center", "Test Location", policy).unwrap();
        registry.add_patient(Patient::new("A001", "Wolf", "Leg injury", "2023-06-01").unwrap());
        registry.add_enclosure(Enclosure::new("E001", "Mammal Habitat", 5).unwrap());
        registry.add_enclosure(Enclosure::new("E002", "Recovery Area", 1).unwrap());
        registry
    }

    #[test]
    fn test_registry_creation() {
        let registry = FacilityRegistry::new("Wildlife Rescue", "123 Forest Road").unwrap();
        assert_eq!(registry.name(), "Wildlife Rescue");
        assert_eq!(registry.location(), "123 Forest Road");
        assert_eq!(registry.patient_count(), 0);
        assert_eq!(registry.enclosure_count(), 0);
        assert_eq!(registry.policy(), ReassignmentPolicy::DetachFirst);
        assert!(registry.get_patient("A001").is_none());
        assert!(registry.get_enclosure("E001").is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = FacilityRegistry::new("", "Location");
        assert!(matches!(result, Err(RegistryError::InvalidArgument(_))));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);

        let duplicate = Patient::new("A001", "Other", "Other", "2023-06-02").unwrap();
        assert!(!registry.add_patient(duplicate));
        assert_eq!(registry.get_patient("A001").unwrap().species(), "Wolf");

        assert!(!registry.add_enclosure(Enclosure::new("E001", "Other", 2).unwrap()));
        assert_eq!(registry.get_enclosure("E001").unwrap().capacity(), 5);
        assert_eq!(registry.live_counters(), LiveCounters { patients: 1, enclosures: 2 });
    }

    #[test]
    fn test_failed_move_detach_first_leaves_patient_unhoused() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);
        registry.add_patient(Patient::new("A002", "Fox", "Paw", "2023-06-01").unwrap());
        assert!(registry.assign_patient_to_enclosure("A002", "E002"));
        assert!(registry.assign_patient_to_enclosure("A001", "E001"));

        assert!(!registry.assign_patient_to_enclosure("A001", "E002"));
        assert_eq!(registry.get_patient("A001").unwrap().assigned_enclosure(), None);
        assert!(!registry.get_enclosure("E001").unwrap().houses("A001"));
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_failed_move_transactional_keeps_placement() {
        let mut registry = registry_with(ReassignmentPolicy::Transactional);
        registry.add_patient(Patient::new("A002", "Fox", "Paw", "2023-06-01").unwrap());
        assert!(registry.assign_patient_to_enclosure("A002", "E002"));
        assert!(registry.assign_patient_to_enclosure("A001", "E001"));

        assert!(!registry.assign_patient_to_enclosure("A001", "E002"));
        assert_eq!(registry.get_patient("A001").unwrap().assigned_enclosure(), Some("E001"));
        assert!(registry.get_enclosure("E001").unwrap().houses("A001"));
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_reassign_to_same_enclosure_succeeds() {
        for policy in [ReassignmentPolicy::DetachFirst, ReassignmentPolicy::Transactional] {
            let mut registry = registry_with(policy);
            assert!(registry.assign_patient_to_enclosure("A001", "E002"));
            assert!(registry.assign_patient_to_enclosure("A001", "E002"), "{}", policy);
            assert_eq!(registry.get_enclosure("E002").unwrap().occupancy(), 1);
            assert!(registry.validate().is_ok());
        }
    }

    #[test]
    fn test_statistics_snapshot() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);
        registry.add_patient(Patient::new("A002", "Fox", "Paw", "2023-06-01").unwrap());
        registry.assign_patient_to_enclosure("A001", "E001");
        registry.discharge_animal("A002", "2023-06-10", "Released");

        let stats = registry.statistics();
        assert_eq!(stats.total_patients, 2);
        assert_eq!(stats.total_enclosures, 2);
        assert_eq!(stats.housed_patients, 1);
        assert_eq!(stats.in_rehabilitation, 1);
        assert_eq!(stats.discharged, 1);
        assert_eq!(stats.total_capacity, 6);
        assert_eq!(stats.available_capacity, 5);
        assert_eq!(stats.full_enclosures, 0);
    }

    #[test]
    fn test_listing_sorted_by_id() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);
        registry.add_patient(Patient::new("A000", "Heron", "Fishing line", "2023-06-01").unwrap());

        let ids: Vec<&str> = registry.patients().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["A000", "A001"]);

        let ids: Vec<&str> = registry.enclosures().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["E001", "E002"]);
    }

    #[test]
    fn test_close_reports_leftovers() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);
        registry.add_patient(Patient::new("A002", "Fox", "Paw", "2023-06-01").unwrap());
        registry.assign_patient_to_enclosure("A001", "E001");
        registry.discharge_animal("A002", "2023-06-10", "Released");

        let report = registry.close();
        assert_eq!(report.patients_disposed, 2);
        assert_eq!(report.fallback_discharges, 1);
        assert_eq!(report.enclosures_disposed, 2);
        assert_eq!(report.occupied_enclosures, 1);
        assert_eq!(report.leftover_housed, 1);
        assert!(report.live_after.is_zero());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_teardown_runs_once() {
        let mut registry = registry_with(ReassignmentPolicy::DetachFirst);
        let first = registry.teardown();
        assert_eq!(first.patients_disposed, 1);

        let second = registry.teardown();
        assert_eq!(second, TeardownReport::default());
        assert_eq!(registry.patient_count(), 0);
        assert_eq!(registry.enclosure_count(), 0);
    }
}
