//! Wildlife Rehabilitation Registry
//!
//! An in-memory registry of wildlife patients and the enclosures that house
//! them at a rehabilitation facility.
//!
//! # Overview
//!
//! The library models a facility's patients from intake to discharge and keeps
//! their housing consistent: every housed patient is listed by exactly one
//! enclosure, and no enclosure ever holds more patients than its capacity.
//!
//! ## Key Features
//!
//! - **Patient Records**: identity, condition and status, with discharge tracking
//! - **Enclosures**: capacity-bounded housing with snapshot access to occupants
//! - **Facility Registry**: assignment, reassignment and discharge across both record kinds
//! - **Deterministic Teardown**: disposal with fallback discharge dates and leak warnings
//! - **Configurable Seeding**: JSON configuration with CLI overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use wildlife_rehab_registry::*;
//!
//! let mut registry = FacilityRegistry::new("WRA Wildlife Center", "123 Forest Road")?;
//! registry.add_enclosure(Enclosure::new("E001", "Aviary", 5)?);
//! registry.add_enclosure(Enclosure::new("E002", "Mammal Habitat", 3)?);
//! registry.add_patient(Patient::new("A001", "Red Fox", "Injured leg", "2023-05-15")?);
//!
//! assert!(registry.assign_patient_to_enclosure("A001", "E002"));
//! assert_eq!(registry.get_enclosure("E002").unwrap().available_capacity(), 2);
//!
//! let report = registry.close();
//! println!("{}", report);
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`facility`]: Patient, enclosure and registry records
//! - [`reporting`]: Statistics, teardown reports and logging setup
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod reporting;
pub mod types;

// Core types and identifiers
pub use types::{
    AssignmentSeed, CliArgs, ConfigError, ConfigValidationError, DischargeSeed, EnclosureId,
    EnclosureSeed, FacilityConfig, PatientId, PatientSeed, ReassignmentPolicy,
};

// Facility records
pub use facility::{
    Enclosure, FacilityRegistry, LiveCounters, Patient, RegistryError, RegistryResult,
    IN_REHABILITATION,
};

// Reporting
pub use reporting::{FacilityStatistics, LogFormat, LoggingConfig, LoggingError, TeardownReport};
