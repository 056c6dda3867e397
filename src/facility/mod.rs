//! Patient, enclosure and registry records
//!
//! This module holds the facility object model and the registry that keeps
//! patient and enclosure records consistent with each other.
//!
//! # Overview
//!
//! - **Patient**: a wildlife record tracked from intake to discharge
//! - **Enclosure**: a capacity-bounded housing unit
//! - **FacilityRegistry**: owns both collections and performs assignment and discharge
//! - **LiveCounters**: diagnostic counts of records the registry holds
//!
//! # Usage Example
//!
//! ```rust
//! use wildlife_rehab_registry::facility::*;
//!
//! let mut registry = FacilityRegistry::new("Wildlife Rescue", "123 Forest Road")?;
//! registry.add_enclosure(Enclosure::new("E001", "Aviary", 5)?);
//! registry.add_patient(Patient::new("A001", "Barn Owl", "Wing injury", "2023-05-20")?);
//!
//! assert!(registry.assign_patient_to_enclosure("A001", "E001"));
//! assert!(registry.discharge_animal("A001", "2023-06-01", "Released"));
//!
//! let patient = registry.get_patient("A001").unwrap();
//! assert_eq!(patient.status(), "Released");
//! assert_eq!(patient.assigned_enclosure(), None);
//! # Ok::<(), RegistryError>(())
//! ```

pub mod counters;
pub mod enclosure;
pub mod error;
pub mod patient;
pub mod registry;

// Re-export all public types for convenience
pub use counters::LiveCounters;
pub use enclosure::Enclosure;
pub use error::{RegistryError, RegistryResult};
pub use patient::{Patient, IN_REHABILITATION};
pub use registry::FacilityRegistry;
