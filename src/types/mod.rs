//! Core types and configuration for the rehabilitation registry
//!
//! This module contains identifier newtypes, enumerations, and configuration
//! structures used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: `PatientId` and `EnclosureId`, caller-assigned string ids
//! - **Enums**: `ReassignmentPolicy`, how housed patients are moved
//! - **Configuration**: facility settings, seed records and CLI arguments
//!
//! # Usage Example
//!
//! ```rust
//! use wildlife_rehab_registry::types::*;
//!
//! let patient_id = PatientId::new("A001");
//! let enclosure_id = EnclosureId::from("E001");
//! assert_eq!(patient_id, "A001");
//! assert_eq!(enclosure_id.as_str(), "E001");
//!
//! let config = FacilityConfig {
//!     name: "Marsh Rescue".to_string(),
//!     reassignment_policy: ReassignmentPolicy::Transactional,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
