//! Configuration structures for the rehabilitation registry
//!
//! This module contains the facility configuration, its seed records, the
//! command line interface of the demo binary, and validation logic.

use super::ReassignmentPolicy;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wildlife-rehab",
    version,
    about = "Wildlife Rehabilitation Registry - seeds a facility and reports patients and housing",
    long_about = "Builds an in-memory wildlife rehabilitation facility from configuration, applies the configured assignments and discharges, then lists patients, enclosures and occupancy statistics.

EXAMPLES:
    # Run with the built-in sample facility
    wildlife-rehab

    # Use a configuration file
    wildlife-rehab --config facility.json

    # Generate configuration template
    wildlife-rehab --print-config > facility.json

    # Validate configuration without building the registry
    wildlife-rehab --config facility.json --dry-run

    # Save a customised configuration
    wildlife-rehab --name \"Marsh Rescue\" --save-config marsh.json

    # Keep JSON log files alongside console output
    wildlife-rehab --verbose --log-dir logs

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Facility name
    #[arg(long, help = "Facility name")]
    pub name: Option<String>,

    /// Facility location
    #[arg(long, help = "Facility location")]
    pub location: Option<String>,

    /// Reassignment policy for moving housed patients
    #[arg(
        long,
        help = "Reassignment policy (detach-first or transactional)",
        long_help = "How housed patients are moved between enclosures. detach-first leaves a patient unhoused when the target rejects it; transactional leaves it in place. Default: detach-first"
    )]
    pub reassignment_policy: Option<String>,

    /// Emit listings and statistics as JSON
    #[arg(long, help = "Print listings and statistics as JSON")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without building the registry
    #[arg(long, help = "Validate configuration without building the registry")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Write the merged configuration to a file and exit
    #[arg(
        long,
        value_name = "PATH",
        help = "Write the merged configuration as JSON to PATH and exit"
    )]
    pub save_config: Option<String>,

    /// Directory for daily-rolling JSON log files
    #[arg(
        long,
        value_name = "DIR",
        help = "Also write JSON logs to daily files under DIR"
    )]
    pub log_dir: Option<String>,
}

/// Enclosure created when the registry is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureSeed {
    /// Enclosure identifier
    pub id: String,
    /// Descriptive category
    #[serde(rename = "type")]
    pub enclosure_type: String,
    /// Maximum number of patients; must be a positive integer
    pub capacity: i64,
}

/// Patient admitted when the registry is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSeed {
    /// Patient identifier
    pub id: String,
    /// Species
    pub species: String,
    /// Reason for admission
    pub condition: String,
    /// Intake date; today when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intake_date: Option<String>,
}

/// Assignment applied after seed records are registered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSeed {
    /// Patient to house
    pub patient: String,
    /// Target enclosure
    pub enclosure: String,
}

/// Discharge applied after seed assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DischargeSeed {
    /// Patient to discharge
    pub patient: String,
    /// Outcome recorded as the patient's status
    pub status: String,
    /// Discharge date; today when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Facility name
    pub name: Option<String>,
    /// Facility location
    pub location: Option<String>,
    /// Reassignment policy
    pub reassignment_policy: Option<ReassignmentPolicy>,
    /// Enclosures to create
    pub enclosures: Option<Vec<EnclosureSeed>>,
    /// Patients to admit
    pub patients: Option<Vec<PatientSeed>>,
    /// Assignments to apply
    pub assignments: Option<Vec<AssignmentSeed>>,
    /// Discharges to apply
    pub discharges: Option<Vec<DischargeSeed>>,
}

/// Configuration for one rehabilitation facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Facility name
    pub name: String,
    /// Facility location
    pub location: String,
    /// Reassignment policy
    pub reassignment_policy: ReassignmentPolicy,
    /// Enclosures to create
    pub enclosures: Vec<EnclosureSeed>,
    /// Patients to admit
    pub patients: Vec<PatientSeed>,
    /// Assignments to apply, in order
    pub assignments: Vec<AssignmentSeed>,
    /// Discharges to apply, in order
    pub discharges: Vec<DischargeSeed>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Reassignment policy given on the command line is unknown
    #[error("{0}")]
    InvalidPolicy(String),
}

/// Validation errors for facility configuration
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Facility name is empty
    #[error("Facility name must be a non-empty string")]
    EmptyName,

    /// A patient seed has an empty id
    #[error("Patient ID must be a non-empty string")]
    EmptyPatientId,

    /// An enclosure capacity is not positive
    #[error("Invalid capacity for enclosure {id}: {capacity} (must be a positive integer)")]
    InvalidCapacity {
        /// Enclosure with the invalid capacity
        id: String,
        /// The rejected capacity
        capacity: i64,
    },

    /// Two enclosure seeds share an id
    #[error("Duplicate enclosure ID: {0}")]
    DuplicateEnclosure(String),

    /// Two patient seeds share an id
    #[error("Duplicate patient ID: {0}")]
    DuplicatePatient(String),

    /// An assignment or discharge names a patient that is not seeded
    #[error("Unknown patient ID in {context}: {id}")]
    UnknownPatient {
        /// Which seed list referenced it
        context: &'static str,
        /// The unknown id
        id: String,
    },

    /// An assignment names an enclosure that is not seeded
    #[error("Unknown enclosure ID in assignments: {0}")]
    UnknownEnclosure(String),
}

impl Default for FacilityConfig {
    fn default() -> Self {
        let enclosure = |id: &str, enclosure_type: &str, capacity| EnclosureSeed {
            id: id.to_string(),
            enclosure_type: enclosure_type.to_string(),
            capacity,
        };
        let patient = |id: &str, species: &str, condition: &str, intake_date: &str| PatientSeed {
            id: id.to_string(),
            species: species.to_string(),
            condition: condition.to_string(),
            intake_date: Some(intake_date.to_string()),
        };
        let assignment = |patient: &str, enclosure: &str| AssignmentSeed {
            patient: patient.to_string(),
            enclosure: enclosure.to_string(),
        };

        Self {
            name: "WRA Wildlife Center".to_string(),
            location: "123 Forest Road, Greenville".to_string(),
            reassignment_policy: ReassignmentPolicy::default(),
            enclosures: vec![
                enclosure("E001", "Aviary", 5),
                enclosure("E002", "Mammal Habitat", 3),
                enclosure("E003", "Reptile Habitat", 8),
            ],
            patients: vec![
                patient("A001", "Red Fox", "Injured leg", "2023-05-15"),
                patient("A002", "Barn Owl", "Wing injury", "2023-05-20"),
                patient("A003", "Box Turtle", "Shell damage", "2023-05-22"),
            ],
            assignments: vec![
                assignment("A001", "E002"),
                assignment("A002", "E001"),
                assignment("A003", "E003"),
            ],
            discharges: vec![DischargeSeed {
                patient: "A001".to_string(),
                status: "Transferred to long-term care facility".to_string(),
                date: None,
            }],
        }
    }
}

impl FacilityConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    ///
    /// Seed lists are taken whole: a file that lists enclosures replaces the
    /// default enclosures rather than extending them.
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            name: config_file.name.unwrap_or(defaults.name),
            location: config_file.location.unwrap_or(defaults.location),
            reassignment_policy: config_file
                .reassignment_policy
                .unwrap_or(defaults.reassignment_policy),
            enclosures: config_file.enclosures.unwrap_or(defaults.enclosures),
            patients: config_file.patients.unwrap_or(defaults.patients),
            assignments: config_file.assignments.unwrap_or(defaults.assignments),
            discharges: config_file.discharges.unwrap_or(defaults.discharges),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(value) = args.name {
            config.name = value;
        }
        if let Some(value) = args.location {
            config.location = value;
        }
        if let Some(value) = args.reassignment_policy {
            config.reassignment_policy = value.parse().map_err(ConfigError::InvalidPolicy)?;
        }
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration before building a registry
    ///
    /// Catches what the registry would reject while seeding: bad constructor
    /// input, duplicate ids, and actions on ids that are never seeded.
    /// Capacity exhaustion during assignment is left to the registry.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.name.is_empty() {
            return Err(ConfigValidationError::EmptyName);
        }

        let mut enclosure_ids = HashSet::new();
        for seed in &self.enclosures {
            if seed.capacity <= 0 {
                return Err(ConfigValidationError::InvalidCapacity {
                    id: seed.id.clone(),
                    capacity: seed.capacity,
                });
            }
            if !enclosure_ids.insert(seed.id.as_str()) {
                return Err(ConfigValidationError::DuplicateEnclosure(seed.id.clone()));
            }
        }

        let mut patient_ids = HashSet::new();
        for seed in &self.patients {
            if seed.id.is_empty() {
                return Err(ConfigValidationError::EmptyPatientId);
            }
            if !patient_ids.insert(seed.id.as_str()) {
                return Err(ConfigValidationError::DuplicatePatient(seed.id.clone()));
            }
        }

        for seed in &self.assignments {
            if !patient_ids.contains(seed.patient.as_str()) {
                return Err(ConfigValidationError::UnknownPatient {
                    context: "assignments",
                    id: seed.patient.clone(),
                });
            }
            if !enclosure_ids.contains(seed.enclosure.as_str()) {
                return Err(ConfigValidationError::UnknownEnclosure(seed.enclosure.clone()));
            }
        }

        for seed in &self.discharges {
            if !patient_ids.contains(seed.patient.as_str()) {
                return Err(ConfigValidationError::UnknownPatient {
                    context: "discharges",
                    id: seed.patient.clone(),
                });
            }
        }

        Ok(())
    }

    /// Sum of configured enclosure capacities
    pub fn total_capacity(&self) -> i64 {
        self.enclosures.iter().map(|e| e.capacity.max(0)).sum()
    }
}
