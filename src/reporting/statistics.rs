//! Occupancy statistics and teardown reporting

use crate::facility::counters::LiveCounters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Point-in-time view of a facility's patients and housing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityStatistics {
    /// Number of registered patients
    pub total_patients: usize,
    /// Number of registered enclosures
    pub total_enclosures: usize,
    /// Patients currently assigned to an enclosure
    pub housed_patients: usize,
    /// Patients still in rehabilitation
    pub in_rehabilitation: usize,
    /// Patients with a recorded discharge
    pub discharged: usize,
    /// Sum of all enclosure capacities
    pub total_capacity: usize,
    /// Sum of free places across enclosures
    pub available_capacity: usize,
    /// Enclosures with no free places
    pub full_enclosures: usize,
    /// Live record counters at snapshot time
    pub live: LiveCounters,
}

impl FacilityStatistics {
    /// Percentage of total capacity in use
    pub fn occupancy_percentage(&self) -> f64 {
        if self.total_capacity == 0 {
            0.0
        } else {
            let used = self.total_capacity - self.available_capacity;
            (used as f64 / self.total_capacity as f64) * 100.0
        }
    }

    /// Percentage of patients that have been discharged
    pub fn discharge_percentage(&self) -> f64 {
        if self.total_patients == 0 {
            0.0
        } else {
            (self.discharged as f64 / self.total_patients as f64) * 100.0
        }
    }

    /// Patients registered but not housed
    pub fn unhoused_patients(&self) -> usize {
        self.total_patients - self.housed_patients
    }
}

impl fmt::Display for FacilityStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patients: {} | Enclosures: {}", self.total_patients, self.total_enclosures)?;
        writeln!(
            f,
            "  Housed: {} | Unhoused: {}",
            self.housed_patients,
            self.unhoused_patients()
        )?;
        writeln!(
            f,
            "  In rehabilitation: {} | Discharged: {} ({:.1}%)",
            self.in_rehabilitation,
            self.discharged,
            self.discharge_percentage()
        )?;
        write!(
            f,
            "  Capacity: {}/{} in use ({:.1}%), {} full enclosure(s)",
            self.total_capacity - self.available_capacity,
            self.total_capacity,
            self.occupancy_percentage(),
            self.full_enclosures
        )
    }
}

/// What a registry teardown released
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardownReport {
    /// Patient records disposed
    pub patients_disposed: usize,
    /// Patients that needed a fallback discharge date
    pub fallback_discharges: usize,
    /// Enclosure records disposed
    pub enclosures_disposed: usize,
    /// Enclosures that still housed patients when disposed
    pub occupied_enclosures: usize,
    /// Total patient ids cleared from occupied enclosures
    pub leftover_housed: usize,
    /// How long the registry was open
    pub runtime: Duration,
    /// Live counters after disposal
    pub live_after: LiveCounters,
}

impl TeardownReport {
    /// Whether every patient was discharged and every enclosure emptied first
    pub fn is_clean(&self) -> bool {
        self.fallback_discharges == 0 && self.leftover_housed == 0
    }
}

impl fmt::Display for TeardownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Released {} patient(s) and {} enclosure(s) after {:.2}s",
            self.patients_disposed,
            self.enclosures_disposed,
            self.runtime.as_secs_f64()
        )?;
        if !self.is_clean() {
            write!(
                f,
                " ({} without discharge, {} still housed in {} enclosure(s))",
                self.fallback_discharges, self.leftover_housed, self.occupied_enclosures
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statistics() -> FacilityStatistics {
        FacilityStatistics {
            total_patients: 4,
            total_enclosures: 2,
            housed_patients: 3,
            in_rehabilitation: 3,
            discharged: 1,
            total_capacity: 8,
            available_capacity: 5,
            full_enclosures: 1,
            live: LiveCounters { patients: 4, enclosures: 2 },
        }
    }

    #[test]
    fn test_percentages() {
        let stats = sample_statistics();
        assert_eq!(stats.occupancy_percentage(), 37.5); // 3/8 * 100
        assert_eq!(stats.discharge_percentage(), 25.0); // 1/4 * 100
        assert_eq!(stats.unhoused_patients(), 1);
    }

    #[test]
    fn test_percentages_on_empty_facility() {
        let stats = FacilityStatistics {
            total_patients: 0,
            total_enclosures: 0,
            housed_patients: 0,
            in_rehabilitation: 0,
            discharged: 0,
            total_capacity: 0,
            available_capacity: 0,
            full_enclosures: 0,
            live: LiveCounters::default(),
        };
        assert_eq!(stats.occupancy_percentage(), 0.0);
        assert_eq!(stats.discharge_percentage(), 0.0);
    }

    #[test]
    fn test_statistics_display() {
        let text = sample_statistics().to_string();
        assert!(text.starts_with("Patients: 4 | Enclosures: 2"));
        assert!(text.contains("Capacity: 3/8 in use (37.5%)"));
    }

    #[test]
    fn test_teardown_report_display() {
        let clean = TeardownReport {
            patients_disposed: 2,
            enclosures_disposed: 1,
            ..Default::default()
        };
        assert!(clean.is_clean());
        assert_eq!(clean.to_string(), "Released 2 patient(s) and 1 enclosure(s) after 0.00s");

        let leaky = TeardownReport {
            fallback_discharges: 1,
            leftover_housed: 1,
            occupied_enclosures: 1,
            ..clean
        };
        assert!(!leaky.is_clean());
        assert!(leaky
            .to_string()
            .ends_with("(1 without discharge, 1 still housed in 1 enclosure(s))"));
    }
}
