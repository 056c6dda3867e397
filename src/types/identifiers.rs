//! Identifier types for the rehabilitation registry
//!
//! Patient and enclosure identifiers are caller-assigned strings (e.g. `A001`,
//! `E002`). They are wrapped in newtypes so the two kinds cannot be mixed up,
//! and serialize as plain strings.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a wildlife patient
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PatientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PatientId> for PatientId {
    fn from(id: &PatientId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PatientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PatientId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PatientId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of an enclosure
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnclosureId(String);

impl EnclosureId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnclosureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EnclosureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for EnclosureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EnclosureId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EnclosureId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EnclosureId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_patient_id_display() {
        let id = PatientId::new("A001");
        assert_eq!(id.to_string(), "A001");
        assert_eq!(id.as_str(), "A001");
        assert!(!id.is_empty());
        assert!(PatientId::new("").is_empty());
    }

    #[test]
    fn test_id_comparisons_with_str() {
        assert_eq!(PatientId::from("A001"), "A001");
        assert_eq!(EnclosureId::from("E001"), "E001");
        assert_ne!(EnclosureId::from("E001"), "E002");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&EnclosureId::new("E003")).unwrap();
        assert_eq!(json, "\"E003\"");

        let patient: PatientId = serde_json::from_str("\"A042\"").unwrap();
        assert_eq!(patient, "A042");
    }

    #[test]
    fn test_map_lookup_by_str() {
        // Borrow<str> lets registry maps be queried without allocating
        let mut map = HashMap::new();
        map.insert(EnclosureId::new("E001"), 5usize);

        assert_eq!(map.get("E001"), Some(&5));
        assert_eq!(map.get("E999"), None);
    }
}
