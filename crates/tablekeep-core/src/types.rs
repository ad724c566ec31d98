//! Core types: attribute types, attribute specs, table metadata, status codes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type of a table attribute.
///
/// This is a closed, versioned enum: every variant owns a stable one-byte
/// wire tag (see [`crate::encoding::attribute`]) and decoding an
/// unrecognized tag is an error, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    Int,
    String,
    Boolean,
    Double,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeType::Int => "INT",
            AttributeType::String => "STRING",
            AttributeType::Boolean => "BOOLEAN",
            AttributeType::Double => "DOUBLE",
        };
        f.write_str(name)
    }
}

impl FromStr for AttributeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INT" => Ok(AttributeType::Int),
            "STRING" => Ok(AttributeType::String),
            "BOOLEAN" | "BOOL" => Ok(AttributeType::Boolean),
            "DOUBLE" => Ok(AttributeType::Double),
            other => Err(format!("unknown attribute type: {other}")),
        }
    }
}

/// One attribute fact to persist: name, type, and primary-key membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    pub attr_type: AttributeType,
    pub primary_key: bool,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>, attr_type: AttributeType, primary_key: bool) -> Self {
        Self {
            name: name.into(),
            attr_type,
            primary_key,
        }
    }
}

/// The reconstructed, in-memory view of a table's schema.
///
/// Derived entirely from the persisted per-attribute records of a table;
/// never stored as a single blob. `attribute_names` and `attribute_types`
/// are parallel sequences in scan order, which is byte-lexicographic key
/// order — consumers must not assume declaration order survives a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub attribute_names: Vec<String>,
    pub attribute_types: Vec<AttributeType>,
    pub primary_key_names: BTreeSet<String>,
}

impl TableMetadata {
    /// Number of attribute records reconstructed from the scan.
    pub fn attribute_count(&self) -> usize {
        self.attribute_names.len()
    }

    /// True when the scan yielded no records at all.
    pub fn is_empty(&self) -> bool {
        self.attribute_names.is_empty()
    }

    /// True when at least one attribute is flagged as primary key.
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key_names.is_empty()
    }

    /// Whether an attribute with this name is present.
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attribute_names.iter().any(|n| n == name)
    }

    /// The type of the named attribute, if present.
    pub fn type_of(&self, name: &str) -> Option<AttributeType> {
        self.attribute_names
            .iter()
            .position(|n| n == name)
            .map(|i| self.attribute_types[i])
    }
}

/// Outcome of a catalog operation.
///
/// Status codes are the catalog's vocabulary for expected outcomes
/// (validation failures, not-found, conflicts). Store and decode failures
/// are not status codes; they propagate as [`crate::error::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Success,
    TableNotFound,
    TableCreationAttributeInvalid,
    TableCreationNoPrimaryKey,
    TableCreationPrimaryKeyNotFound,
    AttributeAlreadyExists,
    AttributeNotFound,
}

impl StatusCode {
    pub fn is_success(self) -> bool {
        self == StatusCode::Success
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Success => "SUCCESS",
            StatusCode::TableNotFound => "TABLE_NOT_FOUND",
            StatusCode::TableCreationAttributeInvalid => "TABLE_CREATION_ATTRIBUTE_INVALID",
            StatusCode::TableCreationNoPrimaryKey => "TABLE_CREATION_NO_PRIMARY_KEY",
            StatusCode::TableCreationPrimaryKeyNotFound => "TABLE_CREATION_PRIMARY_KEY_NOT_FOUND",
            StatusCode::AttributeAlreadyExists => "ATTRIBUTE_ALREADY_EXISTS",
            StatusCode::AttributeNotFound => "ATTRIBUTE_NOT_FOUND",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_parse() {
        assert_eq!("INT".parse::<AttributeType>().unwrap(), AttributeType::Int);
        assert_eq!(
            "string".parse::<AttributeType>().unwrap(),
            AttributeType::String
        );
        assert_eq!(
            "Bool".parse::<AttributeType>().unwrap(),
            AttributeType::Boolean
        );
        assert!("FLOAT32".parse::<AttributeType>().is_err());
    }

    #[test]
    fn test_attribute_type_display_roundtrip() {
        for at in [
            AttributeType::Int,
            AttributeType::String,
            AttributeType::Boolean,
            AttributeType::Double,
        ] {
            let parsed: AttributeType = at.to_string().parse().unwrap();
            assert_eq!(parsed, at);
        }
    }

    #[test]
    fn test_metadata_lookups() {
        let meta = TableMetadata {
            attribute_names: vec!["id".to_string(), "name".to_string()],
            attribute_types: vec![AttributeType::Int, AttributeType::String],
            primary_key_names: BTreeSet::from(["id".to_string()]),
        };
        assert_eq!(meta.attribute_count(), 2);
        assert!(meta.contains_attribute("name"));
        assert!(!meta.contains_attribute("age"));
        assert_eq!(meta.type_of("id"), Some(AttributeType::Int));
        assert_eq!(meta.type_of("age"), None);
        assert!(meta.has_primary_key());
    }

    #[test]
    fn test_empty_metadata() {
        let meta = TableMetadata::default();
        assert!(meta.is_empty());
        assert!(!meta.has_primary_key());
    }

    #[test]
    fn test_status_code_display() {
        assert_eq!(StatusCode::Success.to_string(), "SUCCESS");
        assert_eq!(
            StatusCode::TableCreationNoPrimaryKey.to_string(),
            "TABLE_CREATION_NO_PRIMARY_KEY"
        );
        assert!(StatusCode::Success.is_success());
        assert!(!StatusCode::TableNotFound.is_success());
    }
}
