//! DOSA Core - Schema Descriptor Types
//!
//! Pure data structures with no parsing logic. The `dosa-schema` crate
//! builds these from annotation tags; the registration and request
//! serialization layers consume them read-only. Every descriptor is
//! constructed exactly once by a parse call, fully validated before it
//! is returned, and never mutated afterward.

pub mod error;

pub use error::{TagContext, TagError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// STORAGE TYPES
// ============================================================================

/// Storage types a column can hold. Closed set: a field whose host
/// type maps to none of these is rejected at field-parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    Uuid,
    String,
    Int32,
    Int64,
    Double,
    Blob,
    Timestamp,
    Bool,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Uuid => "uuid",
            ScalarType::String => "string",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Double => "double",
            ScalarType::Blob => "blob",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// Host-language type descriptor handed over by the reflection
/// collaborator. The parser never inspects host types itself; whoever
/// walks the record declaration supplies one of these per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostType {
    Uuid,
    String,
    Int32,
    Int64,
    Double,
    Blob,
    Timestamp,
    Bool,
    /// Homogeneous sequence type (slice, vector). Not storable.
    List(Box<HostType>),
    /// Key/value type. Not storable.
    Map(Box<HostType>, Box<HostType>),
    /// Any other named host type. Not storable.
    Named(String),
}

impl HostType {
    /// Maps onto the supported storage set; `None` when the type is
    /// outside it.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            HostType::Uuid => Some(ScalarType::Uuid),
            HostType::String => Some(ScalarType::String),
            HostType::Int32 => Some(ScalarType::Int32),
            HostType::Int64 => Some(ScalarType::Int64),
            HostType::Double => Some(ScalarType::Double),
            HostType::Blob => Some(ScalarType::Blob),
            HostType::Timestamp => Some(ScalarType::Timestamp),
            HostType::Bool => Some(ScalarType::Bool),
            HostType::List(_) | HostType::Map(_, _) | HostType::Named(_) => None,
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::Uuid => f.write_str("uuid"),
            HostType::String => f.write_str("string"),
            HostType::Int32 => f.write_str("int32"),
            HostType::Int64 => f.write_str("int64"),
            HostType::Double => f.write_str("double"),
            HostType::Blob => f.write_str("blob"),
            HostType::Timestamp => f.write_str("timestamp"),
            HostType::Bool => f.write_str("bool"),
            HostType::List(element) => write!(f, "list<{element}>"),
            HostType::Map(key, value) => write!(f, "map<{key}, {value}>"),
            HostType::Named(name) => f.write_str(name),
        }
    }
}

/// The `{identifier, type descriptor}` pair the reflection collaborator
/// supplies for each field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// The field's own identifier, used as the column name when the
    /// field tag carries no `name=` override.
    pub name: String,
    pub host_type: HostType,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, host_type: HostType) -> Self {
        Self {
            name: name.into(),
            host_type,
        }
    }
}

// ============================================================================
// KEY STRUCTURE
// ============================================================================

/// One clustering key: a column plus its sort direction within a
/// partition. A key expression with no direction suffix sorts
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusteringKey {
    pub name: String,
    pub descending: bool,
}

impl ClusteringKey {
    pub fn new(name: impl Into<String>, descending: bool) -> Self {
        Self {
            name: name.into(),
            descending,
        }
    }
}

impl fmt::Display for ClusteringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "{} desc", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Primary or index key structure: ordered partition keys (physical
/// distribution) plus ordered clustering keys (sort within a
/// partition). Order is significant in both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    pub partition_keys: Vec<String>,
    pub clustering_keys: Vec<ClusteringKey>,
}

impl PrimaryKey {
    /// All key column names in schema order: partition keys first, then
    /// clustering keys.
    pub fn key_set(&self) -> Vec<&str> {
        self.partition_keys
            .iter()
            .map(String::as_str)
            .chain(self.clustering_keys.iter().map(|ck| ck.name.as_str()))
            .collect()
    }
}

impl fmt::Display for PrimaryKey {
    /// Canonical key-expression form, parseable back into an equal
    /// `PrimaryKey`: `(pk1)`, `(pk1, ck1 desc)`, `((pk1, pk2), ck1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        match self.partition_keys.as_slice() {
            [single] => f.write_str(single)?,
            many => write!(f, "({})", many.join(", "))?,
        }
        for clustering_key in &self.clustering_keys {
            write!(f, ", {clustering_key}")?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// ENTITY OPTIONS
// ============================================================================

/// Whether a record type participates in the external
/// extract/transform/load pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EtlState {
    #[default]
    Off,
    On,
}

impl fmt::Display for EtlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtlState::Off => f.write_str("off"),
            EtlState::On => f.write_str("on"),
        }
    }
}

/// Record time-to-live. The unset state is a distinct variant rather
/// than a zero duration; a parsed TTL is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ttl {
    /// No expiration.
    #[default]
    NoTtl,
    /// Expire records this long after they are written.
    After(Duration),
}

impl Ttl {
    pub fn is_set(&self) -> bool {
        matches!(self, Ttl::After(_))
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Ttl::NoTtl => None,
            Ttl::After(duration) => Some(*duration),
        }
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = match self {
            Ttl::NoTtl => return f.write_str("none"),
            Ttl::After(duration) => duration,
        };
        let secs = duration.as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        let millis = duration.subsec_millis();
        let mut written = false;
        for (value, unit) in [
            (hours, "h"),
            (minutes, "m"),
            (seconds, "s"),
            (u64::from(millis), "ms"),
        ] {
            if value > 0 {
                write!(f, "{value}{unit}")?;
                written = true;
            }
        }
        if !written {
            f.write_str("0s")?;
        }
        Ok(())
    }
}

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// One column of a registered record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ScalarType,
}

/// Whole-record schema descriptor, produced once per record type at
/// registration time and shared read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub table_name: String,
    pub primary_key: PrimaryKey,
    pub etl: EtlState,
    pub ttl: Ttl,
}

/// Secondary-index descriptor. `columns` carries the covered columns
/// materialized alongside the index key; empty when the tag declares
/// none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub index_name: String,
    pub key: PrimaryKey,
    pub columns: Vec<String>,
}
