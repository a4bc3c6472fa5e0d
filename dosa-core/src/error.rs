//! Error types for dosa tag parsing
//!
//! One closed enum covers every failure the parsers can produce. The
//! `Display` strings are the diagnostics the registration layer
//! surfaces to users, so they always carry the offending input text.
//! All failures are deterministic and non-retryable: the same input
//! produces the same error, and no partial descriptor ever escapes.

use std::fmt;
use thiserror::Error;

/// Which declaration kind a tag was attached to. Selects the context
/// word in malformed-tag diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagContext {
    Struct,
    Index,
    Field,
}

impl fmt::Display for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagContext::Struct => f.write_str("struct"),
            TagContext::Index => f.write_str("index"),
            TagContext::Field => f.write_str("field"),
        }
    }
}

/// Failures produced while parsing dosa annotation tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    /// A segment with no `=`, an unrecognized or duplicated key, a bad
    /// `etl` value, or a malformed `columns` list.
    #[error("invalid dosa {context} tag: {segment}")]
    MalformedTag { context: TagContext, segment: String },

    /// A `name=` value (or a caller-supplied index identifier) failed
    /// the strict identifier grammar.
    #[error("invalid name: \"{name}\"")]
    InvalidName { name: String },

    /// Key-expression grammar violation. Echoes the full original
    /// expression for caller diagnostics.
    #[error("invalid primary key: {expression}")]
    InvalidPrimaryKey { expression: String },

    /// A `ttl=` value that is empty, non-numeric, or below one second
    /// (zero, negative, or sub-second totals all land here).
    #[error("invalid ttl tag: \"{value}\"")]
    InvalidTtl { value: String },

    /// A `ttl=` value using a unit outside the duration grammar.
    #[error("unknown unit {unit} in duration {value}")]
    UnknownDurationUnit { unit: String, value: String },

    /// A field whose host type is outside the supported storage set.
    /// Raised before the field's tag is inspected at all.
    #[error("Invalid type {type_name}")]
    UnsupportedFieldType { type_name: String },

    /// An index identifier that does not honor the public-naming
    /// convention (uppercase first character).
    #[error("index name {name} is not exported")]
    NotExported { name: String },

    /// A mandatory key (`name`, `primaryKey`, `key`) was absent after
    /// the full tag scan.
    #[error("missing {key} tag on {owner}")]
    MissingTag { owner: String, key: &'static str },
}
