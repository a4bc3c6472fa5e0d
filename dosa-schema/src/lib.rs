//! DOSA Schema - Annotation Tag Parser
//!
//! Derives validated schema descriptors from the compact tag strings
//! attached to record-type and field declarations.
//!
//! Architecture:
//! ```text
//! raw tag string ("name=jj, primaryKey=((pk1, pk2), pk3 desc), ttl=90s")
//!     ↓
//! Segment Splitter (top-level commas, parenthesized groups atomic)
//!     ↓
//! key=value dispatch
//!     ├── name      → strict identifier grammar
//!     ├── primaryKey/key → key expression parser
//!     ├── ttl       → restricted duration grammar
//!     ├── etl       → on/off
//!     └── columns   → flat identifier list
//!     ↓
//! EntityDescriptor / IndexDescriptor / ColumnDefinition (immutable)
//! ```
//!
//! Every function here is pure and stateless: no I/O, no shared
//! mutable state, output a deterministic function of the input. A
//! parse either returns a fully validated descriptor or fails fast on
//! the first violation with a [`dosa_core::TagError`].

pub mod duration;
pub mod entity;
pub mod field;
pub mod index;
pub mod key;
pub mod name;
pub mod split;

// Re-export the entry points for convenience
pub use entity::parse_entity_tag;
pub use field::parse_field_tag;
pub use index::parse_index_tag;
pub use key::parse_key_expression;
pub use name::extract_name_tag;
