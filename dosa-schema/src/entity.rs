//! Entity (record-type) tag orchestration

use crate::duration::parse_ttl;
use crate::key::parse_key_expression;
use crate::name::validate_name;
use crate::split::split_segments;
use dosa_core::{EntityDescriptor, EtlState, TagContext, TagError, Ttl};

/// Parses a record type's struct-level tag into an [`EntityDescriptor`].
///
/// Recognized keys: `name` and `primaryKey` are mandatory; `etl`
/// (case-insensitive `on`/`off`, default off) and `ttl` (restricted
/// duration grammar, default no expiration) are optional. Key names
/// themselves are case-sensitive. `struct_name` only feeds the
/// diagnostic for a missing mandatory key; the table name always comes
/// from the `name=` value.
pub fn parse_entity_tag(struct_name: &str, tag: &str) -> Result<EntityDescriptor, TagError> {
    let malformed = |segment: &str| TagError::MalformedTag {
        context: TagContext::Struct,
        segment: segment.to_string(),
    };

    let mut table_name = None;
    let mut primary_key = None;
    let mut etl = None;
    let mut ttl = None;

    for segment in split_segments(tag) {
        let Some((key, value)) = segment.split_once('=') else {
            return Err(malformed(segment));
        };
        let (key, value) = (key.trim(), value.trim());
        match key {
            "name" if table_name.is_none() => {
                validate_name(value)?;
                table_name = Some(value.to_string());
            }
            "primaryKey" if primary_key.is_none() => {
                primary_key = Some(parse_key_expression(value)?);
            }
            "etl" if etl.is_none() => {
                etl = Some(parse_etl(value).ok_or_else(|| malformed(segment))?);
            }
            "ttl" if ttl.is_none() => {
                ttl = Some(Ttl::After(parse_ttl(value)?));
            }
            // Unrecognized and duplicated keys both land here.
            _ => return Err(malformed(segment)),
        }
    }

    let table_name = table_name.ok_or_else(|| TagError::MissingTag {
        owner: struct_name.to_string(),
        key: "name",
    })?;
    let primary_key = primary_key.ok_or_else(|| TagError::MissingTag {
        owner: struct_name.to_string(),
        key: "primaryKey",
    })?;

    Ok(EntityDescriptor {
        table_name,
        primary_key,
        etl: etl.unwrap_or_default(),
        ttl: ttl.unwrap_or_default(),
    })
}

/// `etl=` accepts case-insensitive `on`/`off`, nothing else.
fn parse_etl(value: &str) -> Option<EtlState> {
    if value.eq_ignore_ascii_case("on") {
        Some(EtlState::On)
    } else if value.eq_ignore_ascii_case("off") {
        Some(EtlState::Off)
    } else {
        None
    }
}
