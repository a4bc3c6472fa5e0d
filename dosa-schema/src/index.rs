//! Secondary-index tag orchestration

use crate::key::parse_key_expression;
use crate::name::{is_key_token, validate_name};
use crate::split::split_segments;
use dosa_core::{IndexDescriptor, TagContext, TagError};

/// Parses an index declaration's tag into an [`IndexDescriptor`].
///
/// Recognized keys: `key` (mandatory, same expression grammar as a
/// primary key), `name` (strict identifier grammar), and `columns`
/// (optional covered-columns list). `declared_name` is the identifier
/// the index is declared under in the host record type; it becomes the
/// index name when no `name=` segment overrides it, in which case it
/// must be a valid identifier and must honor the exported-naming
/// convention (uppercase first character).
pub fn parse_index_tag(declared_name: &str, tag: &str) -> Result<IndexDescriptor, TagError> {
    let malformed = |segment: &str| TagError::MalformedTag {
        context: TagContext::Index,
        segment: segment.to_string(),
    };

    let mut index_name = None;
    let mut key = None;
    let mut columns = None;

    for segment in split_segments(tag) {
        let Some((tag_key, value)) = segment.split_once('=') else {
            return Err(malformed(segment));
        };
        let (tag_key, value) = (tag_key.trim(), value.trim());
        match tag_key {
            "name" if index_name.is_none() => {
                validate_name(value)?;
                index_name = Some(value.to_string());
            }
            "key" if key.is_none() => {
                key = Some(parse_key_expression(value)?);
            }
            "columns" if columns.is_none() => {
                columns = Some(parse_columns(value).ok_or_else(|| malformed(segment))?);
            }
            _ => return Err(malformed(segment)),
        }
    }

    let index_name = match index_name {
        Some(name) => name,
        None => {
            validate_name(declared_name)?;
            let exported = declared_name.chars().next().is_some_and(char::is_uppercase);
            if !exported {
                return Err(TagError::NotExported {
                    name: declared_name.to_string(),
                });
            }
            declared_name.to_string()
        }
    };
    let key = key.ok_or_else(|| TagError::MissingTag {
        owner: declared_name.to_string(),
        key: "key",
    })?;

    Ok(IndexDescriptor {
        index_name,
        key,
        columns: columns.unwrap_or_default(),
    })
}

/// `columns=` takes a flat parenthesized identifier list. Unlike key
/// expressions, nested grouping inside the list is malformed.
fn parse_columns(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('(')?.strip_suffix(')')?;
    let mut columns = Vec::new();
    for column in split_segments(inner) {
        if !is_key_token(column) {
            return None;
        }
        columns.push(column.to_string());
    }
    Some(columns)
}
