//! Field tag parsing

use crate::name::validate_name;
use crate::split::split_segments;
use dosa_core::{ColumnDefinition, FieldInfo, TagContext, TagError};

/// Resolves a field's column name and storage type from its tag and
/// the reflection-supplied [`FieldInfo`].
///
/// The type gate runs first and unconditionally: a field whose host
/// type falls outside the supported storage set is rejected before the
/// tag is inspected at all, even when the tag is empty. The only
/// recognized key is `name`; when absent, the column is named after
/// the field itself.
pub fn parse_field_tag(field: &FieldInfo, tag: &str) -> Result<ColumnDefinition, TagError> {
    let column_type = field
        .host_type
        .scalar()
        .ok_or_else(|| TagError::UnsupportedFieldType {
            type_name: field.host_type.to_string(),
        })?;

    let mut column_name = None;
    for segment in split_segments(tag) {
        let name_value = segment
            .split_once('=')
            .filter(|(key, _)| key.trim() == "name")
            .map(|(_, value)| value.trim());
        match name_value {
            Some(value) if column_name.is_none() => {
                validate_name(value)?;
                column_name = Some(value.to_string());
            }
            _ => {
                return Err(TagError::MalformedTag {
                    context: TagContext::Field,
                    segment: segment.to_string(),
                });
            }
        }
    }

    Ok(ColumnDefinition {
        name: column_name.unwrap_or_else(|| field.name.clone()),
        column_type,
    })
}
