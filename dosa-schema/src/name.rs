//! Identifier grammars
//!
//! Two deliberately separate grammars. The strict grammar applies to
//! `name=` values (table, index, and column names). The loose grammar
//! applies to tokens inside key expressions, where any non-delimiter
//! run is a valid key name; it only ever fails on structural position,
//! not character content. Keep them separate: conflating them would
//! reject clustering keys like `io-$%^*` that the key grammar accepts.

use dosa_core::TagError;

/// Validates a `name=` value against the strict identifier grammar:
/// ASCII alphanumeric plus underscore, non-empty, no leading digit.
pub fn validate_name(name: &str) -> Result<(), TagError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(TagError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Reports whether `token` is a valid key-expression token: any
/// non-empty run free of whitespace, commas, and parentheses.
pub fn is_key_token(token: &str) -> bool {
    !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
}

/// Scrapes a `name=<value>` occurrence out of `tag`, tolerating
/// whatever unrelated tokens surround it, and validates the value
/// against the strict grammar. Falls back to `default_name` (itself
/// validated) when no `name=` is present.
///
/// This is the lenient lookup used when a caller needs a table or
/// index name before the rest of the tag is parseable; the entity and
/// index parsers themselves go through the strict segment dispatch
/// instead.
pub fn extract_name_tag(tag: &str, default_name: &str) -> Result<String, TagError> {
    let name = find_name_value(tag).unwrap_or(default_name);
    validate_name(name)?;
    Ok(name.to_string())
}

fn find_name_value(tag: &str) -> Option<&str> {
    for (start, _) in tag.match_indices("name") {
        // Key must sit on a segment boundary, not inside another word.
        let boundary = tag[..start]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || c == ',');
        if !boundary {
            continue;
        }
        let rest = tag[start + "name".len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == ',')
            .unwrap_or(rest.len());
        return Some(&rest[..end]);
    }
    None
}
