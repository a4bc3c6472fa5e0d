//! Primary-key / index-key expression parser
//!
//! Grammar (informal):
//! ```text
//! expr       := token | '(' group ')'
//! group      := partition (',' clustering)*
//! partition  := token | '(' token (',' token)* ')'
//! clustering := token (WS ('asc' | 'desc'))?    -- case-insensitive
//! ```
//! A bare token is one partition key with no clustering keys. Multiple
//! keys require the explicit parenthesized form; an unparenthesized
//! top-level comma is an error. One redundant layer of wrapping around
//! a single partition key is tolerated (`((pk1), pk2)` reads the same
//! as `(pk1, pk2)`); deeper nesting is not part of the grammar. Empty
//! elements from trailing or doubled commas are skipped. Errors echo
//! the full original expression.

use crate::name::is_key_token;
use crate::split::split_segments;
use dosa_core::{ClusteringKey, PrimaryKey, TagError};

/// Parses the value of a `primaryKey=` or `key=` tag.
pub fn parse_key_expression(expression: &str) -> Result<PrimaryKey, TagError> {
    let invalid = || TagError::InvalidPrimaryKey {
        expression: expression.to_string(),
    };

    // Trailing top-level commas produce empty segments, which the
    // splitter drops; any second non-empty segment means an
    // unparenthesized multi-key expression.
    let segments = split_segments(expression);
    let body = match segments.as_slice() {
        [single] => *single,
        _ => return Err(invalid()),
    };

    if !body.starts_with('(') {
        // Bare single partition key. A direction suffix is only valid
        // on clustering keys, so any whitespace here is an error.
        if !is_key_token(body) {
            return Err(invalid());
        }
        return Ok(PrimaryKey {
            partition_keys: vec![body.to_string()],
            clustering_keys: Vec::new(),
        });
    }

    let inner = strip_group_parens(body).ok_or_else(|| invalid())?;
    let mut elements = split_segments(inner).into_iter();

    let partition_keys = match elements.next() {
        Some(first) => parse_partition_element(first).ok_or_else(|| invalid())?,
        None => return Err(invalid()),
    };

    let mut clustering_keys = Vec::new();
    for element in elements {
        clustering_keys.push(parse_clustering_element(element).ok_or_else(|| invalid())?);
    }

    Ok(PrimaryKey {
        partition_keys,
        clustering_keys,
    })
}

/// Strips one balanced layer of parentheses. `None` when the closer is
/// missing or the opening paren pairs with something other than the
/// final character (`(a)(b)` is not a group).
fn strip_group_parens(body: &str) -> Option<&str> {
    let inner = body.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    if depth == 0 {
        Some(inner)
    } else {
        None
    }
}

/// The first element of a group: either a bare token (one partition
/// key) or a parenthesized token list (several partition keys, or one
/// redundantly wrapped).
fn parse_partition_element(element: &str) -> Option<Vec<String>> {
    if element.starts_with('(') {
        let inner = strip_group_parens(element)?;
        let keys = split_segments(inner);
        if keys.is_empty() || !keys.iter().all(|k| is_key_token(k)) {
            return None;
        }
        return Some(keys.into_iter().map(str::to_string).collect());
    }
    if is_key_token(element) {
        Some(vec![element.to_string()])
    } else {
        None
    }
}

/// A clustering element: token with an optional case-insensitive
/// `asc`/`desc` suffix; a bare token sorts ascending.
fn parse_clustering_element(element: &str) -> Option<ClusteringKey> {
    let mut words = element.split_whitespace();
    let name = words.next()?;
    if !is_key_token(name) {
        return None;
    }
    let descending = match words.next() {
        None => false,
        Some(direction) if direction.eq_ignore_ascii_case("asc") => false,
        Some(direction) if direction.eq_ignore_ascii_case("desc") => true,
        Some(_) => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(ClusteringKey {
        name: name.to_string(),
        descending,
    })
}
