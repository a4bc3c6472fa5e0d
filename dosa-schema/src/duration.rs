//! Restricted TTL duration grammar

use dosa_core::TagError;
use std::time::Duration;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Parses a `ttl=` value: one or more `<integer><unit>` pairs with an
/// optional leading sign, e.g. `90s`, `80m`, `1h30m`.
///
/// `h`, `m`, and `s` are the supported units. Sub-second units (`ms`,
/// `us`, `ns`) are recognized syntactically but any total below one
/// second is rejected, so they can never stand alone; zero and
/// negative totals fall under the same rule. An unrecognized unit
/// (`d` and anything larger) is a distinct failure naming the unit.
pub fn parse_ttl(value: &str) -> Result<Duration, TagError> {
    let invalid = || TagError::InvalidTtl {
        value: value.to_string(),
    };

    let mut rest = value;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos: i128 = 0;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(invalid());
        }
        let (digits, tail) = rest.split_at(digits_end);
        let magnitude: i128 = digits.parse().map_err(|_| invalid())?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        if unit.is_empty() || !unit.chars().all(|c| c.is_alphabetic() || c == 'µ') {
            return Err(invalid());
        }
        let nanos_per_unit = match unit {
            "h" => 3_600 * NANOS_PER_SEC,
            "m" => 60 * NANOS_PER_SEC,
            "s" => NANOS_PER_SEC,
            "ms" => 1_000_000,
            "us" | "µs" => 1_000,
            "ns" => 1,
            _ => {
                return Err(TagError::UnknownDurationUnit {
                    unit: unit.to_string(),
                    value: value.to_string(),
                })
            }
        };
        total_nanos = magnitude
            .checked_mul(nanos_per_unit)
            .and_then(|n| total_nanos.checked_add(n))
            .ok_or_else(invalid)?;
        rest = tail;
    }

    if negative {
        total_nanos = -total_nanos;
    }
    // Anything shorter than one second is not a usable TTL.
    if total_nanos < NANOS_PER_SEC {
        return Err(invalid());
    }
    let nanos = u64::try_from(total_nanos).map_err(|_| invalid())?;
    Ok(Duration::from_nanos(nanos))
}
