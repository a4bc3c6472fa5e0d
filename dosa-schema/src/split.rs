//! Tag segment splitting

/// Splits a tag string on top-level commas into trimmed, non-empty
/// `key=value` segments. Commas inside parenthesized groups do not
/// split, so `primaryKey=(pk1, pk2)` stays one segment. Empty segments
/// produced by trailing or doubled commas are dropped.
pub fn split_segments(tag: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in tag.char_indices() {
        match c {
            '(' => depth += 1,
            // Stray closers clamp to zero rather than erroring; the
            // grammar inside each segment rejects them later.
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_trimmed(&mut segments, &tag[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_trimmed(&mut segments, &tag[start..]);

    segments
}

fn push_trimmed<'a>(segments: &mut Vec<&'a str>, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed);
    }
}
