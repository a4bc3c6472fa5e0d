//! Fuzz test for the key expression parser
//!
//! Feeds arbitrary byte sequences through the key-expression grammar
//! to find panics, infinite loops, and invariant violations.
//!
//! Run with: cargo +nightly fuzz run key_expression_fuzz -- -max_total_time=60

#![no_main]

use dosa_schema::parse_key_expression;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The parser only takes valid UTF-8; it must never panic on it.
    if let Ok(input) = std::str::from_utf8(data) {
        match parse_key_expression(input) {
            Ok(key) => {
                // A successful parse always has at least one partition key
                assert!(
                    !key.partition_keys.is_empty(),
                    "parsed key must carry a partition key"
                );

                // Canonical rendering must reparse to the same structure
                let rendered = key.to_string();
                let reparsed = parse_key_expression(&rendered)
                    .expect("canonical rendering must be parseable");
                assert_eq!(reparsed, key, "canonical rendering must round-trip");
            }
            Err(err) => {
                // Diagnostics always carry a message
                assert!(!err.to_string().is_empty());
            }
        }
    }
});
