//! Fuzz test for the entity tag parser
//!
//! Feeds arbitrary byte sequences through the whole entity tag
//! pipeline (segment splitter, dispatch, option validators) to find
//! panics and partially-applied results.
//!
//! Run with: cargo +nightly fuzz run entity_tag_fuzz -- -max_total_time=60

#![no_main]

use dosa_core::Ttl;
use dosa_schema::parse_entity_tag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse_entity_tag("FuzzEntity", input) {
            Ok(entity) => {
                // Mandatory keys must be present on any success
                assert!(!entity.table_name.is_empty());
                assert!(!entity.primary_key.partition_keys.is_empty());

                // A parsed TTL is always strictly positive
                if let Ttl::After(duration) = entity.ttl {
                    assert!(duration.as_secs() >= 1, "ttl below one second escaped");
                }
            }
            Err(err) => {
                assert!(!err.to_string().is_empty());
            }
        }
    }
});
