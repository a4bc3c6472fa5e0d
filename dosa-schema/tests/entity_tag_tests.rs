//! Entity tag orchestration tests
//!
//! Exercises the whole pipeline: segment splitting, key dispatch, the
//! key-expression parser, and the option validators, against tag
//! strings in the shapes client code actually writes.

use dosa_core::{ClusteringKey, EtlState, PrimaryKey, TagError, Ttl};
use dosa_schema::parse_entity_tag;
use std::time::Duration;

fn single_key(name: &str) -> PrimaryKey {
    PrimaryKey {
        partition_keys: vec![name.to_string()],
        clustering_keys: Vec::new(),
    }
}

#[test]
fn minimal_entity_tag() {
    for tag in [
        "name=jj, primaryKey=ok",
        "name=jj, primaryKey=(ok)",
        "primaryKey=ok, name=jj",
        "primaryKey=(ok), name=jj",
        "primaryKey=((ok)), name=jj",
    ] {
        let entity = parse_entity_tag("testStruct", tag).unwrap();
        assert_eq!(entity.table_name, "jj", "{tag}");
        assert_eq!(entity.primary_key, single_key("ok"), "{tag}");
        assert_eq!(entity.etl, EtlState::Off, "{tag}");
        assert_eq!(entity.ttl, Ttl::NoTtl, "{tag}");
    }
}

#[test]
fn empty_segments_between_options_are_ignored() {
    let entity = parse_entity_tag("testStruct", "primaryKey=(ok), , ,, name=jj").unwrap();
    assert_eq!(entity.table_name, "jj");
    assert_eq!(entity.primary_key, single_key("ok"));
}

#[test]
fn compound_key_with_directions() {
    let entity = parse_entity_tag(
        "testStruct",
        "name=jj, primaryKey=((ok, dd), a, b DESC,  c ASC) ",
    )
    .unwrap();
    assert_eq!(entity.table_name, "jj");
    assert_eq!(
        entity.primary_key,
        PrimaryKey {
            partition_keys: vec!["ok".into(), "dd".into()],
            clustering_keys: vec![
                ClusteringKey::new("a", false),
                ClusteringKey::new("b", true),
                ClusteringKey::new("c", false),
            ],
        }
    );
}

#[test]
fn etl_flag_parses_case_insensitively() {
    for (tag, expected) in [
        ("name=jj, primaryKey=ok, etl=on", EtlState::On),
        ("name=jj, primaryKey=ok, etl=ON", EtlState::On),
        ("name=jj, primaryKey=ok, etl=off", EtlState::Off),
        ("name=jj, primaryKey=ok, etl=OFF", EtlState::Off),
    ] {
        let entity = parse_entity_tag("testStruct", tag).unwrap();
        assert_eq!(entity.etl, expected, "{tag}");
    }
}

#[test]
fn ttl_values_parse_with_supported_units() {
    for (tag, expected) in [
        ("name=jj, primaryKey=ok, etl=ON, ttl=90s", Duration::from_secs(90)),
        ("name=jj, primaryKey=ok, etl=On, ttl=80m", Duration::from_secs(80 * 60)),
        ("name=jj, primaryKey=ok, etl=OFF, ttl = 90h", Duration::from_secs(90 * 3600)),
    ] {
        let entity = parse_entity_tag("testStruct", tag).unwrap();
        assert_eq!(entity.ttl, Ttl::After(expected), "{tag}");
    }
}

#[test]
fn bad_ttl_values_fail_with_the_right_kind() {
    // Negative and sub-second totals are invalid ttl tags.
    for tag in [
        "name=jj, primaryKey=ok, etl=On, ttl=-80m",
        "name=jj, primaryKey=ok, etl=Off, ttl = 912ms",
        "name=jj, primaryKey=ok, etl=Off, ttl=1us",
        "name=jj, primaryKey=ok, etl=Off, ttl=",
    ] {
        let err = parse_entity_tag("testStruct", tag).unwrap_err();
        assert!(matches!(err, TagError::InvalidTtl { .. }), "{tag}: {err}");
        assert!(err.to_string().contains("invalid ttl tag"), "{tag}");
    }

    // A unit the grammar does not know is its own failure, naming it.
    let err = parse_entity_tag("testStruct", "name=jj, primaryKey=ok, etl=Off, ttl=912d")
        .unwrap_err();
    assert_eq!(
        err,
        TagError::UnknownDurationUnit {
            unit: "d".into(),
            value: "912d".into()
        }
    );

    // A bare ttl key never reaches the duration grammar.
    let err = parse_entity_tag("testStruct", "name=jj, primaryKey=ok, etl=Off, ttl").unwrap_err();
    assert!(matches!(err, TagError::MalformedTag { .. }));
    assert_eq!(err.to_string(), "invalid dosa struct tag: ttl");
}

#[test]
fn bad_etl_values_are_malformed_segments() {
    for tag in [
        "name=jj, primaryKey=ok, etl=",
        "name=jj, primaryKey=ok, etl",
        "name=jj, primaryKey=ok, etl=maybe",
    ] {
        let err = parse_entity_tag("testStruct", tag).unwrap_err();
        assert!(matches!(err, TagError::MalformedTag { .. }), "{tag}: {err}");
        assert!(err.to_string().contains("invalid dosa struct tag"), "{tag}");
    }
}

#[test]
fn unrecognized_keys_and_stray_segments_are_malformed() {
    let err = parse_entity_tag("testStruct", "primaryK=adsf, name=jj").unwrap_err();
    assert_eq!(err.to_string(), "invalid dosa struct tag: primaryK=adsf");

    let err = parse_entity_tag("testStruct", "primaryKey=(ok), name=jj, nxxx").unwrap_err();
    assert_eq!(err.to_string(), "invalid dosa struct tag: nxxx");

    let err = parse_entity_tag("testStruct", "name=jj, name=kk, primaryKey=ok").unwrap_err();
    assert_eq!(err.to_string(), "invalid dosa struct tag: name=kk");
}

#[test]
fn invalid_table_names_are_rejected() {
    let err = parse_entity_tag("testStruct", "primaryKey=adsf, name=jj**").unwrap_err();
    assert_eq!(err, TagError::InvalidName { name: "jj**".into() });

    let err = parse_entity_tag("testStruct", "primaryKey=ok, name=ji^&*").unwrap_err();
    assert!(err.to_string().contains("invalid name"));
}

#[test]
fn key_expression_errors_echo_the_expression() {
    let err = parse_entity_tag("testStruct", "primaryKey=(ok,adsf zz), name=jj").unwrap_err();
    assert!(err.to_string().contains("invalid primary key: (ok,adsf zz)"));
}

#[test]
fn missing_mandatory_keys_fail_after_the_full_scan() {
    let err = parse_entity_tag("testStruct", "primaryKey=ok").unwrap_err();
    assert_eq!(
        err,
        TagError::MissingTag {
            owner: "testStruct".into(),
            key: "name"
        }
    );
    assert!(err.to_string().contains("testStruct"));

    let err = parse_entity_tag("testStruct", "name=jj").unwrap_err();
    assert_eq!(
        err,
        TagError::MissingTag {
            owner: "testStruct".into(),
            key: "primaryKey"
        }
    );

    let err = parse_entity_tag("testStruct", "").unwrap_err();
    assert!(matches!(err, TagError::MissingTag { key: "name", .. }));
}
