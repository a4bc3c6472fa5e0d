//! Index tag orchestration tests

use dosa_core::{ClusteringKey, PrimaryKey, TagError};
use dosa_schema::parse_index_tag;

fn single_key(name: &str) -> PrimaryKey {
    PrimaryKey {
        partition_keys: vec![name.to_string()],
        clustering_keys: Vec::new(),
    }
}

#[test]
fn name_tag_overrides_the_declared_identifier() {
    for tag in [
        "name=jj, key=ok",
        "name=jj, key=(ok)",
        "key=ok, name=jj",
        "key=(ok), name=jj",
        "key=((ok)), name=jj",
        "key=(ok), , ,, name=jj",
    ] {
        let index = parse_index_tag("SearchByKey", tag).unwrap();
        assert_eq!(index.index_name, "jj", "{tag}");
        assert_eq!(index.key, single_key("ok"), "{tag}");
        assert!(index.columns.is_empty(), "{tag}");
    }
}

#[test]
fn compound_key_expression() {
    let index = parse_index_tag("SearchByKey", "name=jj, key=((ok, dd), a, b DESC,  c ASC) ")
        .unwrap();
    assert_eq!(
        index.key,
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
fn declared_identifier_is_used_when_no_name_tag() {
    let index = parse_index_tag("SearchByKey", "key=((ok))").unwrap();
    assert_eq!(index.index_name, "SearchByKey");
    assert_eq!(index.key, single_key("ok"));
}

#[test]
fn unexported_declared_identifier_is_rejected() {
    let err = parse_index_tag("searchByKey", "key=((ok))").unwrap_err();
    assert_eq!(
        err,
        TagError::NotExported {
            name: "searchByKey".into()
        }
    );
    assert!(err.to_string().contains("is not exported"));
}

#[test]
fn empty_declared_identifier_is_an_invalid_name() {
    let err = parse_index_tag("", "key=((ok))").unwrap_err();
    assert!(matches!(err, TagError::InvalidName { .. }));
    assert!(err.to_string().contains("invalid name"));
}

#[test]
fn invalid_name_tag_value() {
    let err = parse_index_tag("SearchByKey", "key=adsf, name=jj**").unwrap_err();
    assert_eq!(err, TagError::InvalidName { name: "jj**".into() });
}

#[test]
fn unrecognized_keys_and_stray_segments_are_malformed() {
    let err = parse_index_tag("SearchByKey", "primaryK=adsf, name=jj").unwrap_err();
    assert_eq!(err.to_string(), "invalid dosa index tag: primaryK=adsf");

    let err = parse_index_tag("SearchByKey", "key=(ok), name=jj, nxxx").unwrap_err();
    assert_eq!(err.to_string(), "invalid dosa index tag: nxxx");
}

#[test]
fn key_expression_errors_echo_the_expression() {
    let err = parse_index_tag("SearchByKey", "key=(ok,adsf zz), name=jj").unwrap_err();
    assert!(err.to_string().contains("invalid primary key: (ok,adsf zz)"));
}

#[test]
fn missing_key_tag_fails_after_the_full_scan() {
    let err = parse_index_tag("SearchByKey", "name=jj").unwrap_err();
    assert_eq!(
        err,
        TagError::MissingTag {
            owner: "SearchByKey".into(),
            key: "key"
        }
    );
}

#[test]
fn covered_columns_list() {
    let index = parse_index_tag("SearchByKey", "name=jj, key=ok, columns=(ok)").unwrap();
    assert_eq!(index.columns, vec!["ok"]);

    let index = parse_index_tag("SearchByKey", "name=jj, key=ok, columns=(ok, test, hi,)")
        .unwrap();
    assert_eq!(index.columns, vec!["ok", "test", "hi"]);
}

#[test]
fn nested_grouping_inside_columns_is_malformed() {
    let err = parse_index_tag("SearchByKey", "name=jj, key=ok, columns=(ok, test, (hi),)")
        .unwrap_err();
    assert!(matches!(err, TagError::MalformedTag { .. }));
    assert!(err
        .to_string()
        .contains("invalid dosa index tag: columns=(ok, test, (hi),)"));
}
