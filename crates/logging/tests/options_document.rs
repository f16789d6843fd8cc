//! Integration tests for reading logger options from JSON documents.

use logging::{Category, ConfigError, Logger, LoggerOptions, RESERVED_NAMES, is_reserved};
use serde_json::json;

/// A document drives the same configuration as the builder.
#[test]
fn document_and_builder_agree() {
    let from_json = LoggerOptions::from_json(
        r#"{
            "printImmediately": false,
            "includeTimestamp": false,
            "capacity": 4,
            "colorByCategory": {"INFO": "<i>"},
            "prefixes": ["svc", "v2"]
        }"#,
    )
    .unwrap();
    let from_builder = LoggerOptions::new()
        .print_immediately(false)
        .include_timestamp(false)
        .capacity(4)
        .color(Category::Info, "<i>")
        .prefixes(["svc", "v2"]);

    let a = Logger::new(from_json).unwrap();
    let b = Logger::new(from_builder).unwrap();
    assert_eq!(a.config(), b.config());
}

/// Every reserved name is refused as a key.
#[test]
fn reserved_names_are_refused() {
    for name in RESERVED_NAMES {
        let err = LoggerOptions::from_value(json!({ *name: true })).unwrap_err();
        assert!(
            matches!(&err, ConfigError::ReservedName(found) if found == *name),
            "{name}: {err}"
        );
    }
}

/// A document can feed a fork, not only a root logger.
#[test]
fn documents_configure_forks() {
    let root = Logger::new(LoggerOptions::new().print_immediately(false).prefix("root")).unwrap();
    let options = LoggerOptions::from_json(r#"{"capacity": 1}"#).unwrap();
    let child = root.fork(&options).unwrap();

    child.log_plain("one", None);
    child.log_plain("two", None);

    assert_eq!(child.history().len(), 1);
    assert_eq!(root.history().len(), 2);
    assert_eq!(child.prefixes(), ["root"]);
}

/// Zero capacity parses but fails when applied.
#[test]
fn zero_capacity_is_a_construction_error() {
    let options = LoggerOptions::from_json(r#"{"capacity": 0}"#).unwrap();
    assert!(matches!(
        Logger::new(options).unwrap_err(),
        ConfigError::ZeroCapacity
    ));
}

/// Category keys accept the LOG spelling for the plain category.
#[test]
fn log_is_an_alias_for_plain_colors() {
    let options = LoggerOptions::from_json(r#"{"colorByCategory": {"LOG": "<log>"}}"#).unwrap();
    let logger = Logger::new(options.print_immediately(false)).unwrap();
    assert_eq!(logger.colors().get(Category::Plain), "<log>");
}

#[test]
fn ordinary_names_are_not_reserved() {
    assert!(!is_reserved("capacity"));
    assert!(!is_reserved("database"));
}
