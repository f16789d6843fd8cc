//! crates/history/src/record.rs
//! Immutable log records shared between history buffers.

use serde_json::Value;

use crate::category::Category;
use crate::clock::Timestamp;

/// One emitted log event.
///
/// A record is immutable once built. The prefix list is copied from the
/// emitting logger at construction, so later changes to that logger's
/// configuration never show up in records it already produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    category: Category,
    message: String,
    payload: Option<Value>,
    prefixes: Vec<String>,
    timestamp: Timestamp,
}

impl Record {
    /// Builds a record stamped with [`Timestamp::now`].
    #[must_use]
    pub fn new(
        category: Category,
        message: impl Into<String>,
        payload: Option<Value>,
        prefixes: &[String],
    ) -> Self {
        Self::with_timestamp(category, message, payload, prefixes, Timestamp::now())
    }

    /// Builds a record with an explicit creation time.
    #[must_use]
    pub fn with_timestamp(
        category: Category,
        message: impl Into<String>,
        payload: Option<Value>,
        prefixes: &[String],
        timestamp: Timestamp,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            payload,
            prefixes: prefixes.to_vec(),
            timestamp,
        }
    }

    /// Category the record was emitted under.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Opaque structured payload, if one was supplied.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Prefixes of the emitting logger at creation time, outermost first.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Creation time.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefixes_are_copied_not_borrowed() {
        let mut prefixes = vec!["server".to_owned()];
        let record = Record::new(Category::Info, "ready", None, &prefixes);

        prefixes.push("later".to_owned());
        prefixes[0].push_str("-renamed");

        assert_eq!(record.prefixes(), ["server"]);
    }

    #[test]
    fn accessors_return_construction_values() {
        let ts = Timestamp::from_unix_nanos(42);
        let record = Record::with_timestamp(
            Category::Error,
            "disk full",
            Some(json!({"free": 0})),
            &["db".to_owned()],
            ts,
        );

        assert_eq!(record.category(), Category::Error);
        assert_eq!(record.message(), "disk full");
        assert_eq!(record.payload(), Some(&json!({"free": 0})));
        assert_eq!(record.prefixes(), ["db"]);
        assert_eq!(record.timestamp(), ts);
    }

    #[test]
    fn later_records_are_not_older() {
        let first = Record::new(Category::Plain, "one", None, &[]);
        let second = Record::new(Category::Plain, "two", None, &[]);
        assert!(second.timestamp() >= first.timestamp());
    }

    #[test]
    fn payload_is_optional() {
        let record = Record::new(Category::Plain, "no payload", None, &[]);
        assert!(record.payload().is_none());
    }
}
