//! crates/logging/src/options/document.rs
//! JSON form of [`LoggerOptions`].
//!
//! Keys use camelCase. Reserved operation names are refused with
//! [`ConfigError::ReservedName`], any other unrecognised key with
//! [`ConfigError::UnknownOption`]. The renderer and sinks cannot be
//! expressed as data and are therefore unknown keys here.

use std::collections::BTreeMap;

use history::Category;
use serde::Deserialize;
use serde_json::Value;

use super::LoggerOptions;
use crate::error::ConfigError;
use crate::reserved::ensure_not_reserved;

const KNOWN_KEYS: [&str; 7] = [
    "printImmediately",
    "includeTimestamp",
    "includePrefixes",
    "includePayload",
    "capacity",
    "colorByCategory",
    "prefixes",
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OptionsDocument {
    print_immediately: Option<bool>,
    include_timestamp: Option<bool>,
    include_prefixes: Option<bool>,
    include_payload: Option<bool>,
    capacity: Option<usize>,
    #[serde(default)]
    color_by_category: BTreeMap<Category, String>,
    prefixes: Option<Vec<String>>,
}

impl LoggerOptions {
    /// Parses options from a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{ConfigError, LoggerOptions};
    ///
    /// let options = LoggerOptions::from_json(r#"{"capacity": 2, "prefixes": ["api"]}"#)?;
    /// # let _ = options;
    ///
    /// let err = LoggerOptions::from_json(r#"{"fork": true}"#).unwrap_err();
    /// assert!(matches!(err, ConfigError::ReservedName(_)));
    /// # Ok::<(), ConfigError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Parses options from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(map) = &value else {
            return Err(ConfigError::NotAnObject);
        };

        for key in map.keys() {
            ensure_not_reserved(key)?;
            if !KNOWN_KEYS.contains(&key.as_str()) {
                return Err(ConfigError::UnknownOption(key.clone()));
            }
        }

        let document: OptionsDocument = serde_json::from_value(value)?;
        Ok(document.into_options())
    }
}

impl OptionsDocument {
    fn into_options(self) -> LoggerOptions {
        LoggerOptions {
            print_immediately: self.print_immediately,
            include_timestamp: self.include_timestamp,
            include_prefixes: self.include_prefixes,
            include_payload: self.include_payload,
            capacity: self.capacity,
            colors: self.color_by_category,
            prefixes: self.prefixes,
            ..LoggerOptions::default()
        }
    }
}
