//! crates/logging/src/error.rs
//! Configuration errors raised while building or forking a logger.

use thiserror::Error;

/// Error returned when logger options cannot be turned into a working logger.
///
/// These are the only errors in the crate. Emitting, replaying and reading
/// history never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A history capacity of zero was requested.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    /// A configuration key or sub-logger name collides with a logger operation.
    #[error("\"{0}\" is reserved by the logger interface")]
    ReservedName(String),

    /// A configuration document contained a key the logger does not recognise.
    #[error("unknown logger option \"{0}\"")]
    UnknownOption(String),

    /// A sub-logger was registered under an empty name.
    #[error("sub-logger name must not be empty")]
    EmptyName,

    /// A sub-logger with the same name is already registered.
    #[error("a sub-logger named \"{0}\" is already registered")]
    DuplicateSublogger(String),

    /// A configuration document was valid JSON but not an object.
    #[error("logger configuration must be a JSON object")]
    NotAnObject,

    /// A configuration document could not be parsed.
    #[error("malformed logger configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_name_mentions_the_name() {
        let error = ConfigError::ReservedName("fork".to_owned());
        assert!(error.to_string().contains("\"fork\""));
    }

    #[test]
    fn malformed_wraps_json_errors() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(source);
        assert!(matches!(error, ConfigError::Malformed(_)));
        assert!(error.to_string().starts_with("malformed logger configuration"));
    }
}
