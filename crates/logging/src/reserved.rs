//! crates/logging/src/reserved.rs
//! Names that belong to the logger's own interface.

use crate::error::ConfigError;

/// Operation names that may not be reused as configuration keys or
/// sub-logger names. Both the Rust method names and the camelCase spellings
/// used by configuration documents are covered.
pub const RESERVED_NAMES: &[&str] = &[
    "log_plain",
    "log_info",
    "log_error",
    "emit",
    "emit_with",
    "fork",
    "history",
    "replay",
    "logPlain",
    "logInfo",
    "logError",
    "getHistory",
    "log",
    "info",
    "error",
    "getLogs",
    "printLogsStack",
];

/// Reports whether `name` is one of [`RESERVED_NAMES`].
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

pub(crate) fn ensure_not_reserved(name: &str) -> Result<(), ConfigError> {
    if is_reserved(name) {
        tracing::debug!(target: "logtail::config", name, "rejected reserved name");
        return Err(ConfigError::ReservedName(name.to_owned()));
    }
    Ok(())
}
