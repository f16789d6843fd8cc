//! crates/logging/src/macros.rs
//! Formatting shorthands for the emission methods.
//!
//! Each macro takes a logger expression, an optional `payload = expr;`
//! clause and `format!` arguments. The payload expression may be anything
//! convertible into a JSON [`Value`](crate::Value).

#[doc(hidden)]
#[macro_export]
macro_rules! __emit_formatted {
    ($category:expr, $logger:expr, payload = $payload:expr; $($arg:tt)+) => {
        $logger.emit(
            $category,
            ::std::format!($($arg)+),
            ::std::option::Option::Some($crate::Value::from($payload)),
        )
    };
    ($category:expr, $logger:expr, $($arg:tt)+) => {
        $logger.emit($category, ::std::format!($($arg)+), ::std::option::Option::None)
    };
}

/// Emits a formatted [`Category::Plain`](crate::Category::Plain) record.
///
/// # Example
/// ```
/// use logging::{log_plain, Logger, LoggerOptions};
///
/// let logger = Logger::new(LoggerOptions::new().print_immediately(false))?;
/// log_plain!(logger, "{} files scanned", 12);
/// assert_eq!(logger.history()[0].message(), "12 files scanned");
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[macro_export]
macro_rules! log_plain {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit_formatted!($crate::Category::Plain, $logger, $($rest)+)
    };
}

/// Emits a formatted [`Category::Info`](crate::Category::Info) record.
///
/// # Example
/// ```
/// use logging::{log_info, Logger, LoggerOptions};
/// use serde_json::json;
///
/// let logger = Logger::new(LoggerOptions::new().print_immediately(false))?;
/// log_info!(logger, payload = json!({"port": 8080}); "listening on {}", "0.0.0.0");
/// assert_eq!(logger.history()[0].payload(), Some(&json!({"port": 8080})));
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit_formatted!($crate::Category::Info, $logger, $($rest)+)
    };
}

/// Emits a formatted [`Category::Error`](crate::Category::Error) record.
///
/// # Example
/// ```
/// use logging::{log_error, Logger, LoggerOptions};
///
/// let logger = Logger::new(LoggerOptions::new().print_immediately(false))?;
/// log_error!(logger, payload = 3; "retry {} failed", 3);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__emit_formatted!($crate::Category::Error, $logger, $($rest)+)
    };
}
