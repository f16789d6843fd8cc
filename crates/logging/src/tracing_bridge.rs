//! crates/logging/src/tracing_bridge.rs
//! Forwarding `tracing` events into a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that turns every event into a
//! record on the wrapped logger:
//!
//! - `ERROR` becomes [`Category::Error`], `WARN` and `INFO` become
//!   [`Category::Info`], `DEBUG` and `TRACE` become [`Category::Plain`].
//! - The event target is appended to the record's prefix chain.
//! - The `message` field becomes the record message; every other field is
//!   collected into a JSON object payload.
//!
//! Events whose target starts with `logtail::` are the logger's own
//! diagnostics and are dropped, so a sink failure cannot feed back into the
//! logger that reported it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{init_tracing, Logger};
//!
//! init_tracing(Logger::default())?;
//! tracing::info!(target: "server", port = 8080, "listening");
//! ```

use history::Category;
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::logger::Logger;
use crate::options::CallOverrides;

const INTERNAL_TARGET_PREFIX: &str = "logtail::";

/// A tracing layer that records events on a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Wraps `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The logger events are forwarded to.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    const fn level_to_category(level: &Level) -> Category {
        match *level {
            Level::ERROR => Category::Error,
            Level::WARN | Level::INFO => Category::Info,
            Level::DEBUG | Level::TRACE => Category::Plain,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if target.starts_with(INTERNAL_TARGET_PREFIX) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let payload = (!visitor.fields.is_empty()).then(|| Value::Object(visitor.fields));
        self.logger.emit_with(
            Self::level_to_category(metadata.level()),
            visitor.message.unwrap_or_default(),
            payload,
            &CallOverrides::new().extra_prefix(target),
        );
    }
}

/// Splits an event into its message and the remaining fields.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl EventVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(text) => text,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_owned(), value);
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::String(value.to_owned()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }
}

/// Installs a [`LoggerLayer`] around `logger` as the global subscriber.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(logger: Logger) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}

/// Installs a [`LoggerLayer`] behind `filter` as the global subscriber.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{init_tracing_with_filter, Logger};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Logger::default(), EnvFilter::from_default_env())?;
/// ```
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .try_init()
}
