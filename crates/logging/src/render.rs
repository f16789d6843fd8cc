//! crates/logging/src/render.rs
//! Turning a record plus display settings into one output line.

use history::{Category, Record, Timestamp};
use serde_json::{Map, Value};

use crate::config::PrintPolicy;

/// Everything a renderer may show for one record.
///
/// The color token and print policy come from the logger doing the printing,
/// not from the logger that produced the record.
#[derive(Clone, Copy, Debug)]
pub struct RenderView<'a> {
    /// Category of the record.
    pub category: Category,
    /// Message text.
    pub message: &'a str,
    /// Structured payload, if the record carries one.
    pub payload: Option<&'a Value>,
    /// Creation time.
    pub timestamp: Timestamp,
    /// Prefix chain, outermost first.
    pub prefixes: &'a [String],
    /// Color token to place in front of the line.
    pub color: &'a str,
    /// Segments to include.
    pub policy: PrintPolicy,
}

impl<'a> RenderView<'a> {
    /// Builds a view of `record` with the given display settings.
    #[must_use]
    pub fn from_record(record: &'a Record, color: &'a str, policy: PrintPolicy) -> Self {
        Self {
            category: record.category(),
            message: record.message(),
            payload: record.payload(),
            timestamp: record.timestamp(),
            prefixes: record.prefixes(),
            color,
            policy,
        }
    }

    /// The payload unless it is absent, JSON `null`, or excluded by policy.
    #[must_use]
    pub fn visible_payload(&self) -> Option<&'a Value> {
        if !self.policy.include_payload {
            return None;
        }
        self.payload.filter(|value| !value.is_null())
    }
}

/// Formats a [`RenderView`] into the text written to a sink.
///
/// The returned string is written as is; the sink decides on the line
/// terminator. Any `Fn(&RenderView<'_>) -> String` closure is a renderer.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LoggerOptions, RenderView};
///
/// let logger = Logger::new(
///     LoggerOptions::new()
///         .print_immediately(false)
///         .renderer(|view: &RenderView<'_>| view.message.to_uppercase()),
/// )?;
/// logger.log_info("quiet", None);
/// # Ok::<(), logging::ConfigError>(())
/// ```
pub trait Renderer: Send + Sync {
    /// Produces the output text for one record.
    fn render(&self, view: &RenderView<'_>) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&RenderView<'_>) -> String + Send + Sync,
{
    fn render(&self, view: &RenderView<'_>) -> String {
        self(view)
    }
}

/// The standard single-line format.
///
/// Layout: color token, then `timestamp ` when timestamps are included, then
/// each prefix followed by a space when prefixes are included, then the
/// message, then a space and the compact JSON payload when one is visible.
/// No reset sequence is appended.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {
    fn render(&self, view: &RenderView<'_>) -> String {
        let mut line = String::with_capacity(view.color.len() + view.message.len() + 32);
        line.push_str(view.color);

        if view.policy.include_timestamp {
            line.push_str(&view.timestamp.to_rfc3339());
            line.push(' ');
        }

        if view.policy.include_prefixes {
            for prefix in view.prefixes {
                line.push_str(prefix);
                line.push(' ');
            }
        }

        line.push_str(view.message);

        if let Some(payload) = view.visible_payload() {
            line.push(' ');
            line.push_str(&payload.to_string());
        }

        line
    }
}

/// One JSON object per record, for machine consumers.
///
/// Keys are `time`, `category`, `prefixes`, `message` and `payload`. Segments
/// excluded by the print policy, and absent payloads, are left out. Color
/// tokens are never written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &RenderView<'_>) -> String {
        let mut object = Map::new();

        if view.policy.include_timestamp {
            object.insert("time".to_owned(), Value::String(view.timestamp.to_rfc3339()));
        }
        object.insert(
            "category".to_owned(),
            Value::String(view.category.as_str().to_owned()),
        );
        if view.policy.include_prefixes {
            object.insert(
                "prefixes".to_owned(),
                Value::Array(view.prefixes.iter().cloned().map(Value::String).collect()),
            );
        }
        object.insert("message".to_owned(), Value::String(view.message.to_owned()));
        if let Some(payload) = view.visible_payload() {
            object.insert("payload".to_owned(), payload.clone());
        }

        Value::Object(object).to_string()
    }
}
