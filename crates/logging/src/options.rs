//! crates/logging/src/options.rs
//! Caller-facing option sets for construction, forking and single emissions.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use history::Category;
use logging_sink::SinkTable;

use crate::render::Renderer;

mod document;

/// Options for building a [`Logger`](crate::Logger) or forking one.
///
/// Every field is optional. When building a root logger unset fields take the
/// defaults of [`LoggerConfig`](crate::LoggerConfig); when forking they are
/// inherited from the parent. See [`LoggerConfig::merge`](crate::LoggerConfig::merge)
/// for the exact rules, including how prefixes combine.
///
/// # Examples
///
/// ```
/// use history::Category;
/// use logging::LoggerOptions;
///
/// let options = LoggerOptions::new()
///     .capacity(50)
///     .include_timestamp(false)
///     .color(Category::Info, "\x1b[34m")
///     .prefix("server");
/// # let _ = options;
/// ```
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub(crate) print_immediately: Option<bool>,
    pub(crate) include_timestamp: Option<bool>,
    pub(crate) include_prefixes: Option<bool>,
    pub(crate) include_payload: Option<bool>,
    pub(crate) capacity: Option<usize>,
    pub(crate) colors: BTreeMap<Category, String>,
    pub(crate) prefixes: Option<Vec<String>>,
    pub(crate) extra_prefixes: Vec<String>,
    pub(crate) renderer: Option<Arc<dyn Renderer>>,
    pub(crate) sinks: Option<SinkTable>,
}

/// Options accepted by [`Logger::fork`](crate::Logger::fork).
///
/// Forking and construction share one option set; the name documents intent
/// at call sites.
pub type ForkOptions = LoggerOptions;

impl LoggerOptions {
    /// Creates an option set with nothing specified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether records are rendered and written when emitted.
    #[must_use]
    pub fn print_immediately(mut self, enabled: bool) -> Self {
        self.print_immediately = Some(enabled);
        self
    }

    /// Whether the default renderers include the timestamp.
    #[must_use]
    pub fn include_timestamp(mut self, enabled: bool) -> Self {
        self.include_timestamp = Some(enabled);
        self
    }

    /// Whether the default renderers include the prefix chain.
    #[must_use]
    pub fn include_prefixes(mut self, enabled: bool) -> Self {
        self.include_prefixes = Some(enabled);
        self
    }

    /// Whether the default renderers include a present payload.
    #[must_use]
    pub fn include_payload(mut self, enabled: bool) -> Self {
        self.include_payload = Some(enabled);
        self
    }

    /// Capacity of the logger's history buffer. Zero is rejected when the
    /// options are applied.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Color token for one category.
    #[must_use]
    pub fn color(mut self, category: Category, token: impl Into<String>) -> Self {
        self.colors.insert(category, token.into());
        self
    }

    /// Appends one prefix to the replacement prefix list.
    ///
    /// The first call starts a replacement list, discarding any inherited
    /// chain. Use [`extra_prefix`](Self::extra_prefix) to extend an inherited
    /// chain instead.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.get_or_insert_with(Vec::new).push(prefix.into());
        self
    }

    /// Sets the full replacement prefix list.
    #[must_use]
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one prefix after the inherited (or replacement) chain.
    #[must_use]
    pub fn extra_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extra_prefixes.push(prefix.into());
        self
    }

    /// Appends several prefixes after the inherited (or replacement) chain.
    #[must_use]
    pub fn extra_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Renderer used for immediate output and for [`replay`](crate::Logger::replay).
    #[must_use]
    pub fn renderer<R>(mut self, renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Renderer shared with other loggers.
    #[must_use]
    pub fn shared_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Output sinks, one per category.
    #[must_use]
    pub fn sinks(mut self, sinks: SinkTable) -> Self {
        self.sinks = Some(sinks);
        self
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("print_immediately", &self.print_immediately)
            .field("include_timestamp", &self.include_timestamp)
            .field("include_prefixes", &self.include_prefixes)
            .field("include_payload", &self.include_payload)
            .field("capacity", &self.capacity)
            .field("colors", &self.colors)
            .field("prefixes", &self.prefixes)
            .field("extra_prefixes", &self.extra_prefixes)
            .field("custom_renderer", &self.renderer.is_some())
            .field("sinks", &self.sinks)
            .finish()
    }
}

/// Overrides that apply to a single emission only.
///
/// Extra prefixes are stamped on that one record; the color applies to that
/// call's immediate output. Neither is stored in the logger, so they are not
/// seen by later emissions, by [`replay`](crate::Logger::replay), or by forks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CallOverrides {
    pub(crate) extra_prefixes: Vec<String>,
    pub(crate) color: Option<String>,
}

impl CallOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a prefix to this record's chain.
    #[must_use]
    pub fn extra_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extra_prefixes.push(prefix.into());
        self
    }

    /// Uses `token` instead of the category color for this call.
    #[must_use]
    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = Some(token.into());
        self
    }
}
