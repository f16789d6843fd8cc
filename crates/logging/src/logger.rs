//! crates/logging/src/logger.rs
//! The logger facade: emission, history access, replay and forking.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use history::{Category, HistoryBuffer, Record};
use logging_sink::SinkTable;
use serde_json::Value;

use crate::config::{ColorMap, LoggerConfig};
use crate::error::ConfigError;
use crate::options::{CallOverrides, ForkOptions, LoggerOptions};
use crate::render::{DefaultRenderer, RenderView, Renderer};
use crate::reserved::ensure_not_reserved;

type Registry = Arc<Mutex<BTreeMap<String, Logger>>>;

/// A configured logger owning one history buffer.
///
/// Every emitted record is appended to this logger's buffer and, through the
/// fork links, to the buffer of every ancestor. When the print policy asks
/// for it the record is also rendered and written to the sink of its
/// category.
///
/// Cloning yields a handle to the same buffer, renderer, sinks and sub-logger
/// registry with its own copy of the configuration. The type is `Send` and
/// `Sync`; emission takes `&self`.
///
/// # Examples
///
/// ```
/// use logging::{CaptureWriter, Logger, LoggerOptions, SinkTable};
///
/// let output = CaptureWriter::new();
/// let root = Logger::new(
///     LoggerOptions::new()
///         .include_timestamp(false)
///         .sinks(SinkTable::uniform(output.clone())),
/// )?;
/// let db = root.fork(&LoggerOptions::new().extra_prefix("[db]"))?;
///
/// db.log_info("connected", None);
///
/// assert_eq!(root.history().len(), 1);
/// assert_eq!(output.lines(), ["\x1b[36m[db] connected"]);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    config: LoggerConfig,
    history: Arc<HistoryBuffer>,
    renderer: Arc<dyn Renderer>,
    sinks: SinkTable,
    subloggers: Registry,
}

impl Logger {
    /// Builds a root logger, applying defaults for every unset option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] when a capacity of zero is
    /// requested.
    pub fn new(options: LoggerOptions) -> Result<Self, ConfigError> {
        let config = LoggerConfig::resolve(&options)?;
        let history = HistoryBuffer::new(config.capacity);
        let renderer = options
            .renderer
            .unwrap_or_else(|| Arc::new(DefaultRenderer) as Arc<dyn Renderer>);
        let sinks = options.sinks.unwrap_or_default();

        tracing::debug!(
            target: "logtail::logger",
            capacity = config.capacity.get(),
            prefixes = ?config.prefixes,
            "created root logger"
        );
        Ok(Self::from_parts(config, history, renderer, sinks))
    }

    fn from_parts(
        config: LoggerConfig,
        history: Arc<HistoryBuffer>,
        renderer: Arc<dyn Renderer>,
        sinks: SinkTable,
    ) -> Self {
        Self {
            config,
            history,
            renderer,
            sinks,
            subloggers: Registry::default(),
        }
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The prefix chain stamped on new records.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.config.prefixes
    }

    /// The per-category color tokens.
    #[must_use]
    pub const fn colors(&self) -> &ColorMap {
        &self.config.colors
    }

    /// The output sinks.
    #[must_use]
    pub const fn sinks(&self) -> &SinkTable {
        &self.sinks
    }

    /// Emits a [`Category::Plain`] record.
    pub fn log_plain(&self, message: impl Into<String>, payload: Option<Value>) {
        self.emit(Category::Plain, message, payload);
    }

    /// Emits a [`Category::Info`] record.
    pub fn log_info(&self, message: impl Into<String>, payload: Option<Value>) {
        self.emit(Category::Info, message, payload);
    }

    /// Emits a [`Category::Error`] record.
    pub fn log_error(&self, message: impl Into<String>, payload: Option<Value>) {
        self.emit(Category::Error, message, payload);
    }

    /// Emits a record of any category.
    pub fn emit(&self, category: Category, message: impl Into<String>, payload: Option<Value>) {
        self.emit_with(category, message, payload, &CallOverrides::default());
    }

    /// Emits a record with overrides that apply to this call only.
    ///
    /// Extra prefixes are appended to this record's chain and the color
    /// override replaces the category color for this call's output. Neither
    /// changes the logger.
    pub fn emit_with(
        &self,
        category: Category,
        message: impl Into<String>,
        payload: Option<Value>,
        overrides: &CallOverrides,
    ) {
        let record = if overrides.extra_prefixes.is_empty() {
            Record::new(category, message, payload, &self.config.prefixes)
        } else {
            let mut prefixes = self.config.prefixes.clone();
            prefixes.extend(overrides.extra_prefixes.iter().cloned());
            Record::new(category, message, payload, &prefixes)
        };
        let record = Arc::new(record);

        self.history.append(Arc::clone(&record));

        if self.config.policy.print_immediately {
            let color = overrides
                .color
                .as_deref()
                .unwrap_or_else(|| self.config.colors.get(category));
            self.print(&record, color, self.renderer.as_ref());
        }
    }

    /// Snapshot of this logger's history, oldest first.
    ///
    /// Includes records emitted through this logger and through every
    /// descendant, subject to this logger's capacity.
    #[must_use]
    pub fn history(&self) -> Vec<Arc<Record>> {
        self.history.snapshot()
    }

    /// The underlying history buffer.
    #[must_use]
    pub const fn history_buffer(&self) -> &Arc<HistoryBuffer> {
        &self.history
    }

    /// Renders and writes every stored record, oldest first.
    ///
    /// Uses `renderer` when given and the logger's own renderer otherwise,
    /// always with this logger's current colors and print policy. Records are
    /// written even when immediate printing is disabled. History is not
    /// modified.
    pub fn replay(&self, renderer: Option<&dyn Renderer>) {
        let renderer: &dyn Renderer = match renderer {
            Some(renderer) => renderer,
            None => self.renderer.as_ref(),
        };
        let records = self.history.snapshot();
        tracing::trace!(target: "logtail::logger", count = records.len(), "replaying history");
        for record in &records {
            self.print(record, self.config.colors.get(record.category()), renderer);
        }
    }

    /// Creates a child logger.
    ///
    /// Options that are set replace the parent's values and the rest are
    /// inherited, as described on [`LoggerConfig::merge`]. The child gets a
    /// fresh buffer linked under this logger's buffer, so its records also
    /// land here. Renderer and sinks are shared unless overridden. The child
    /// starts without sub-loggers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] when a capacity of zero is
    /// requested.
    pub fn fork(&self, options: &ForkOptions) -> Result<Self, ConfigError> {
        let config = self.config.merge(options)?;
        let history = self.history.fork(Some(config.capacity));
        let renderer = options
            .renderer
            .clone()
            .unwrap_or_else(|| Arc::clone(&self.renderer));
        let sinks = options.sinks.clone().unwrap_or_else(|| self.sinks.clone());

        tracing::debug!(
            target: "logtail::logger",
            capacity = config.capacity.get(),
            prefixes = ?config.prefixes,
            depth = history.depth(),
            "forked logger"
        );
        Ok(Self::from_parts(config, history, renderer, sinks))
    }

    /// Forks a child and registers it under `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::EmptyName`], [`ConfigError::ReservedName`] or
    /// [`ConfigError::DuplicateSublogger`] when the name cannot be used, and
    /// with any error [`fork`](Self::fork) reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{ConfigError, Logger, LoggerOptions};
    ///
    /// let root = Logger::new(LoggerOptions::new().print_immediately(false))?;
    /// root.add_sublogger("http", &LoggerOptions::new().extra_prefix("[http]"))?;
    ///
    /// let http = root.sublogger("http").expect("registered");
    /// assert_eq!(http.prefixes(), ["[http]"]);
    ///
    /// let err = root.add_sublogger("history", &LoggerOptions::new()).unwrap_err();
    /// assert!(matches!(err, ConfigError::ReservedName(_)));
    /// # Ok::<(), ConfigError>(())
    /// ```
    pub fn add_sublogger(
        &self,
        name: impl Into<String>,
        options: &ForkOptions,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        ensure_not_reserved(&name)?;

        let mut registry = self.registry();
        if registry.contains_key(&name) {
            return Err(ConfigError::DuplicateSublogger(name));
        }
        let child = self.fork(options)?;
        registry.insert(name, child.clone());
        Ok(child)
    }

    /// Looks up a sub-logger registered with [`add_sublogger`](Self::add_sublogger).
    #[must_use]
    pub fn sublogger(&self, name: &str) -> Option<Self> {
        self.registry().get(name).cloned()
    }

    /// Names of the registered sub-loggers, sorted.
    #[must_use]
    pub fn sublogger_names(&self) -> Vec<String> {
        self.registry().keys().cloned().collect()
    }

    /// Replaces this handle's color for `category`.
    ///
    /// Forks taken earlier keep the colors they were created with.
    pub fn set_color(&mut self, category: Category, token: impl Into<String>) {
        self.config.colors.set(category, token);
    }

    /// Appends a prefix to this handle's chain for records emitted from now on.
    pub fn push_prefix(&mut self, prefix: impl Into<String>) {
        self.config.prefixes.push(prefix.into());
    }

    /// Flushes every sink.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by a writer.
    pub fn flush(&self) -> io::Result<()> {
        self.sinks.flush()
    }

    fn print(&self, record: &Record, color: &str, renderer: &dyn Renderer) {
        let view = RenderView::from_record(record, color, self.config.policy);
        let line = renderer.render(&view);
        if let Err(error) = self.sinks.write_line(record.category(), &line) {
            tracing::warn!(
                target: "logtail::sink",
                category = %record.category(),
                %error,
                "failed to write log line"
            );
        }
    }

    fn registry(&self) -> MutexGuard<'_, BTreeMap<String, Self>> {
        self.subloggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        let config = LoggerConfig::default();
        let history = HistoryBuffer::new(config.capacity);
        Self::from_parts(config, history, Arc::new(DefaultRenderer), SinkTable::standard())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("sinks", &self.sinks)
            .field("subloggers", &self.sublogger_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
