#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides [`Logger`], a structured logger whose records are kept
//! in a bounded history and optionally printed as they are emitted. Loggers
//! form a tree through [`Logger::fork`]: a child inherits the parent's
//! configuration field by field, extends its prefix chain, and forwards every
//! record it stores to the parent's history.
//!
//! # Design
//!
//! - Configuration is supplied as [`LoggerOptions`], where every field is
//!   optional, and resolved into a [`LoggerConfig`] when the logger is built.
//!   [`LoggerConfig::merge`] holds the inheritance rules used by forks.
//! - Records live in [`history::HistoryBuffer`]s shared through `Arc`; the
//!   same record handle sits in a child's buffer and in every ancestor's.
//! - Output goes through a [`Renderer`] to a [`SinkTable`] holding one writer
//!   per [`Category`]. Rendering and writing happen after every history lock
//!   has been released.
//! - Options may also be read from JSON with [`LoggerOptions::from_json`].
//!   Keys that name logger operations are refused (see [`RESERVED_NAMES`]).
//!
//! # Errors
//!
//! Only construction, forking, sub-logger registration and option parsing
//! can fail, all with [`ConfigError`]. Emitting never fails: when a sink
//! rejects a write, a `tracing` warning is raised under the `logtail::sink`
//! target and the record stays in history.
//!
//! # Features
//!
//! - `tracing`: enables [`LoggerLayer`] and [`init_tracing`], which forward
//!   events from the `tracing` ecosystem into a logger.
//!
//! # Examples
//!
//! ```
//! use logging::{CaptureWriter, Category, ForkOptions, Logger, LoggerOptions, SinkTable};
//!
//! let output = CaptureWriter::new();
//! let app = Logger::new(
//!     LoggerOptions::new()
//!         .include_timestamp(false)
//!         .prefix("app")
//!         .color(Category::Info, "")
//!         .sinks(SinkTable::uniform(output.clone())),
//! )?;
//! let worker = app.fork(&ForkOptions::new().extra_prefix("worker").capacity(10))?;
//!
//! worker.log_info("started", Some(serde_json::json!({"id": 1})));
//!
//! assert_eq!(output.lines(), [r#"app worker started {"id":1}"#]);
//! assert_eq!(app.history().len(), 1);
//! # Ok::<(), logging::ConfigError>(())
//! ```

mod config;
mod error;
mod logger;
mod macros;
mod options;
mod render;
mod reserved;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{CYAN, ColorMap, LoggerConfig, PrintPolicy, RED, YELLOW};
pub use error::ConfigError;
pub use history::{Category, HistoryBuffer, ParseCategoryError, Record, Timestamp};
pub use logger::Logger;
pub use logging_sink::{CaptureWriter, LineMode, MessageSink, SinkTable};
pub use options::{CallOverrides, ForkOptions, LoggerOptions};
pub use render::{DefaultRenderer, JsonRenderer, RenderView, Renderer};
pub use reserved::{RESERVED_NAMES, is_reserved};
pub use serde_json::Value;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
