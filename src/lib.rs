#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logtail` is the single entry point to the workspace's logging crates:
//!
//! - [`history`] holds immutable records and the bounded, fork-linked buffers
//!   that store them.
//! - [`logging_sink`] routes rendered lines to one writer per category.
//! - [`logging`] provides the [`Logger`] facade, its configuration and the
//!   renderers. Its public items are re-exported here.
//!
//! Enable the `tracing` feature to forward `tracing` events into a logger
//! through `LoggerLayer`.
//!
//! # Examples
//!
//! ```
//! use logtail::{CaptureWriter, ForkOptions, Logger, LoggerOptions, SinkTable};
//!
//! let out = CaptureWriter::new();
//! let root = Logger::new(
//!     LoggerOptions::new()
//!         .capacity(5)
//!         .prefix("[root]")
//!         .include_timestamp(false)
//!         .sinks(SinkTable::uniform(out.clone())),
//! )?;
//! let child = root.fork(&ForkOptions::new().capacity(2).extra_prefix("[child]"))?;
//!
//! logtail::log_info!(child, "ready");
//!
//! assert_eq!(out.lines(), ["\x1b[36m[root] [child] ready"]);
//! assert_eq!(root.history().len(), 1);
//! # Ok::<(), logtail::ConfigError>(())
//! ```

pub use history;
pub use logging::*;
pub use logging_sink;
