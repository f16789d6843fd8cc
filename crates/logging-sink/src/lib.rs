#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output side of the logtail workspace: a
//! [`MessageSink`] that streams already rendered lines into any
//! [`std::io::Write`] implementor, and a [`SinkTable`] that binds one sink to
//! each [`history::Category`].
//!
//! # Design
//!
//! Sinks never render. They receive finished text from the logger and only
//! decide whether to terminate it with a newline, as selected by a
//! [`LineMode`]. A [`SinkTable`] is owned by (or shared among) logger
//! instances; there is no process-wide table.
//!
//! # Invariants
//!
//! - Each category always resolves to a sink; lookups cannot fail.
//! - Every sink sits behind its own mutex, so a line is written in one piece
//!   even when several loggers share the table.
//! - `LineMode::WithNewline` is the default, matching one record per line.
//!
//! # Errors
//!
//! All write operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. Whether to report them is the caller's decision.
//!
//! # Examples
//!
//! Route errors to their own capture buffer:
//!
//! ```
//! use history::Category;
//! use logging_sink::{CaptureWriter, SinkTable};
//!
//! let out = CaptureWriter::new();
//! let err = CaptureWriter::new();
//! let table = SinkTable::uniform(out.clone()).with_writer(Category::Error, err.clone());
//!
//! table.write_line(Category::Info, "ready").unwrap();
//! table.write_line(Category::Error, "failed").unwrap();
//!
//! assert_eq!(out.contents(), "ready\n");
//! assert_eq!(err.contents(), "failed\n");
//! ```

mod capture;
mod line_mode;
mod sink;

pub use capture::CaptureWriter;
pub use line_mode::LineMode;
pub use sink::{DynWriter, MessageSink, SharedSink, SinkTable};
