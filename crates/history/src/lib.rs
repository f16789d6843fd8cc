#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/history/src/lib.rs
//!
//! # Overview
//!
//! `history` holds the value types shared across the logtail workspace: the
//! closed [`Category`] enumeration, the immutable [`Record`] produced by every
//! emission, the process clock that stamps records, and the bounded
//! [`HistoryBuffer`] that retains the most recent records.
//!
//! # Design
//!
//! Records are shared, never copied. A buffer stores `Arc<Record>` handles, so a
//! record appended to a forked buffer and propagated to every ancestor lives in
//! several buffers at once and is freed only when the last of them evicts it.
//!
//! Buffers form a tree through [`HistoryBuffer::fork`]. A child holds a
//! shared handle to its parent, so appends keep flowing upwards for as long as
//! the child exists. Nothing flows downwards and a parent never references
//! its children.
//!
//! # Invariants
//!
//! - A buffer never holds more records than its capacity; the oldest record is
//!   evicted first.
//! - Snapshots are returned oldest first and are detached copies.
//! - Every ancestor observes a child's records in the order the child stored
//!   them, even under concurrent appends.
//! - [`Timestamp::now`] never goes backwards within a process.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//! use history::{Category, HistoryBuffer, Record};
//!
//! let root = HistoryBuffer::new(NonZeroUsize::new(2).unwrap());
//! let child = root.fork(None);
//!
//! for message in ["a", "b", "c"] {
//!     child.append(Arc::new(Record::new(Category::Info, message, None, &[])));
//! }
//!
//! let messages: Vec<_> = root.snapshot().iter().map(|r| r.message().to_owned()).collect();
//! assert_eq!(messages, ["b", "c"]);
//! ```

mod buffer;
mod category;
mod clock;
mod record;

pub use buffer::HistoryBuffer;
pub use category::{Category, ParseCategoryError};
pub use clock::Timestamp;
pub use record::Record;

/// Capacity used for a root buffer when no explicit size is configured.
pub const DEFAULT_CAPACITY: usize = 100;
