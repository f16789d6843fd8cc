//! crates/logging-sink/src/sink/table.rs
//! Per-category routing of rendered lines to shared sinks.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use history::Category;

use super::MessageSink;

/// Type-erased writer stored in a [`SinkTable`].
pub type DynWriter = Box<dyn Write + Send>;

/// A sink shared between every table and logger that routes to it.
pub type SharedSink = Arc<Mutex<MessageSink<DynWriter>>>;

/// Per-category output bindings.
///
/// Cloning a table is cheap and yields a table routing to the same sinks;
/// forked loggers share their parent's table this way. Categories bound to
/// the same sink (for example [`Category::Plain`] and [`Category::Info`] on
/// standard output) share one mutex, so their lines never interleave.
#[derive(Clone)]
pub struct SinkTable {
    plain: SharedSink,
    info: SharedSink,
    error: SharedSink,
}

impl SinkTable {
    /// Routes [`Category::Plain`] and [`Category::Info`] to standard output and
    /// [`Category::Error`] to standard error.
    #[must_use]
    pub fn standard() -> Self {
        let stdout = shared(io::stdout());
        Self {
            plain: Arc::clone(&stdout),
            info: stdout,
            error: shared(io::stderr()),
        }
    }

    /// Routes every category to one writer.
    #[must_use]
    pub fn uniform<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let sink = shared(writer);
        Self {
            plain: Arc::clone(&sink),
            info: Arc::clone(&sink),
            error: sink,
        }
    }

    /// Rebinds `category` to a fresh sink around `writer`.
    #[must_use]
    pub fn with_writer<W>(self, category: Category, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.with_sink(category, shared(writer))
    }

    /// Rebinds `category` to an existing shared sink.
    #[must_use]
    pub fn with_sink(mut self, category: Category, sink: SharedSink) -> Self {
        *self.slot_mut(category) = sink;
        self
    }

    /// Returns the sink bound to `category`.
    #[must_use]
    pub const fn sink(&self, category: Category) -> &SharedSink {
        match category {
            Category::Plain => &self.plain,
            Category::Info => &self.info,
            Category::Error => &self.error,
        }
    }

    /// Swaps the writer behind `category`'s sink and returns the old one.
    ///
    /// The change is visible to every table sharing that sink.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer<W>(&self, category: Category, writer: W) -> DynWriter
    where
        W: Write + Send + 'static,
    {
        lock(self.sink(category)).replace_writer(Box::new(writer))
    }

    /// Writes one rendered line to `category`'s sink.
    pub fn write_line(&self, category: Category, line: &str) -> io::Result<()> {
        lock(self.sink(category)).write_line(line)
    }

    /// Flushes every distinct sink in the table.
    pub fn flush(&self) -> io::Result<()> {
        let mut flushed: Vec<&SharedSink> = Vec::with_capacity(3);
        for category in Category::ALL {
            let sink = self.sink(category);
            if flushed.iter().any(|seen| Arc::ptr_eq(seen, sink)) {
                continue;
            }
            lock(sink).flush()?;
            flushed.push(sink);
        }
        Ok(())
    }

    const fn slot_mut(&mut self, category: Category) -> &mut SharedSink {
        match category {
            Category::Plain => &mut self.plain,
            Category::Info => &mut self.info,
            Category::Error => &mut self.error,
        }
    }
}

impl Default for SinkTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for SinkTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkTable")
            .field("plain_shares_info", &Arc::ptr_eq(&self.plain, &self.info))
            .field("error_shares_info", &Arc::ptr_eq(&self.error, &self.info))
            .finish_non_exhaustive()
    }
}

fn shared<W>(writer: W) -> SharedSink
where
    W: Write + Send + 'static,
{
    let sink = MessageSink::new(writer).map_writer(|w| Box::new(w) as DynWriter);
    Arc::new(Mutex::new(sink))
}

fn lock(sink: &SharedSink) -> MutexGuard<'_, MessageSink<DynWriter>> {
    sink.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureWriter;

    #[test]
    fn uniform_routes_every_category_to_one_writer() {
        let capture = CaptureWriter::new();
        let table = SinkTable::uniform(capture.clone());

        for category in Category::ALL {
            table.write_line(category, category.as_str()).unwrap();
        }
        assert_eq!(capture.lines(), ["PLAIN", "INFO", "ERROR"]);
    }

    #[test]
    fn with_writer_rebinds_a_single_category() {
        let out = CaptureWriter::new();
        let err = CaptureWriter::new();
        let table = SinkTable::uniform(out.clone()).with_writer(Category::Error, err.clone());

        table.write_line(Category::Plain, "p").unwrap();
        table.write_line(Category::Error, "e").unwrap();

        assert_eq!(out.lines(), ["p"]);
        assert_eq!(err.lines(), ["e"]);
    }

    #[test]
    fn clones_share_sinks() {
        let capture = CaptureWriter::new();
        let table = SinkTable::uniform(capture.clone());
        let clone = table.clone();

        clone.write_line(Category::Info, "from clone").unwrap();
        assert_eq!(capture.lines(), ["from clone"]);
        assert!(Arc::ptr_eq(table.sink(Category::Info), clone.sink(Category::Info)));
    }

    #[test]
    fn replace_writer_is_seen_by_clones() {
        let first = CaptureWriter::new();
        let second = CaptureWriter::new();
        let table = SinkTable::uniform(first.clone());
        let clone = table.clone();

        let _previous = table.replace_writer(Category::Info, second.clone());
        clone.write_line(Category::Plain, "moved").unwrap();

        assert!(first.contents().is_empty());
        assert_eq!(second.lines(), ["moved"]);
    }

    #[test]
    fn standard_shares_stdout_between_plain_and_info() {
        let table = SinkTable::standard();
        assert!(Arc::ptr_eq(table.sink(Category::Plain), table.sink(Category::Info)));
        assert!(!Arc::ptr_eq(table.sink(Category::Error), table.sink(Category::Info)));
    }

    #[test]
    fn flush_succeeds_on_shared_sinks() {
        let table = SinkTable::uniform(CaptureWriter::new());
        table.flush().unwrap();
    }
}
