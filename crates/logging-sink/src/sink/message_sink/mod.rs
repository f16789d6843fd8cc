use std::fmt;

use crate::line_mode::LineMode;

/// Streaming sink that writes rendered log lines into an [`std::io::Write`]
/// target.
///
/// The sink owns the underlying writer and the [`LineMode`] that decides
/// whether each line is terminated. It does not format anything itself: the
/// text it receives is written exactly as given.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write_line("vanished")?;
/// sink.write_line("partial")?;
///
/// assert_eq!(sink.into_inner(), b"vanished\npartial\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Write a line without appending a newline:
///
/// ```
/// use logging_sink::{LineMode, MessageSink};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write_line("ready")?;
///
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

mod constructors;
mod mapping;
mod writing;

impl<W> MessageSink<W> {
    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests;
