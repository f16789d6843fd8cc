use super::MessageSink;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single line using the sink's current [`LineMode`](crate::LineMode).
    ///
    /// The terminator, when requested, is written in the same call so a line
    /// and its newline are never split across two lock acquisitions by callers
    /// that share the sink.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.line_mode.append_newline() {
            let mut buffer = String::with_capacity(line.len() + 1);
            buffer.push_str(line);
            buffer.push('\n');
            self.writer.write_all(buffer.as_bytes())
        } else {
            self.writer.write_all(line.as_bytes())
        }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
