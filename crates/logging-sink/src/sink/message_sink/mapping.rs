use super::MessageSink;
use std::mem;

impl<W> MessageSink<W> {
    /// Maps the sink's writer into a different type while keeping its [`LineMode`](crate::LineMode).
    ///
    /// Used to erase a concrete writer into the boxed writer a
    /// [`SinkTable`](crate::SinkTable) stores.
    #[must_use]
    pub fn map_writer<F, W2>(self, f: F) -> MessageSink<W2>
    where
        F: FnOnce(W) -> W2,
    {
        let MessageSink { writer, line_mode } = self;
        MessageSink::with_line_mode(f(writer), line_mode)
    }

    /// Replaces the underlying writer while preserving the sink's [`LineMode`](crate::LineMode).
    ///
    /// The previous writer is returned so anything it buffered can be
    /// inspected or flushed before it is dropped, for example when switching a
    /// category from standard output to a file mid-run.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}
