use super::*;
use std::io::{self, Write};

#[test]
fn sink_appends_newlines_by_default() {
    let mut sink = MessageSink::new(Vec::new());
    sink.write_line("vanished").expect("write succeeds");
    sink.write_line("partial").expect("write succeeds");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("vanished"));
    assert_eq!(lines.next(), Some("partial"));
    assert!(lines.next().is_none());
}

#[test]
fn sink_without_newline_preserves_output() {
    let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
    sink.write_line("ready").expect("write succeeds");
    assert_eq!(sink.into_inner(), b"ready".to_vec());
}

#[test]
fn replace_writer_returns_previous_output() {
    let mut sink = MessageSink::new(Vec::new());
    sink.write_line("before").expect("write succeeds");

    let previous = sink.replace_writer(Vec::new());
    sink.write_line("after").expect("write succeeds");

    assert_eq!(previous, b"before\n".to_vec());
    assert_eq!(sink.into_inner(), b"after\n".to_vec());
}

#[test]
fn map_writer_keeps_line_mode() {
    let sink = MessageSink::with_line_mode(Vec::<u8>::new(), LineMode::WithoutNewline);
    let mut mapped = sink.map_writer(io::Cursor::new);
    assert_eq!(mapped.line_mode(), LineMode::WithoutNewline);

    mapped.write_line("kept").expect("write succeeds");
    assert_eq!(mapped.into_inner().into_inner(), b"kept".to_vec());
}

#[test]
fn set_line_mode_applies_to_later_writes() {
    let mut sink = MessageSink::new(Vec::new());
    sink.write_line("progress").expect("write succeeds");
    sink.set_line_mode(LineMode::WithoutNewline);
    sink.write_line("done").expect("write succeeds");

    assert_eq!(sink.into_inner(), b"progress\ndone".to_vec());
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_surface_unchanged() {
    let mut sink = MessageSink::new(FailingWriter);
    let err = sink.write_line("lost").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
