mod message_sink;
mod table;

pub use message_sink::MessageSink;
pub use table::{DynWriter, SharedSink, SinkTable};
