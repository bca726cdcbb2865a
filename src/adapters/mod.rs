// Adapters layer: concrete sinks behind the `LineSink` port.

pub mod sink;

pub use sink::{MemorySink, StdoutSink, WriterSink};
