use crate::domain::ports::LineSink;
use crate::utils::error::{CounterError, Result};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::time::Instant;

/// Writes to the process's standard output, flushing after every line so a
/// reader on a pipe sees each line as soon as it is printed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line).map_err(CounterError::OutputError)?;
        out.flush().map_err(CounterError::OutputError)
    }
}

/// Any `io::Write` as a sink, e.g. a file or a `Vec<u8>`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(CounterError::OutputError)?;
        self.writer.flush().map_err(CounterError::OutputError)
    }
}

/// Captures lines in memory together with the instant each was written.
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Instant, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(Instant, String)>> {
        // 寫入端不會在持鎖時 panic，中毒時直接沿用資料
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn timestamps(&self) -> Vec<Instant> {
        self.entries().iter().map(|(at, _)| *at).collect()
    }

    /// Everything written so far, as it would appear on stdout.
    pub fn contents(&self) -> String {
        self.entries()
            .iter()
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.entries().push((Instant::now(), line.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_line("0").unwrap();
        writer.write_line("Process Exited").unwrap();

        assert_eq!(sink.lines(), vec!["0", "Process Exited"]);
        assert_eq!(sink.contents(), "0\nProcess Exited\n");
        assert_eq!(sink.timestamps().len(), 2);
    }

    #[test]
    fn test_writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("7").unwrap();
        sink.write_line("8").unwrap();
        assert_eq!(sink.into_inner(), b"7\n8\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_reports_output_error() {
        let mut sink = WriterSink::new(ClosedPipe);
        match sink.write_line("0") {
            Err(CounterError::OutputError(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
