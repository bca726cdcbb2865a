use crate::utils::error::Result;

/// Destination for the lines of a run. Each call writes one line and its
/// terminating `\n`.
pub trait LineSink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

