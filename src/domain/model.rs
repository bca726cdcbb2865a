use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_not_below, validate_range, validate_single_line, Validate,
};
use std::ops::Range;
use std::time::Duration;

pub const DEFAULT_START: u64 = 0;
pub const DEFAULT_END: u64 = 10;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_EXIT_MESSAGE: &str = "Process Exited";

/// Upper bound for the delay after each print.
pub const MAX_INTERVAL_MS: u64 = 60 * 60 * 1000;

/// What one run prints and how slowly it prints it.
///
/// The default is the canonical fixture: `0` through `9`, one second after
/// each line, then `Process Exited`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSettings {
    pub start: u64,
    /// Exclusive.
    pub end: u64,
    pub interval: Duration,
    pub exit_message: String,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            interval: DEFAULT_INTERVAL,
            exit_message: DEFAULT_EXIT_MESSAGE.to_string(),
        }
    }
}

impl CounterSettings {
    pub fn ticks(&self) -> Range<u64> {
        self.start..self.end
    }

    pub fn tick_count(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// The exact bytes a complete run writes.
    pub fn expected_output(&self) -> String {
        let mut out = String::new();
        for i in self.ticks() {
            out.push_str(&i.to_string());
            out.push('\n');
        }
        out.push_str(&self.exit_message);
        out.push('\n');
        out
    }

    pub fn estimated_duration(&self) -> Duration {
        let ticks = u32::try_from(self.tick_count()).unwrap_or(u32::MAX);
        self.interval.saturating_mul(ticks)
    }
}

impl Validate for CounterSettings {
    fn validate(&self) -> Result<()> {
        validate_not_below("counter.end", self.end, "counter.start", self.start)?;

        let interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX);
        validate_range("counter.interval_ms", interval_ms, 0, MAX_INTERVAL_MS)?;

        validate_non_empty_string("counter.exit_message", &self.exit_message)?;
        validate_single_line("counter.exit_message", &self.exit_message)?;

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub counter_lines: u64,
    /// Counter lines plus the exit message.
    pub total_lines: u64,
    pub elapsed: Duration,
}
