use crate::domain::model::{CounterSettings, RunSummary};
use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use tokio::time::{sleep, Instant};

/// Counts through `settings.ticks()`, writing each value and then pausing for
/// `settings.interval`, and finishes with the exit message.
pub struct CounterEngine<S: LineSink> {
    settings: CounterSettings,
    sink: S,
}

impl<S: LineSink> CounterEngine<S> {
    pub fn new(settings: CounterSettings, sink: S) -> Self {
        Self { settings, sink }
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!(
            "▶️ Counting {}..{} every {:?}",
            self.settings.start,
            self.settings.end,
            self.settings.interval
        );

        let mut counter_lines = 0u64;
        for i in self.settings.ticks() {
            self.sink.write_line(&i.to_string())?;
            counter_lines += 1;
            tracing::debug!(tick = i, "printed");
            sleep(self.settings.interval).await;
        }

        self.sink.write_line(&self.settings.exit_message)?;

        let summary = RunSummary {
            counter_lines,
            total_lines: counter_lines + 1,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            "✅ Run finished: {} lines in {:?}",
            summary.total_lines,
            summary.elapsed
        );
        Ok(summary)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::utils::error::CounterError;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_default_run_output_and_timing() {
        let sink = MemorySink::new();
        let mut engine = CounterEngine::new(CounterSettings::default(), sink.clone());

        let summary = engine.run().await.unwrap();

        assert_eq!(
            sink.contents(),
            "0\n1\n2\n3\n4\n5\n6\n7\n8\n9\nProcess Exited\n"
        );
        assert_eq!(summary.counter_lines, 10);
        assert_eq!(summary.total_lines, 11);
        assert!(summary.elapsed >= Duration::from_secs(10));
        assert!(summary.elapsed < Duration::from_secs(10) + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_before_first_line() {
        let sink = MemorySink::new();
        let started = Instant::now();
        let mut engine = CounterEngine::new(CounterSettings::default(), sink.clone());
        engine.run().await.unwrap();

        let stamps = sink.timestamps();
        assert_eq!(stamps[0], started);
        for pair in stamps.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap >= Duration::from_secs(1), "gap too short: {:?}", gap);
            assert!(gap < Duration::from_millis(1010), "gap too long: {:?}", gap);
        }
    }

    struct FailAfter {
        remaining: usize,
    }

    impl LineSink for FailAfter {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            if self.remaining == 0 {
                return Err(CounterError::OutputError(std::io::Error::from(
                    std::io::ErrorKind::BrokenPipe,
                )));
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_output_error_stops_the_run() {
        let mut engine = CounterEngine::new(CounterSettings::default(), FailAfter { remaining: 3 });
        let started = Instant::now();

        let result = engine.run().await;

        assert!(matches!(result, Err(CounterError::OutputError(_))));
        // 三行成功、第四行失敗前已睡了三次
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_secs(4));
    }
}
