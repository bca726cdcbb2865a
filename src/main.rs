use clap::Parser;
use counter_printer::utils::logger;
use counter_printer::{CliConfig, CounterEngine, CounterError, StdoutSink};

// 單執行緒 runtime：唯一的暫停點就是每行之後的 sleep
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::debug!("CLI config: {:?}", config);

    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => exit_with(e),
    };

    if config.dry_run {
        let settings = &resolved.settings;
        tracing::info!("🔍 DRY RUN MODE - nothing will be printed to stdout");
        eprintln!(
            "would print {} values ({}..{}) then {:?}, pausing {:?} after each value (~{:?} total)",
            settings.tick_count(),
            settings.start,
            settings.end,
            settings.exit_message,
            settings.interval,
            settings.estimated_duration()
        );
        return Ok(());
    }

    if resolved.print_pid {
        eprintln!("pid: {}", std::process::id());
    }

    let mut engine = CounterEngine::new(resolved.settings, StdoutSink::new());
    match engine.run().await {
        Ok(summary) => {
            tracing::debug!("Run summary: {:?}", summary);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: CounterError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
