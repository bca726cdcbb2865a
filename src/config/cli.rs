use crate::config::toml_config::TomlConfig;
use crate::config::{resolve_settings, SettingsOverrides};
use crate::domain::model::CounterSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "counter-printer")]
#[command(about = "Prints 0 through 9, one line per second, then \"Process Exited\"")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First value printed
    #[arg(long)]
    pub start: Option<u64>,

    /// Stop before this value
    #[arg(long)]
    pub end: Option<u64>,

    /// Pause after each printed value, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Line printed after the count
    #[arg(long)]
    pub exit_message: Option<String>,

    /// Announce the process id on stderr before counting
    #[arg(long)]
    pub print_pid: bool,

    /// Validate and describe the run without printing the count
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Everything the binary needs once flags and file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub settings: CounterSettings,
    pub print_pid: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            start: self.start,
            end: self.end,
            interval_ms: self.interval_ms,
            exit_message: self.exit_message.clone(),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let settings = resolve_settings(file.as_ref(), &self.overrides())?;
        let print_pid = self.print_pid || file.as_ref().is_some_and(TomlConfig::print_pid);

        Ok(ResolvedConfig {
            settings,
            print_pid,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
