pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, ResolvedConfig};

pub use crate::adapters::{MemorySink, StdoutSink, WriterSink};
pub use crate::config::{resolve_settings, toml_config::TomlConfig, SettingsOverrides};
pub use crate::core::counter::CounterEngine;
pub use crate::domain::model::{CounterSettings, RunSummary};
pub use crate::domain::ports::LineSink;
pub use crate::utils::error::{CounterError, Result};
