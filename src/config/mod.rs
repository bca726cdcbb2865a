#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::CounterSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;
use toml_config::TomlConfig;

/// Values given on the command line. `None` falls through to the file, then
/// to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub interval_ms: Option<u64>,
    pub exit_message: Option<String>,
}

/// Merges defaults, the optional file and the overrides, then validates.
pub fn resolve_settings(
    file: Option<&TomlConfig>,
    overrides: &SettingsOverrides,
) -> Result<CounterSettings> {
    let mut settings = CounterSettings::default();

    if let Some(file) = file {
        let section = &file.counter;
        if let Some(start) = section.start {
            settings.start = start;
        }
        if let Some(end) = section.end {
            settings.end = end;
        }
        if let Some(ms) = section.interval_ms {
            settings.interval = Duration::from_millis(ms);
        }
        if let Some(message) = &section.exit_message {
            settings.exit_message = message.clone();
        }
    }

    if let Some(start) = overrides.start {
        settings.start = start;
    }
    if let Some(end) = overrides.end {
        settings.end = end;
    }
    if let Some(ms) = overrides.interval_ms {
        settings.interval = Duration::from_millis(ms);
    }
    if let Some(message) = &overrides.exit_message {
        settings.exit_message = message.clone();
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CounterError;

    #[test]
    fn test_no_sources_gives_defaults() {
        let settings = resolve_settings(None, &SettingsOverrides::default()).unwrap();
        assert_eq!(settings, CounterSettings::default());
    }

    #[test]
    fn test_precedence() {
        let file = TomlConfig::from_toml_str(
            "[counter]\nstart = 2\nend = 5\ninterval_ms = 10\nexit_message = \"from file\"\n",
        )
        .unwrap();
        let overrides = SettingsOverrides {
            end: Some(8),
            exit_message: Some("from cli".to_string()),
            ..Default::default()
        };

        let settings = resolve_settings(Some(&file), &overrides).unwrap();
        assert_eq!(settings.start, 2);
        assert_eq!(settings.end, 8);
        assert_eq!(settings.interval, Duration::from_millis(10));
        assert_eq!(settings.exit_message, "from cli");
    }

    #[test]
    fn test_merged_result_is_validated() {
        let file = TomlConfig::from_toml_str("[counter]\nstart = 9\n").unwrap();
        let overrides = SettingsOverrides {
            end: Some(4),
            ..Default::default()
        };

        match resolve_settings(Some(&file), &overrides) {
            Err(CounterError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "counter.end")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
